use anchor_lang::prelude::*;

// 8 discriminator, 32 pubkey, 1 bump
pub const TREASURY_ACCOUNT_SIZE: usize = 8 + 32 + 1;

#[account]
pub struct Treasury {
    pub raffle: Pubkey,
    pub bump: u8,
}

impl Treasury {
    /// Lamports held above the rent-exempt reserve. This is the prize pool.
    pub fn prize_pool(info: &AccountInfo, rent: &Rent) -> u64 {
        let rent_reserve = rent.minimum_balance(TREASURY_ACCOUNT_SIZE);
        info.lamports().saturating_sub(rent_reserve)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rent_reserve_is_not_part_of_the_prize() {
        let rent = Rent::default();
        let reserve = rent.minimum_balance(TREASURY_ACCOUNT_SIZE);
        let key = Pubkey::new_unique();
        let owner = crate::ID;
        let mut data = vec![0u8; TREASURY_ACCOUNT_SIZE];

        let mut lamports = reserve + 25;
        let info = AccountInfo::new(&key, false, true, &mut lamports, &mut data, &owner, false, 0);
        assert_eq!(Treasury::prize_pool(&info, &rent), 25);

        let mut lamports = reserve - 1;
        let info = AccountInfo::new(&key, false, true, &mut lamports, &mut data, &owner, false, 0);
        assert_eq!(Treasury::prize_pool(&info, &rent), 0);
    }
}
