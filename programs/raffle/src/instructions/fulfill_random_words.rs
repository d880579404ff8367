use anchor_lang::prelude::*;

use crate::{
    constants::{CONFIG_SEED, RAFFLE_SEED, REQUEST_SEED, TREASURY_SEED},
    error::RaffleError,
    state::{Config, Raffle, RandomnessRequest, Treasury},
    utils::{close_account, transfer_from_treasury},
};

/// Event emitted when a winner is picked and paid
#[event]
pub struct WinnerPicked {
    /// The winner's address
    pub winner: Pubkey,
    /// The request that produced the winning random word
    pub request_id: u64,
    /// Lamports paid out to the winner
    pub prize: u64,
}

/// Coordinator callback delivering the random words for a pending request.
///
/// This instruction can only be executed when:
/// 1. The signer is the coordinator recorded in the config
/// 2. `request_id` is the raffle's pending request and matches the supplied record
/// 3. The request has reached its required confirmations
/// 4. At least one random word is supplied
/// 5. The winner account is the player selected by the first random word
///
/// After execution:
/// - The winner is stored as the raffle's recent winner
/// - The player list is cleared and the raffle is Open again
/// - The whole prize pool is moved from the treasury to the winner
/// - The request record is closed and its rent returned to the requester
///
/// Any failure, including a failed payout, aborts the whole instruction.
pub fn fulfill_random_words(
    ctx: Context<FulfillRandomWords>,
    request_id: u64,
    random_words: Vec<[u8; 32]>,
) -> Result<()> {
    let clock = Clock::get()?;
    let rent = Rent::get()?;
    ctx.accounts.fulfill(request_id, &random_words, &clock, &rent)
}

impl<'info> FulfillRandomWords<'info> {
    pub fn fulfill(
        &mut self,
        request_id: u64,
        random_words: &[[u8; 32]],
        clock: &Clock,
        rent: &Rent,
    ) -> Result<()> {
        self.raffle.ensure_pending(request_id)?;
        let request = self.load_request(request_id)?;

        if clock.slot < request.minimum_fulfill_slot {
            msg!("Current slot: {}", clock.slot);
            msg!("Fulfillable from slot: {}", request.minimum_fulfill_slot);
            return err!(RaffleError::ConfirmationsPending);
        }

        let treasury_info = self.treasury.to_account_info();
        let prize = Treasury::prize_pool(&treasury_info, rent);

        let winner = self
            .raffle
            .settle(request_id, random_words, clock.unix_timestamp)?;
        require_keys_eq!(self.winner.key(), winner, RaffleError::WinnerAccountMismatch);

        transfer_from_treasury(&treasury_info, &self.winner.to_account_info(), prize)?;
        close_account(
            &self.randomness_request.to_account_info(),
            &self.requester.to_account_info(),
        )?;

        msg!("Winner: {}, prize: {}", winner, prize);

        emit!(WinnerPicked {
            winner,
            request_id,
            prize,
        });

        Ok(())
    }

    /// Reads the record of the pending request. A record that is missing,
    /// closed, foreign or filed under another id is `NonexistentRequest`.
    fn load_request(&self, request_id: u64) -> Result<RandomnessRequest> {
        let info = self.randomness_request.to_account_info();
        require_keys_eq!(*info.owner, crate::ID, RaffleError::NonexistentRequest);

        let data = info.try_borrow_data()?;
        let request = RandomnessRequest::try_deserialize(&mut &data[..])
            .map_err(|_| RaffleError::NonexistentRequest)?;
        drop(data);

        let raffle = self.raffle.key();
        let address = Pubkey::create_program_address(
            &[
                REQUEST_SEED,
                raffle.as_ref(),
                request_id.to_le_bytes().as_ref(),
                &[request.bump],
            ],
            &crate::ID,
        )
        .map_err(|_| RaffleError::NonexistentRequest)?;
        require_keys_eq!(info.key(), address, RaffleError::NonexistentRequest);
        require!(
            request.request_id == request_id && request.raffle == raffle,
            RaffleError::NonexistentRequest
        );
        require_keys_eq!(
            self.requester.key(),
            request.requester,
            RaffleError::RequesterMismatch
        );

        Ok(request)
    }
}

#[derive(Accounts)]
#[instruction(request_id: u64)]
pub struct FulfillRandomWords<'info> {
    #[account(
        constraint = coordinator.key() == config.vrf_coordinator @ RaffleError::UnauthorizedCoordinator,
    )]
    pub coordinator: Signer<'info>,

    #[account(
        seeds = [CONFIG_SEED],
        bump = config.bump,
    )]
    pub config: Account<'info, Config>,

    #[account(
        mut,
        seeds = [RAFFLE_SEED],
        bump = raffle.bump,
        has_one = treasury,
        constraint = raffle.pending_request_id == Some(request_id) @ RaffleError::NonexistentRequest,
    )]
    pub raffle: Account<'info, Raffle>,

    #[account(
        mut,
        seeds = [
            TREASURY_SEED,
            raffle.key().as_ref(),
        ],
        bump = treasury.bump,
    )]
    pub treasury: Account<'info, Treasury>,

    /// CHECK: The pending request record, loaded and closed by the handler once
    /// `request_id` is known to be pending. A settled record no longer exists.
    #[account(mut)]
    pub randomness_request: UncheckedAccount<'info>,

    /// Receives the rent of the request record
    #[account(mut)]
    pub requester: SystemAccount<'info>,

    /// CHECK: Compared against the player selected by the random word inside the handler
    #[account(mut)]
    pub winner: UncheckedAccount<'info>,
}
