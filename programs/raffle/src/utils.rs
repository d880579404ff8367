use anchor_lang::{prelude::*, system_program};

use crate::error::RaffleError;

/// Moves lamports out of the program-owned treasury PDA.
///
/// Any failure to debit the treasury or credit the recipient is reported as
/// `TransferFailed`, and the recipient's balance is checked afterwards.
pub fn transfer_from_treasury<'info>(
    treasury: &AccountInfo<'info>,
    to: &AccountInfo<'info>,
    amount: u64,
) -> Result<()> {
    if amount == 0 {
        return Ok(());
    }

    let expected = to
        .lamports()
        .checked_add(amount)
        .ok_or(RaffleError::Overflow)?;

    treasury
        .sub_lamports(amount)
        .map_err(|_| RaffleError::TransferFailed)?;
    to.add_lamports(amount)
        .map_err(|_| RaffleError::TransferFailed)?;

    require!(to.lamports() == expected, RaffleError::TransferFailed);
    Ok(())
}

/// Checks that a deposit of `amount` landed: the balance read after the
/// transfer must be exactly `amount` above the one read before it.
pub fn verify_deposit(
    pre_transfer_balance: u64,
    post_transfer_balance: u64,
    amount: u64,
) -> Result<()> {
    let expected = pre_transfer_balance
        .checked_add(amount)
        .ok_or(RaffleError::Overflow)?;
    require!(post_transfer_balance == expected, RaffleError::TransferFailed);
    Ok(())
}

/// Closes a program-owned account, sending all of its lamports to `destination`.
///
/// The data is zeroed and the account handed back to the system program, so a
/// closed record can never be deserialized again.
pub fn close_account<'info>(
    info: &AccountInfo<'info>,
    destination: &AccountInfo<'info>,
) -> Result<()> {
    let lamports = info.lamports();
    info.sub_lamports(lamports)?;
    destination.add_lamports(lamports)?;

    info.try_borrow_mut_data()?.fill(0);
    info.assign(&system_program::ID);
    Ok(())
}
