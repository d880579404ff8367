use anchor_lang::prelude::*;

use crate::{
    constants::{RAFFLE_SEED, TREASURY_SEED},
    state::{Raffle, Treasury, UpkeepStatus},
};

/// Read-only upkeep predicate polled by the keeper.
///
/// Upkeep is needed when the raffle is open, at least `interval` seconds have
/// passed since the last draw, there is at least one player and the treasury
/// holds a prize. The components are returned alongside the verdict.
pub fn check_upkeep(ctx: Context<CheckUpkeep>) -> Result<UpkeepStatus> {
    let now = Clock::get()?.unix_timestamp;
    let prize_pool =
        Treasury::prize_pool(&ctx.accounts.treasury.to_account_info(), &Rent::get()?);

    Ok(ctx.accounts.raffle.upkeep_status(now, prize_pool))
}

#[derive(Accounts)]
pub struct CheckUpkeep<'info> {
    #[account(
        seeds = [RAFFLE_SEED],
        bump = raffle.bump,
        has_one = treasury,
    )]
    pub raffle: Account<'info, Raffle>,

    #[account(
        seeds = [
            TREASURY_SEED,
            raffle.key().as_ref(),
        ],
        bump = treasury.bump,
    )]
    pub treasury: Account<'info, Treasury>,
}
