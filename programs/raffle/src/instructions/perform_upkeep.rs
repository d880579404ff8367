use anchor_lang::prelude::*;

use crate::{
    constants::{CONFIG_SEED, RAFFLE_SEED, REQUEST_SEED, TREASURY_SEED},
    state::{
        Config, Raffle, RandomnessRequest, Treasury, RANDOMNESS_REQUEST_ACCOUNT_SIZE,
    },
};

/// Event emitted when a randomness request is submitted to the coordinator
#[event]
pub struct RequestedRaffleWinner {
    pub request_id: u64,
    pub raffle: Pubkey,
    pub subscription_id: u64,
    pub key_hash: [u8; 32],
    pub num_words: u32,
    pub minimum_fulfill_slot: u64,
}

/// Closes the current round and asks the coordinator for randomness.
///
/// Anyone may call this: the upkeep predicate is re-checked here and the
/// outcome does not depend on the caller. The caller pays the rent for the
/// request record and gets it back when the request is fulfilled.
///
/// After execution:
/// - The raffle is in Calculating state and refuses new entries
/// - A `RandomnessRequest` PDA carries the oracle parameters for the coordinator
/// - The raffle's pending request id points at that record
///
/// # Errors
/// - `UpkeepNotNeeded` if any part of the upkeep predicate is false; the
///   individual components are written to the program log
pub fn perform_upkeep(ctx: Context<PerformUpkeep>) -> Result<()> {
    let clock = Clock::get()?;
    let prize_pool =
        Treasury::prize_pool(&ctx.accounts.treasury.to_account_info(), &Rent::get()?);

    let raffle = &mut ctx.accounts.raffle;
    let request_id = raffle.begin_calculating(clock.unix_timestamp, prize_pool)?;

    let config = &ctx.accounts.config;
    let request = RandomnessRequest::issue(
        request_id,
        raffle.key(),
        ctx.accounts.caller.key(),
        config,
        clock.slot,
        ctx.bumps.randomness_request,
    )?;
    let minimum_fulfill_slot = request.minimum_fulfill_slot;
    ctx.accounts.randomness_request.set_inner(request);

    msg!(
        "Requested {} random words, request id {}, players {}, prize {}",
        config.num_words,
        request_id,
        raffle.players.len(),
        prize_pool
    );

    emit!(RequestedRaffleWinner {
        request_id,
        raffle: raffle.key(),
        subscription_id: config.subscription_id,
        key_hash: config.key_hash,
        num_words: config.num_words,
        minimum_fulfill_slot,
    });

    Ok(())
}

#[derive(Accounts)]
pub struct PerformUpkeep<'info> {
    #[account(
        mut,
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

    #[account(
        seeds = [CONFIG_SEED],
        bump = config.bump,
    )]
    pub config: Account<'info, Config>,

    /// Record of the request about to be issued, keyed by the raffle's next request id
    #[account(
        init,
        payer = caller,
        space = RANDOMNESS_REQUEST_ACCOUNT_SIZE,
        seeds = [
            REQUEST_SEED,
            raffle.key().as_ref(),
            raffle.next_request_id.to_le_bytes().as_ref(),
        ],
        bump,
    )]
    pub randomness_request: Account<'info, RandomnessRequest>,

    /// Keeper or any other account triggering the upkeep
    #[account(mut)]
    pub caller: Signer<'info>,

    pub system_program: Program<'info, System>,
}
