use anchor_lang::prelude::*;

use crate::{
    constants::{CONFIG_SEED, RAFFLE_SEED},
    state::{Config, Raffle, RaffleState},
};

/// Snapshot of the raffle returned to clients through return data.
#[derive(AnchorSerialize, AnchorDeserialize, Clone, Debug, PartialEq, Eq)]
pub struct RaffleInfo {
    pub entrance_fee: u64,
    pub raffle_state: RaffleState,
    pub interval: i64,
    pub last_timestamp: i64,
    pub recent_winner: Option<Pubkey>,
    pub number_of_players: u64,
    pub pending_request_id: Option<u64>,
    pub num_words: u32,
    pub request_confirmations: u16,
}

impl RaffleInfo {
    pub fn new(raffle: &Raffle, config: &Config) -> Self {
        Self {
            entrance_fee: raffle.entrance_fee,
            raffle_state: raffle.raffle_state,
            interval: raffle.interval,
            last_timestamp: raffle.last_timestamp,
            recent_winner: raffle.recent_winner,
            number_of_players: raffle.players.len() as u64,
            pending_request_id: raffle.pending_request_id,
            num_words: config.num_words,
            request_confirmations: config.request_confirmations,
        }
    }
}

pub fn get_player(ctx: Context<QueryRaffle>, index: u64) -> Result<Pubkey> {
    ctx.accounts.raffle.player(index)
}

pub fn get_raffle_info(ctx: Context<QueryRaffle>) -> Result<RaffleInfo> {
    Ok(RaffleInfo::new(&ctx.accounts.raffle, &ctx.accounts.config))
}

#[derive(Accounts)]
pub struct QueryRaffle<'info> {
    #[account(
        seeds = [RAFFLE_SEED],
        bump = raffle.bump,
    )]
    pub raffle: Account<'info, Raffle>,

    #[account(
        seeds = [CONFIG_SEED],
        bump = config.bump,
    )]
    pub config: Account<'info, Config>,
}
