use anchor_lang::prelude::*;
use instructions::*;

pub mod constants;
pub mod error;
pub mod instructions;
pub mod state;
pub mod utils;

use state::UpkeepStatus;

declare_id!("BaFfLe7v3KnCq6ZpWbNn4sQeYxJtU2hGdM8cR1aLwPzq");

#[program]
pub mod raffle {
    use super::*;

    pub fn initialize(ctx: Context<Initialize>, params: InitializeParams) -> Result<()> {
        instructions::initialize::initialize(ctx, params)
    }

    pub fn enter_raffle(ctx: Context<EnterRaffle>, amount: u64) -> Result<()> {
        instructions::enter_raffle::enter_raffle(ctx, amount)
    }

    pub fn check_upkeep(ctx: Context<CheckUpkeep>) -> Result<UpkeepStatus> {
        instructions::check_upkeep::check_upkeep(ctx)
    }

    pub fn perform_upkeep(ctx: Context<PerformUpkeep>) -> Result<()> {
        instructions::perform_upkeep::perform_upkeep(ctx)
    }

    pub fn fulfill_random_words(
        ctx: Context<FulfillRandomWords>,
        request_id: u64,
        random_words: Vec<[u8; 32]>,
    ) -> Result<()> {
        instructions::fulfill_random_words::fulfill_random_words(ctx, request_id, random_words)
    }

    pub fn get_player(ctx: Context<QueryRaffle>, index: u64) -> Result<Pubkey> {
        instructions::queries::get_player(ctx, index)
    }

    pub fn get_raffle_info(ctx: Context<QueryRaffle>) -> Result<RaffleInfo> {
        instructions::queries::get_raffle_info(ctx)
    }
}
