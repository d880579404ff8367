use anchor_lang::prelude::*;

use crate::{
    constants::{
        CONFIG_SEED, MAX_NUM_WORDS, MAX_REQUEST_CONFIRMATIONS, RAFFLE_SEED, TREASURY_SEED,
    },
    error::RaffleError,
    program::Raffle as RaffleProgram,
    state::{
        Config, Raffle, RaffleState, Treasury, CONFIG_ACCOUNT_SIZE, RAFFLE_ACCOUNT_SIZE,
        TREASURY_ACCOUNT_SIZE,
    },
};

/// Deployment parameters. Everything here is fixed for the lifetime of the program.
#[derive(AnchorSerialize, AnchorDeserialize, Clone, Debug)]
pub struct InitializeParams {
    /// Lamports required per entry
    pub entrance_fee: u64,
    /// Seconds between draws
    pub interval: i64,
    pub vrf_coordinator: Pubkey,
    pub subscription_id: u64,
    pub key_hash: [u8; 32],
    pub callback_gas_limit: u32,
    pub request_confirmations: u16,
    pub num_words: u32,
}

impl InitializeParams {
    pub fn validate(&self) -> Result<()> {
        require!(self.entrance_fee > 0, RaffleError::InvalidEntranceFee);
        require!(self.interval > 0, RaffleError::InvalidInterval);
        require!(
            self.num_words > 0 && self.num_words <= MAX_NUM_WORDS,
            RaffleError::InvalidNumWords
        );
        require!(
            self.request_confirmations > 0
                && self.request_confirmations <= MAX_REQUEST_CONFIRMATIONS,
            RaffleError::InvalidRequestConfirmations
        );
        require!(
            self.callback_gas_limit > 0,
            RaffleError::InvalidCallbackGasLimit
        );
        Ok(())
    }
}

/// Event emitted once the raffle is deployed
#[event]
pub struct RaffleInitialized {
    pub raffle: Pubkey,
    pub entrance_fee: u64,
    pub interval: i64,
    pub vrf_coordinator: Pubkey,
    pub subscription_id: u64,
}

/// Creates the config, raffle and treasury PDAs.
/// This should be called once during program deployment
///
/// # Arguments
/// * `ctx` - The context object containing all required accounts
/// * `params` - Entrance fee, draw interval and oracle request parameters
///
/// # Account Validations
/// * Authority - Signer needs to be the upgrade authority of the program
/// * Config - New PDA with seeds ["config"]
/// * Raffle - New PDA with seeds ["raffle"]
/// * Treasury - New PDA with seeds ["treasury", raffle_key]
///
/// # Implementation Notes
/// - The raffle starts Open with an empty player list
/// - `last_timestamp` starts at the current time, so the first draw is one interval away
/// - Request ids start at 1
pub fn initialize(ctx: Context<Initialize>, params: InitializeParams) -> Result<()> {
    params.validate()?;
    let now = Clock::get()?.unix_timestamp;

    let config = &mut ctx.accounts.config;
    config.authority = ctx.accounts.authority.key();
    config.vrf_coordinator = params.vrf_coordinator;
    config.subscription_id = params.subscription_id;
    config.key_hash = params.key_hash;
    config.callback_gas_limit = params.callback_gas_limit;
    config.request_confirmations = params.request_confirmations;
    config.num_words = params.num_words;
    config.bump = ctx.bumps.config;

    let raffle = &mut ctx.accounts.raffle;
    raffle.treasury = ctx.accounts.treasury.key();
    raffle.entrance_fee = params.entrance_fee;
    raffle.interval = params.interval;
    raffle.last_timestamp = now;
    raffle.raffle_state = RaffleState::Open;
    raffle.players = Vec::new();
    raffle.recent_winner = None;
    raffle.pending_request_id = None;
    raffle.next_request_id = 1;
    raffle.bump = ctx.bumps.raffle;

    ctx.accounts.treasury.raffle = raffle.key();
    ctx.accounts.treasury.bump = ctx.bumps.treasury;

    msg!(
        "Raffle initialized: fee={} interval={}s coordinator={}",
        params.entrance_fee,
        params.interval,
        params.vrf_coordinator
    );

    emit!(RaffleInitialized {
        raffle: raffle.key(),
        entrance_fee: params.entrance_fee,
        interval: params.interval,
        vrf_coordinator: params.vrf_coordinator,
        subscription_id: params.subscription_id,
    });

    Ok(())
}

#[derive(Accounts)]
pub struct Initialize<'info> {
    #[account(
        init,
        payer = authority,
        space = CONFIG_ACCOUNT_SIZE,
        seeds = [CONFIG_SEED],
        bump
    )]
    pub config: Account<'info, Config>,

    #[account(
        init,
        payer = authority,
        space = RAFFLE_ACCOUNT_SIZE,
        seeds = [RAFFLE_SEED],
        bump
    )]
    pub raffle: Account<'info, Raffle>,

    #[account(
        init,
        payer = authority,
        space = TREASURY_ACCOUNT_SIZE,
        seeds = [
            TREASURY_SEED,
            raffle.key().as_ref(),
        ],
        bump,
    )]
    pub treasury: Account<'info, Treasury>,

    #[account(
        constraint = program.programdata_address()? == Some(program_data.key()) @ RaffleError::InvalidProgramData
    )]
    pub program: Program<'info, RaffleProgram>,

    #[account(
        constraint = is_upgrade_authority(&program_data, &authority.key()) @ RaffleError::NotUpgradeAuthority
    )]
    pub program_data: Account<'info, ProgramData>,

    #[account(mut)]
    pub authority: Signer<'info>,

    pub system_program: Program<'info, System>,
}

/// An immutable program has no upgrade authority, so nobody can initialize it.
pub fn is_upgrade_authority(program_data: &ProgramData, authority: &Pubkey) -> bool {
    program_data.upgrade_authority_address == Some(*authority)
}
