use anchor_lang::prelude::*;

// 8 discriminator + 32 authority + 32 vrf_coordinator + 8 subscription_id + 32 key_hash
// + 4 callback_gas_limit + 2 request_confirmations + 4 num_words + 1 bump
pub const CONFIG_ACCOUNT_SIZE: usize = 8 + 32 + 32 + 8 + 32 + 4 + 2 + 4 + 1;

/// Deployment parameters for the raffle and the oracle it requests randomness from.
/// Written once by `initialize`.
#[account]
pub struct Config {
    pub authority: Pubkey,
    /// Signing key of the coordinator; the only account allowed to fulfill requests.
    pub vrf_coordinator: Pubkey,
    pub subscription_id: u64,
    /// Gas lane the coordinator should serve the request on.
    pub key_hash: [u8; 32],
    pub callback_gas_limit: u32,
    pub request_confirmations: u16,
    pub num_words: u32,
    pub bump: u8,
}
