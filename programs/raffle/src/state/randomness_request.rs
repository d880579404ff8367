use anchor_lang::prelude::*;

use crate::{error::RaffleError, state::Config};

// 8 discriminator + 8 request_id + 32 raffle + 32 requester + 8 subscription_id
// + 32 key_hash + 4 callback_gas_limit + 4 num_words + 8 request_slot
// + 8 minimum_fulfill_slot + 1 bump
pub const RANDOMNESS_REQUEST_ACCOUNT_SIZE: usize = 8 + 8 + 32 + 32 + 8 + 32 + 4 + 4 + 8 + 8 + 1;

/// Outstanding randomness request, one per upkeep.
///
/// Seeds: `["request", raffle, request_id.to_le_bytes()]`
///
/// Created by `perform_upkeep` and closed back to `requester` once the
/// coordinator fulfills it.
#[account]
#[derive(Debug)]
pub struct RandomnessRequest {
    pub request_id: u64,
    pub raffle: Pubkey,
    /// Paid the rent for this record and receives it back on close.
    pub requester: Pubkey,
    pub subscription_id: u64,
    pub key_hash: [u8; 32],
    pub callback_gas_limit: u32,
    pub num_words: u32,
    pub request_slot: u64,
    /// First slot at which the coordinator may deliver the random words.
    pub minimum_fulfill_slot: u64,
    pub bump: u8,
}

impl RandomnessRequest {
    /// Record for `request_id`, issued at `request_slot` with the oracle
    /// parameters from `config`.
    pub fn issue(
        request_id: u64,
        raffle: Pubkey,
        requester: Pubkey,
        config: &Config,
        request_slot: u64,
        bump: u8,
    ) -> Result<Self> {
        let minimum_fulfill_slot = request_slot
            .checked_add(u64::from(config.request_confirmations))
            .ok_or(RaffleError::Overflow)?;

        Ok(Self {
            request_id,
            raffle,
            requester,
            subscription_id: config.subscription_id,
            key_hash: config.key_hash,
            callback_gas_limit: config.callback_gas_limit,
            num_words: config.num_words,
            request_slot,
            minimum_fulfill_slot,
            bump,
        })
    }
}
