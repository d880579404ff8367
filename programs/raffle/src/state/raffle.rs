use anchor_lang::prelude::*;

use crate::error::RaffleError;

/// Upper bound on entries per round. The player list lives inline in the
/// raffle account, so its space has to be reserved up front.
pub const MAX_PLAYERS: usize = 200;

// Space calculation:
// 8 (discriminator) +
// 32 (treasury) +
// 8 (entrance_fee) +
// 8 (interval) +
// 8 (last_timestamp) +
// 1 (raffle_state) +
// 4 + 32 * MAX_PLAYERS (players) +
// 33 (recent_winner: Option<Pubkey>) +
// 9 (pending_request_id: Option<u64>) +
// 8 (next_request_id) +
// 1 (bump)
pub const RAFFLE_ACCOUNT_SIZE: usize =
    8 + 32 + 8 + 8 + 8 + 1 + (4 + 32 * MAX_PLAYERS) + 33 + 9 + 8 + 1;

#[derive(AnchorSerialize, AnchorDeserialize, Clone, Copy, Debug, PartialEq, Eq)]
pub enum RaffleState {
    Open = 0,
    Calculating = 1,
}

/// Result of the upkeep predicate together with the components it was built from.
#[derive(AnchorSerialize, AnchorDeserialize, Clone, Copy, Debug, PartialEq, Eq)]
pub struct UpkeepStatus {
    pub upkeep_needed: bool,
    pub is_open: bool,
    pub time_passed: bool,
    pub has_players: bool,
    pub has_balance: bool,
}

#[account]
pub struct Raffle {
    pub treasury: Pubkey,
    pub entrance_fee: u64,
    /// Minimum number of seconds between two draws.
    pub interval: i64,
    pub last_timestamp: i64,
    pub raffle_state: RaffleState,
    pub players: Vec<Pubkey>,
    pub recent_winner: Option<Pubkey>,
    pub pending_request_id: Option<u64>,
    pub next_request_id: u64,
    pub bump: u8,
}

impl Raffle {
    /// Appends `player` to the current round once the payment and state checks pass.
    /// Moving the lamports is left to the caller.
    pub fn record_entry(&mut self, player: Pubkey, amount: u64) -> Result<()> {
        require!(amount >= self.entrance_fee, RaffleError::NotEnoughPaid);
        require!(
            self.raffle_state == RaffleState::Open,
            RaffleError::NotOpen
        );
        require!(self.players.len() < MAX_PLAYERS, RaffleError::RaffleFull);

        self.players.push(player);
        Ok(())
    }

    pub fn player(&self, index: u64) -> Result<Pubkey> {
        usize::try_from(index)
            .ok()
            .and_then(|index| self.players.get(index).copied())
            .ok_or_else(|| error!(RaffleError::PlayerIndexOutOfBounds))
    }

    pub fn upkeep_status(&self, now: i64, prize_pool: u64) -> UpkeepStatus {
        let is_open = self.raffle_state == RaffleState::Open;
        let time_passed = now.saturating_sub(self.last_timestamp) >= self.interval;
        let has_players = !self.players.is_empty();
        let has_balance = prize_pool > 0;

        UpkeepStatus {
            upkeep_needed: is_open && time_passed && has_players && has_balance,
            is_open,
            time_passed,
            has_players,
            has_balance,
        }
    }

    /// Re-validates the upkeep predicate, then locks the raffle in `Calculating`
    /// and returns the id reserved for the randomness request.
    pub fn begin_calculating(&mut self, now: i64, prize_pool: u64) -> Result<u64> {
        let status = self.upkeep_status(now, prize_pool);
        if !status.upkeep_needed {
            msg!(
                "Upkeep not needed: open={} time_passed={} has_players={} has_balance={}",
                status.is_open,
                status.time_passed,
                status.has_players,
                status.has_balance
            );
            msg!(
                "Prize pool: {}, players: {}, state: {:?}",
                prize_pool,
                self.players.len(),
                self.raffle_state
            );
            return err!(RaffleError::UpkeepNotNeeded);
        }

        let request_id = self.next_request_id;
        self.next_request_id = request_id
            .checked_add(1)
            .ok_or(RaffleError::Overflow)?;
        self.pending_request_id = Some(request_id);
        self.raffle_state = RaffleState::Calculating;

        Ok(request_id)
    }

    pub fn ensure_pending(&self, request_id: u64) -> Result<()> {
        require!(
            self.raffle_state == RaffleState::Calculating
                && self.pending_request_id == Some(request_id),
            RaffleError::NonexistentRequest
        );
        Ok(())
    }

    pub fn select_winner(&self, random_word: &[u8; 32]) -> Result<Pubkey> {
        let index =
            winner_index(random_word, self.players.len()).ok_or(RaffleError::Overflow)?;
        Ok(self.players[index])
    }

    /// Settles the pending request with the first random word: records the winner,
    /// clears the round and reopens the raffle. Paying out the prize is left to the caller.
    pub fn settle(
        &mut self,
        request_id: u64,
        random_words: &[[u8; 32]],
        now: i64,
    ) -> Result<Pubkey> {
        self.ensure_pending(request_id)?;
        let random_word = random_words
            .first()
            .ok_or(RaffleError::MissingRandomWords)?;
        let winner = self.select_winner(random_word)?;

        self.recent_winner = Some(winner);
        self.players.clear();
        self.raffle_state = RaffleState::Open;
        self.last_timestamp = now;
        self.pending_request_id = None;

        Ok(winner)
    }
}

/// `random_word mod player_count`, reading the word as a 256-bit big-endian integer.
///
/// The reduction is exact, so the usual modulo bias for player counts that are
/// not a power of two is kept. Returns `None` when there are no players.
pub fn winner_index(random_word: &[u8; 32], player_count: usize) -> Option<usize> {
    if player_count == 0 {
        return None;
    }

    let modulus = player_count as u128;
    let index = random_word
        .iter()
        .fold(0u128, |acc, byte| (acc * 256 + u128::from(*byte)) % modulus);

    Some(index as usize)
}
