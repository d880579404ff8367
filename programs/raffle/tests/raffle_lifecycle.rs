use std::collections::HashMap;

use anchor_lang::error::Error;
use anchor_lang::prelude::*;
use raffle::{
    error::RaffleError,
    state::{Raffle, RaffleState, UpkeepStatus},
};

const ENTRANCE_FEE: u64 = 10_000_000; // 0.01 SOL
const INTERVAL: i64 = 30;
const DEPLOYED_AT: i64 = 1_700_000_000;

/// Drives the raffle state machine through whole rounds with a simulated
/// clock, prize pool and wallet balances. Account validation and lamport
/// movement are exercised against real accounts in `fulfill_random_words.rs`.
struct Round {
    raffle: Raffle,
    now: i64,
    prize_pool: u64,
    wallets: HashMap<Pubkey, u64>,
}

impl Round {
    fn deploy() -> Self {
        Self {
            raffle: Raffle {
                treasury: Pubkey::new_unique(),
                entrance_fee: ENTRANCE_FEE,
                interval: INTERVAL,
                last_timestamp: DEPLOYED_AT,
                raffle_state: RaffleState::Open,
                players: Vec::new(),
                recent_winner: None,
                pending_request_id: None,
                next_request_id: 1,
                bump: 254,
            },
            now: DEPLOYED_AT,
            prize_pool: 0,
            wallets: HashMap::new(),
        }
    }

    fn funded_player(&mut self, lamports: u64) -> Pubkey {
        let player = Pubkey::new_unique();
        self.wallets.insert(player, lamports);
        player
    }

    fn balance(&self, wallet: &Pubkey) -> u64 {
        self.wallets.get(wallet).copied().unwrap_or_default()
    }

    fn enter(&mut self, player: Pubkey, amount: u64) -> Result<()> {
        self.raffle.record_entry(player, amount)?;
        *self.wallets.get_mut(&player).unwrap() -= amount;
        self.prize_pool += amount;
        Ok(())
    }

    fn advance(&mut self, seconds: i64) {
        self.now += seconds;
    }

    fn check_upkeep(&self) -> UpkeepStatus {
        self.raffle.upkeep_status(self.now, self.prize_pool)
    }

    fn perform_upkeep(&mut self) -> Result<u64> {
        self.raffle.begin_calculating(self.now, self.prize_pool)
    }

    fn fulfill(&mut self, request_id: u64, random_words: &[[u8; 32]]) -> Result<Pubkey> {
        let winner = self.raffle.settle(request_id, random_words, self.now)?;
        *self.wallets.entry(winner).or_default() += self.prize_pool;
        self.prize_pool = 0;
        Ok(winner)
    }
}

fn random_word(value: u64) -> [u8; 32] {
    let mut word = [0u8; 32];
    word[24..].copy_from_slice(&value.to_be_bytes());
    word
}

#[test]
fn single_entrant_round_pays_the_whole_pool() {
    let mut round = Round::deploy();
    let player = round.funded_player(1_000_000_000);

    round.enter(player, ENTRANCE_FEE).unwrap();
    assert_eq!(round.raffle.players, vec![player]);
    assert!(!round.check_upkeep().upkeep_needed);
    assert!(!round.check_upkeep().time_passed);

    round.advance(INTERVAL + 1);
    assert!(round.check_upkeep().upkeep_needed);

    let request_id = round.perform_upkeep().unwrap();
    assert!(request_id > 0);
    assert_eq!(round.raffle.raffle_state, RaffleState::Calculating);
    assert_eq!(round.raffle.pending_request_id, Some(request_id));

    let balance_before_payout = round.balance(&player);
    let pool = round.prize_pool;
    let winner = round.fulfill(request_id, &[random_word(7)]).unwrap();

    assert_eq!(winner, player);
    assert_eq!(round.raffle.recent_winner, Some(player));
    assert_eq!(round.balance(&player), balance_before_payout + pool);
    assert_eq!(pool, ENTRANCE_FEE);
    assert!(round.raffle.players.is_empty());
    assert_eq!(round.raffle.raffle_state, RaffleState::Open);
    assert_eq!(round.raffle.last_timestamp, DEPLOYED_AT + INTERVAL + 1);
    assert_eq!(round.prize_pool, 0);
}

#[test]
fn calculating_window_blocks_entries_and_second_upkeep() {
    let mut round = Round::deploy();
    let first = round.funded_player(1_000_000_000);
    let late = round.funded_player(1_000_000_000);

    round.enter(first, ENTRANCE_FEE).unwrap();
    round.advance(INTERVAL);
    round.perform_upkeep().unwrap();

    let err = round.enter(late, ENTRANCE_FEE).unwrap_err();
    assert_eq!(err, Error::from(RaffleError::NotOpen));
    assert_eq!(round.balance(&late), 1_000_000_000);

    assert!(!round.check_upkeep().upkeep_needed);
    let err = round.perform_upkeep().unwrap_err();
    assert_eq!(err, Error::from(RaffleError::UpkeepNotNeeded));
}

#[test]
fn unknown_request_leaves_everything_untouched() {
    let mut round = Round::deploy();
    let player = round.funded_player(1_000_000_000);
    round.enter(player, ENTRANCE_FEE).unwrap();
    round.advance(INTERVAL);
    let request_id = round.perform_upkeep().unwrap();

    let err = round
        .fulfill(request_id + 1, &[random_word(7)])
        .unwrap_err();
    assert_eq!(err, Error::from(RaffleError::NonexistentRequest));
    assert_eq!(round.raffle.raffle_state, RaffleState::Calculating);
    assert_eq!(round.raffle.players, vec![player]);
    assert_eq!(round.raffle.pending_request_id, Some(request_id));
    assert_eq!(round.raffle.recent_winner, None);
    assert_eq!(round.prize_pool, ENTRANCE_FEE);

    round.fulfill(request_id, &[random_word(7)]).unwrap();
    let err = round.fulfill(request_id, &[random_word(7)]).unwrap_err();
    assert_eq!(err, Error::from(RaffleError::NonexistentRequest));
}

#[test]
fn consecutive_rounds_use_fresh_request_ids() {
    let mut round = Round::deploy();
    let players: Vec<Pubkey> = (0..4).map(|_| round.funded_player(1_000_000_000)).collect();

    for player in &players {
        round.enter(*player, ENTRANCE_FEE).unwrap();
    }
    round.advance(INTERVAL);
    let first_request = round.perform_upkeep().unwrap();
    // 10 mod 4 selects the third entrant
    let first_winner = round.fulfill(first_request, &[random_word(10)]).unwrap();
    assert_eq!(first_winner, players[2]);
    assert_eq!(
        round.balance(&first_winner),
        1_000_000_000 - ENTRANCE_FEE + ENTRANCE_FEE * 4
    );

    // The next draw waits for a full interval after the payout.
    round.enter(players[0], ENTRANCE_FEE * 3).unwrap();
    round.advance(INTERVAL - 1);
    assert!(!round.check_upkeep().upkeep_needed);
    round.advance(1);

    let second_request = round.perform_upkeep().unwrap();
    assert!(second_request > first_request);
    let second_winner = round.fulfill(second_request, &[random_word(u64::MAX)]).unwrap();
    assert_eq!(second_winner, players[0]);
    assert_eq!(round.raffle.recent_winner, Some(players[0]));
}
