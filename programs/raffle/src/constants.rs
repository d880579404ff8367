pub const CONFIG_SEED: &[u8] = b"config";
pub const RAFFLE_SEED: &[u8] = b"raffle";
pub const TREASURY_SEED: &[u8] = b"treasury";
pub const REQUEST_SEED: &[u8] = b"request";

/// Most random words a single request may ask the coordinator for. Every word
/// travels in the fulfillment transaction, so this stays well inside its size limit.
pub const MAX_NUM_WORDS: u32 = 10;
/// Most confirmations a request may wait for before it can be fulfilled.
pub const MAX_REQUEST_CONFIRMATIONS: u16 = 200;
