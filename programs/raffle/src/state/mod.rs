pub use config::*;
pub use raffle::*;
pub use randomness_request::*;
pub use treasury::*;

pub mod config;
pub mod raffle;
pub mod randomness_request;
pub mod treasury;
