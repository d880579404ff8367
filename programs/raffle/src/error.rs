use anchor_lang::error_code;

#[error_code]
pub enum RaffleError {
    Overflow,
    #[msg("Not enough lamports paid to enter the raffle")]
    NotEnoughPaid,
    #[msg("Raffle is not open")]
    NotOpen,
    #[msg("Upkeep is not needed")]
    UpkeepNotNeeded,
    #[msg("Prize transfer to the winner failed")]
    TransferFailed,
    #[msg("Randomness request does not exist or was already fulfilled")]
    NonexistentRequest,
    #[msg("Raffle has reached the maximum number of players")]
    RaffleFull,
    #[msg("Only the configured VRF coordinator may fulfill randomness")]
    UnauthorizedCoordinator,
    #[msg("Randomness request has not reached the required confirmations")]
    ConfirmationsPending,
    #[msg("Fulfillment carried no random words")]
    MissingRandomWords,
    #[msg("Winner account does not match the selected player")]
    WinnerAccountMismatch,
    #[msg("Player index is out of bounds")]
    PlayerIndexOutOfBounds,
    #[msg("Interval must be greater than zero")]
    InvalidInterval,
    #[msg("Number of random words is out of range")]
    InvalidNumWords,
    #[msg("Request confirmations are out of range")]
    InvalidRequestConfirmations,
    #[msg("Callback gas limit must be greater than zero")]
    InvalidCallbackGasLimit,
    #[msg("Entrance fee must be greater than zero")]
    InvalidEntranceFee,
    #[msg("Signer is not the program's upgrade authority")]
    NotUpgradeAuthority,
    #[msg("Program data account does not belong to this program")]
    InvalidProgramData,
    #[msg("Rent refund account is not the request's requester")]
    RequesterMismatch,
}
