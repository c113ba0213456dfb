use anchor_lang::prelude::*;

/// Result type for pure pool logic that runs outside an instruction context.
pub type MatchResult<T> = core::result::Result<T, MatchError>;

/// Custom error codes for the match escrow program.
#[error_code]
#[derive(PartialEq, Eq)]
pub enum MatchError {
    #[msg("A match pool already exists for this match id")]
    AlreadyExists,

    #[msg("Unauthorized: match authority signature required")]
    Unauthorized,

    #[msg("Registration is closed")]
    RegistrationClosed,

    #[msg("Match is not open")]
    NotOpen,

    #[msg("Match is already finalized")]
    MatchAlreadyFinalized,

    #[msg("Match is still accepting deposits")]
    MatchStillActive,

    #[msg("Insufficient vault balance for the requested payout")]
    InsufficientVaultBalance,

    #[msg("Token transfer failed")]
    TransferFailed,

    #[msg("Invalid amount (must be > 0)")]
    InvalidAmount,

    #[msg("Invalid match id (1 to 32 bytes)")]
    InvalidMatchId,

    #[msg("Empty prize distribution")]
    EmptyDistribution,

    #[msg("Too many prize distributions in one call")]
    TooManyDistributions,

    #[msg("Recipient accounts do not match the prize distribution list")]
    RecipientAccountsMismatch,

    #[msg("Invalid token mint")]
    InvalidTokenMint,

    #[msg("Invalid token account")]
    InvalidTokenAccount,

    #[msg("Vault balance does not match the committed payout")]
    VaultBalanceMismatch,

    #[msg("Math overflow")]
    MathOverflow,
}
