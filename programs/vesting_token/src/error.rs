use anchor_lang::prelude::*;

/// Custom error codes for the vesting token program.
#[error_code]
pub enum VestingError {
    #[msg("Invalid configuration")]
    InvalidConfig,

    #[msg("Not a beneficiary")]
    NotABeneficiary,

    #[msg("Incorrect amount")]
    IncorrectAmount,

    #[msg("Math overflow")]
    MathOverflow,

    #[msg("Allocation sum would exceed cap")]
    AllocationExceedsCap,

    #[msg("Value transfer failed")]
    TransferFailed,

    #[msg("Invalid token mint")]
    InvalidTokenMint,

    #[msg("Invalid token account")]
    InvalidTokenAccount,

    #[msg("Ledger state serialization failed")]
    StateSerialization,
}
