//! Program-wide constants.

/// Token decimals, fixed for every ledger.
pub const DECIMALS: u8 = 18;

/// Vesting duration in minutes (two 365-day years).
/// Per-minute rates are derived as `allocation / VESTING_DURATION_MINUTES`.
pub const VESTING_DURATION_MINUTES: u64 = 2 * 365 * 24 * 60;

/// Seconds per minute.
pub const SECONDS_PER_MINUTE: i64 = 60;

/// Max beneficiaries stored in a single ledger account.
/// Bounded by the 1232-byte transaction carrying `initialize_ledger`: each
/// beneficiary is a 32-byte instruction argument.
pub const MAX_BENEFICIARIES: usize = 24;

/// Max serialized size of a Solana transaction.
pub const MAX_TRANSACTION_SIZE: usize = 1232;

/// Max token name length in bytes.
pub const MAX_NAME_LEN: usize = 32;

/// Max token symbol length in bytes.
pub const MAX_SYMBOL_LEN: usize = 10;

/// PDA seed of the ledger account (`[LEDGER_SEED, owner]`).
pub const LEDGER_SEED: &[u8] = b"ledger";

/// PDA seed of the token mint (`[MINT_SEED, ledger]`).
pub const MINT_SEED: &[u8] = b"mint";
