use anchor_lang::prelude::*;

#[event]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LedgerInitialized {
    pub owner: Pubkey,
    pub mint: Pubkey,
    pub cap: u64,
    pub beneficiary_count: u8,
    pub amount_per_minute: u64,
    pub start_ts: i64,
    pub fully_vested_at: i64,
}

/// Emitted after a successful withdrawal.
#[event]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WithdrawVested {
    pub beneficiary: Pubkey,
    pub amount: u64,
    pub timestamp: i64,
}

#[event]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VestingQuote {
    pub beneficiary: Pubkey,
    pub accrued: u64,
    pub withdrawn: u64,
    pub due: u64,
    pub timestamp: i64,
}
