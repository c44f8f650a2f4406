use anchor_lang::prelude::*;

pub mod constants;
pub mod error;
pub mod events;
pub mod instructions;
pub mod interfaces;
pub mod state;
pub mod utils;

#[cfg(test)]
mod test_utils;

pub use instructions::*;

declare_id!("9ph8ohtcE3Roo3gcBP257fB2zA5BYiJrNypHZNCBdJQS");

#[program]
pub mod vesting_token {
    use super::*;

    pub fn initialize_ledger(
        ctx: Context<InitializeLedger>,
        name: String,
        symbol: String,
        cap: u64,
        beneficiaries: Vec<Pubkey>,
    ) -> Result<()> {
        initialize_ledger::initialize_ledger(ctx, name, symbol, cap, beneficiaries)
    }

    pub fn withdraw(ctx: Context<Withdraw>, amount: u64) -> Result<()> {
        withdraw::withdraw(ctx, amount)
    }

    pub fn check_due(ctx: Context<CheckDue>, beneficiary: Pubkey) -> Result<u64> {
        check_due::check_due(ctx, beneficiary)
    }
}
