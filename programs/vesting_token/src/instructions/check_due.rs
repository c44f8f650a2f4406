use anchor_lang::prelude::*;

use crate::constants::LEDGER_SEED;
use crate::state::LedgerState;

/// Returns the amount `beneficiary` must request to withdraw right now.
pub fn check_due(ctx: Context<CheckDue>, beneficiary: Pubkey) -> Result<u64> {
    let ledger: &LedgerState = &ctx.accounts.ledger;
    let now = Clock::get()?.unix_timestamp;

    let quote = ledger.quote(&beneficiary, now)?;
    let due = quote.due;
    emit!(quote);

    Ok(due)
}

#[derive(Accounts)]
pub struct CheckDue<'info> {
    #[account(seeds = [LEDGER_SEED, ledger.owner.as_ref()], bump = ledger.bump)]
    pub ledger: Account<'info, LedgerState>,
}
