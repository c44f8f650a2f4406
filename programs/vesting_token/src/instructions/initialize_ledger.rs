use anchor_lang::prelude::*;
use anchor_spl::token::{Mint, Token};

use crate::constants::{DECIMALS, LEDGER_SEED, MINT_SEED};
use crate::events::LedgerInitialized;
use crate::state::LedgerState;

pub fn initialize_ledger(
    ctx: Context<InitializeLedger>,
    name: String,
    symbol: String,
    cap: u64,
    beneficiaries: Vec<Pubkey>,
) -> Result<()> {
    let now = Clock::get()?.unix_timestamp;

    let mut state = LedgerState::new(
        ctx.accounts.owner.key(),
        ctx.accounts.mint.key(),
        name,
        symbol,
        cap,
        &beneficiaries,
        now,
    )?;
    state.bump = ctx.bumps.ledger;
    state.mint_bump = ctx.bumps.mint;

    let fully_vested_at = match state.beneficiaries().first() {
        Some(entry) => entry.fully_vested_at()?,
        None => now,
    };

    emit!(LedgerInitialized {
        owner: state.owner,
        mint: state.mint,
        cap: state.cap,
        beneficiary_count: state.beneficiaries().len() as u8,
        amount_per_minute: state.amount_per_minute(),
        start_ts: now,
        fully_vested_at,
    });
    msg!(
        "Ledger {} ({}) cap={} beneficiaries={} rate={}/min",
        state.name,
        state.symbol,
        state.cap,
        state.beneficiaries().len(),
        state.amount_per_minute()
    );

    ctx.accounts.ledger.set_inner(state);
    Ok(())
}

#[derive(Accounts)]
#[instruction(name: String, symbol: String, cap: u64, beneficiaries: Vec<Pubkey>)]
pub struct InitializeLedger<'info> {
    #[account(
        init,
        payer = owner,
        space = LedgerState::space(name.len(), symbol.len(), beneficiaries.len()),
        seeds = [LEDGER_SEED, owner.key().as_ref()],
        bump
    )]
    pub ledger: Account<'info, LedgerState>,

    #[account(
        init,
        payer = owner,
        mint::decimals = DECIMALS,
        mint::authority = ledger,
        seeds = [MINT_SEED, ledger.key().as_ref()],
        bump
    )]
    pub mint: Account<'info, Mint>,

    #[account(mut)]
    pub owner: Signer<'info>,

    pub token_program: Program<'info, Token>,
    pub system_program: Program<'info, System>,
    pub rent: Sysvar<'info, Rent>,
}

#[cfg(test)]
mod tests {
    use anchor_lang::InstructionData;

    use super::*;
    use crate::constants::{MAX_BENEFICIARIES, MAX_NAME_LEN, MAX_SYMBOL_LEN, MAX_TRANSACTION_SIZE};
    use crate::test_utils::key;

    /// Legacy message carrying one signature and the seven accounts of
    /// `initialize_ledger` (ledger, mint, owner, token, system, rent, program).
    fn message_overhead(accounts: usize) -> usize {
        1 + 64 +            // signature count + owner signature
        3 +                 // header
        1 + (accounts + 1) * 32 +
        32 +                // recent blockhash
        1 + 1 +             // instruction count + program index
        1 + accounts +      // account indexes
        2                   // data length (compact-u16)
    }

    #[test]
    fn max_beneficiaries_fit_in_one_transaction() {
        let beneficiaries: Vec<Pubkey> = (1..=MAX_BENEFICIARIES as u8).map(key).collect();
        let data = crate::instruction::InitializeLedger {
            name: "N".repeat(MAX_NAME_LEN),
            symbol: "S".repeat(MAX_SYMBOL_LEN),
            cap: u64::MAX,
            beneficiaries,
        }
        .data();
        assert!(message_overhead(6) + data.len() <= MAX_TRANSACTION_SIZE);
    }

    #[test]
    fn max_beneficiaries_fit_in_ledger_account() {
        let space = LedgerState::space(MAX_NAME_LEN, MAX_SYMBOL_LEN, MAX_BENEFICIARIES);
        assert!(space <= 10_240);
    }
}
