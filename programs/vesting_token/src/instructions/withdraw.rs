use anchor_lang::prelude::*;
use anchor_spl::token::{self, Mint, MintTo, Token, TokenAccount};

use crate::constants::LEDGER_SEED;
use crate::error::VestingError;
use crate::interfaces::{ProgramEvents, ValueSink};
use crate::state::LedgerState;

pub fn withdraw(ctx: Context<Withdraw>, amount: u64) -> Result<()> {
    // Capture AccountInfos/keys before taking the mutable ledger borrow.
    let mut sink = MintToSink {
        token_program: ctx.accounts.token_program.to_account_info(),
        mint: ctx.accounts.mint.to_account_info(),
        destination: ctx.accounts.beneficiary_token_account.to_account_info(),
        authority: ctx.accounts.ledger.to_account_info(),
        owner: ctx.accounts.ledger.owner,
        bump: ctx.accounts.ledger.bump,
    };
    let beneficiary = ctx.accounts.beneficiary.key();
    let now = Clock::get()?.unix_timestamp;

    let ledger: &mut LedgerState = &mut ctx.accounts.ledger;
    let receipt = ledger.withdraw(&beneficiary, now, amount, &mut sink, &mut ProgramEvents)?;

    msg!(
        "Withdrew {} to {} (withdrawn={}, remaining={})",
        receipt.amount,
        receipt.beneficiary,
        receipt.withdrawn_total,
        receipt.remaining_allocation
    );
    Ok(())
}

/// Mints withdrawn amounts into the beneficiary's token account, signed by the ledger PDA.
struct MintToSink<'info> {
    token_program: AccountInfo<'info>,
    mint: AccountInfo<'info>,
    destination: AccountInfo<'info>,
    authority: AccountInfo<'info>,
    owner: Pubkey,
    bump: u8,
}

impl<'info> ValueSink for MintToSink<'info> {
    fn transfer(
        &mut self,
        recipient: &Pubkey,
        amount: u64,
    ) -> core::result::Result<(), VestingError> {
        let bump = [self.bump];
        let signer_seeds: &[&[&[u8]]] = &[&[LEDGER_SEED, self.owner.as_ref(), &bump]];
        token::mint_to(
            CpiContext::new_with_signer(
                self.token_program.clone(),
                MintTo {
                    mint: self.mint.clone(),
                    to: self.destination.clone(),
                    authority: self.authority.clone(),
                },
                signer_seeds,
            ),
            amount,
        )
        .map_err(|err| {
            msg!("mint_to {} for {} failed: {}", amount, recipient, err);
            VestingError::TransferFailed
        })
    }
}

#[derive(Accounts)]
pub struct Withdraw<'info> {
    #[account(
        mut,
        seeds = [LEDGER_SEED, ledger.owner.as_ref()],
        bump = ledger.bump,
    )]
    pub ledger: Account<'info, LedgerState>,

    #[account(
        mut,
        address = ledger.mint @ VestingError::InvalidTokenMint,
    )]
    pub mint: Account<'info, Mint>,

    #[account(
        mut,
        constraint = beneficiary_token_account.mint == ledger.mint @ VestingError::InvalidTokenMint,
        constraint = beneficiary_token_account.owner == beneficiary.key() @ VestingError::InvalidTokenAccount,
    )]
    pub beneficiary_token_account: Account<'info, TokenAccount>,

    pub beneficiary: Signer<'info>,

    pub token_program: Program<'info, Token>,
}
