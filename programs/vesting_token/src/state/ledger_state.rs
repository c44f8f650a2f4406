use anchor_lang::prelude::*;
use core::result::Result;

use crate::constants::{
    DECIMALS, MAX_BENEFICIARIES, MAX_NAME_LEN, MAX_SYMBOL_LEN, VESTING_DURATION_MINUTES,
};
use crate::error::VestingError;
use crate::events::{VestingQuote, WithdrawVested};
use crate::interfaces::{EventSink, ValueSink};
use crate::state::VestingAccount;

/// Ledger PDA: capped supply, token metadata and the fixed beneficiary registry.
#[account]
#[derive(Debug, PartialEq, Eq)]
pub struct LedgerState {
    /// Constructing signer.
    pub owner: Pubkey,
    /// Token mint; the ledger PDA is its mint authority.
    pub mint: Pubkey,
    pub bump: u8,
    pub mint_bump: u8,
    pub name: String,
    pub symbol: String,
    pub decimals: u8,
    /// Supply ceiling (raw units).
    pub cap: u64,
    /// Vesting duration the per-minute rates were derived from.
    pub duration_minutes: u64,
    /// Sum of `withdrawn` over all entries.
    minted_supply: u64,
    /// Built once in input order; never added to, removed from or reordered.
    beneficiaries: Vec<VestingAccount>,
}

/// Outcome of a successful withdrawal.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct WithdrawReceipt {
    pub beneficiary: Pubkey,
    pub amount: u64,
    pub withdrawn_total: u64,
    pub remaining_allocation: u64,
    pub timestamp: i64,
}

impl LedgerState {
    /// Space for discriminator + fixed fields + length-prefixed strings and entries.
    pub const fn space(name_len: usize, symbol_len: usize, beneficiary_count: usize) -> usize {
        8 +                 // discriminator
        32 +                // owner
        32 +                // mint
        1 +                 // bump
        1 +                 // mint_bump
        4 + name_len +      // name
        4 + symbol_len +    // symbol
        1 +                 // decimals
        8 +                 // cap
        8 +                 // duration_minutes
        8 +                 // minted_supply
        4 + beneficiary_count * VestingAccount::SIZE
    }

    /// Builds a ledger vesting over [`VESTING_DURATION_MINUTES`].
    pub fn new(
        owner: Pubkey,
        mint: Pubkey,
        name: String,
        symbol: String,
        cap: u64,
        beneficiaries: &[Pubkey],
        start_ts: i64,
    ) -> Result<Self, VestingError> {
        Self::with_duration(
            owner,
            mint,
            name,
            symbol,
            cap,
            beneficiaries,
            start_ts,
            VESTING_DURATION_MINUTES,
        )
    }

    /// Splits `cap` evenly (floor) across `beneficiaries`; the remainder is
    /// never allocated. Each rate is `allocation / duration_minutes` (floor).
    #[allow(clippy::too_many_arguments)]
    pub fn with_duration(
        owner: Pubkey,
        mint: Pubkey,
        name: String,
        symbol: String,
        cap: u64,
        beneficiaries: &[Pubkey],
        start_ts: i64,
        duration_minutes: u64,
    ) -> Result<Self, VestingError> {
        if cap == 0 || duration_minutes == 0 {
            return Err(VestingError::InvalidConfig);
        }
        if name.is_empty() || name.len() > MAX_NAME_LEN {
            return Err(VestingError::InvalidConfig);
        }
        if symbol.is_empty() || symbol.len() > MAX_SYMBOL_LEN {
            return Err(VestingError::InvalidConfig);
        }
        if beneficiaries.is_empty() || beneficiaries.len() > MAX_BENEFICIARIES {
            return Err(VestingError::InvalidConfig);
        }
        for (i, wallet) in beneficiaries.iter().enumerate() {
            if *wallet == Pubkey::default() {
                return Err(VestingError::InvalidConfig);
            }
            if beneficiaries[..i].contains(wallet) {
                return Err(VestingError::InvalidConfig);
            }
        }

        let allocation = cap / beneficiaries.len() as u64;
        let amount_per_minute = allocation / duration_minutes;
        if allocation == 0 || amount_per_minute == 0 {
            return Err(VestingError::InvalidConfig);
        }

        let entries: Vec<VestingAccount> = beneficiaries
            .iter()
            .map(|wallet| VestingAccount {
                wallet: *wallet,
                allocation,
                amount_per_minute,
                start_ts,
                withdrawn: 0,
            })
            .collect();

        // Enforce allocation sum does not exceed the cap.
        let sum = allocations_sum_u128(&entries)?;
        if sum > cap as u128 {
            return Err(VestingError::AllocationExceedsCap);
        }

        Ok(Self {
            owner,
            mint,
            bump: 0,
            mint_bump: 0,
            name,
            symbol,
            decimals: DECIMALS,
            cap,
            duration_minutes,
            minted_supply: 0,
            beneficiaries: entries,
        })
    }

    pub fn owner(&self) -> Pubkey {
        self.owner
    }

    pub fn cap(&self) -> u64 {
        self.cap
    }

    pub fn mint(&self) -> Pubkey {
        self.mint
    }

    pub fn duration_minutes(&self) -> u64 {
        self.duration_minutes
    }

    /// `(name, symbol, decimals)`.
    pub fn metadata(&self) -> (&str, &str, u8) {
        (&self.name, &self.symbol, self.decimals)
    }

    /// Tokens minted so far through withdrawals.
    pub fn total_supply(&self) -> u64 {
        self.minted_supply
    }

    /// Cap share that no beneficiary can ever withdraw.
    pub fn unallocated(&self) -> u64 {
        let allocated: u64 = self.beneficiaries.iter().map(|e| e.allocation).sum();
        self.cap.saturating_sub(allocated)
    }

    /// Uniform per-minute rate; every entry shares it because the cap is split evenly.
    pub fn amount_per_minute(&self) -> u64 {
        self.beneficiaries
            .first()
            .map(|e| e.amount_per_minute)
            .unwrap_or_default()
    }

    pub fn beneficiaries(&self) -> &[VestingAccount] {
        &self.beneficiaries
    }

    pub fn is_beneficiary(&self, wallet: &Pubkey) -> bool {
        self.position(wallet).is_some()
    }

    pub fn account(&self, wallet: &Pubkey) -> Result<&VestingAccount, VestingError> {
        self.position(wallet)
            .map(|idx| &self.beneficiaries[idx])
            .ok_or(VestingError::NotABeneficiary)
    }

    /// Amount `beneficiary` must request to withdraw at `now_ts`.
    pub fn accrued_due(&self, beneficiary: &Pubkey, now_ts: i64) -> Result<u64, VestingError> {
        self.account(beneficiary)?.due(now_ts)
    }

    /// Pays out exactly the amount due to `caller` at `now_ts`.
    ///
    /// The entry and the minted supply are committed before `sink` runs; if the
    /// sink fails both are restored and nothing is emitted, so a failed call
    /// leaves the ledger unchanged.
    pub fn withdraw<S, E>(
        &mut self,
        caller: &Pubkey,
        now_ts: i64,
        amount: u64,
        sink: &mut S,
        events: &mut E,
    ) -> Result<WithdrawReceipt, VestingError>
    where
        S: ValueSink + ?Sized,
        E: EventSink + ?Sized,
    {
        let idx = self.position(caller).ok_or(VestingError::NotABeneficiary)?;
        let entry = self.beneficiaries[idx];

        let due = entry.due(now_ts)?;
        if due == 0 || amount != due {
            return Err(VestingError::IncorrectAmount);
        }

        let withdrawn = entry
            .withdrawn
            .checked_add(amount)
            .ok_or(VestingError::MathOverflow)?;
        let minted = self
            .minted_supply
            .checked_add(amount)
            .ok_or(VestingError::MathOverflow)?;
        if minted > self.cap {
            return Err(VestingError::AllocationExceedsCap);
        }

        self.beneficiaries[idx].withdrawn = withdrawn;
        self.minted_supply = minted;

        if let Err(err) = sink.transfer(caller, amount) {
            self.beneficiaries[idx].withdrawn = entry.withdrawn;
            self.minted_supply = minted - amount;
            return Err(err);
        }

        events.emit_withdraw(WithdrawVested {
            beneficiary: *caller,
            amount,
            timestamp: now_ts,
        });

        Ok(WithdrawReceipt {
            beneficiary: *caller,
            amount,
            withdrawn_total: withdrawn,
            remaining_allocation: entry.allocation - withdrawn,
            timestamp: now_ts,
        })
    }

    /// blake3 digest of the Borsh encoding of the full state, for comparing snapshots.
    pub fn fingerprint(&self) -> Result<[u8; 32], VestingError> {
        let mut buf = Vec::with_capacity(Self::space(
            self.name.len(),
            self.symbol.len(),
            self.beneficiaries.len(),
        ));
        AnchorSerialize::serialize(self, &mut buf)
            .map_err(|_| VestingError::StateSerialization)?;
        Ok(*blake3::hash(&buf).as_bytes())
    }

    /// Due-amount breakdown for `beneficiary` at `now_ts`.
    pub fn quote(&self, beneficiary: &Pubkey, now_ts: i64) -> Result<VestingQuote, VestingError> {
        let entry = self.account(beneficiary)?;
        let accrued = entry.accrued(now_ts)?;
        let due = accrued
            .checked_sub(entry.withdrawn)
            .ok_or(VestingError::MathOverflow)?;
        Ok(VestingQuote {
            beneficiary: *beneficiary,
            accrued,
            withdrawn: entry.withdrawn,
            due,
            timestamp: now_ts,
        })
    }

    fn position(&self, wallet: &Pubkey) -> Option<usize> {
        self.beneficiaries.iter().position(|e| e.wallet == *wallet)
    }
}

fn allocations_sum_u128(entries: &[VestingAccount]) -> Result<u128, VestingError> {
    let mut sum: u128 = 0;
    for e in entries {
        sum = sum
            .checked_add(e.allocation as u128)
            .ok_or(VestingError::MathOverflow)?;
    }
    Ok(sum)
}
