use anchor_lang::prelude::*;
use core::result::Result;

use crate::error::VestingError;
use crate::utils::time;

/// A single beneficiary entry stored in the ledger account.
#[derive(AnchorSerialize, AnchorDeserialize, Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct VestingAccount {
    pub wallet: Pubkey,
    /// Share of the cap (floor of `cap / beneficiary_count`).
    pub allocation: u64,
    pub amount_per_minute: u64,
    /// Vesting start timestamp (Unix seconds).
    pub start_ts: i64,
    /// Cumulative amount already paid out.
    pub withdrawn: u64,
}

impl VestingAccount {
    pub const SIZE: usize =
        32 + // wallet
        8 +  // allocation
        8 +  // amount_per_minute
        8 +  // start_ts
        8;   // withdrawn

    /// Amount unlocked by elapsed time at `now_ts`, independent of withdrawals.
    /// `min(allocation, amount_per_minute * minutes_elapsed)`.
    pub fn accrued(&self, now_ts: i64) -> Result<u64, VestingError> {
        let minutes = time::minutes_elapsed(now_ts, self.start_ts)?;
        let linear = (self.amount_per_minute as u128)
            .checked_mul(minutes as u128)
            .ok_or(VestingError::MathOverflow)?;
        let capped = linear.min(self.allocation as u128);
        u64::try_from(capped).map_err(|_| VestingError::MathOverflow)
    }

    /// Accrued minus withdrawn at `now_ts`.
    pub fn due(&self, now_ts: i64) -> Result<u64, VestingError> {
        self.accrued(now_ts)?
            .checked_sub(self.withdrawn)
            .ok_or(VestingError::MathOverflow)
    }

    pub fn remaining(&self) -> u64 {
        self.allocation.saturating_sub(self.withdrawn)
    }

    pub fn is_exhausted(&self) -> bool {
        self.withdrawn == self.allocation
    }

    /// First timestamp at which the whole allocation has accrued.
    pub fn fully_vested_at(&self) -> Result<i64, VestingError> {
        if self.amount_per_minute == 0 {
            return Err(VestingError::InvalidConfig);
        }
        let minutes = self.allocation.div_ceil(self.amount_per_minute);
        time::minute_boundary(self.start_ts, minutes)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const START: i64 = 1_700_000_000;

    fn entry(allocation: u64, amount_per_minute: u64) -> VestingAccount {
        VestingAccount {
            wallet: Pubkey::new_from_array([7u8; 32]),
            allocation,
            amount_per_minute,
            start_ts: START,
            withdrawn: 0,
        }
    }

    #[test]
    fn accrues_linearly_per_whole_minute() {
        let e = entry(1_000, 10);
        assert_eq!(e.accrued(START).unwrap(), 0);
        assert_eq!(e.accrued(START + 59).unwrap(), 0);
        assert_eq!(e.accrued(START + 60).unwrap(), 10);
        assert_eq!(e.accrued(START + 5 * 60).unwrap(), 50);
    }

    #[test]
    fn accrual_saturates_at_allocation() {
        // 1_005 / 10 leaves a 5-unit tail that vests in the 101st minute.
        let e = entry(1_005, 10);
        assert_eq!(e.accrued(START + 100 * 60).unwrap(), 1_000);
        assert_eq!(e.accrued(START + 101 * 60).unwrap(), 1_005);
        assert_eq!(e.accrued(i64::MAX / 2).unwrap(), 1_005);
        assert_eq!(e.fully_vested_at().unwrap(), START + 101 * 60);
    }

    #[test]
    fn accrual_is_monotonic() {
        let e = entry(11_111_111, 10);
        let mut prev = 0;
        for step in 0..2_000i64 {
            let now = START - 3_600 + step * 3_607;
            let a = e.accrued(now).unwrap();
            assert!(a >= prev);
            assert!(a <= e.allocation);
            prev = a;
        }
    }

    #[test]
    fn due_subtracts_withdrawn() {
        let mut e = entry(1_000, 10);
        e.withdrawn = 30;
        assert_eq!(e.due(START + 5 * 60).unwrap(), 20);
        assert_eq!(e.remaining(), 970);
        assert!(!e.is_exhausted());

        e.withdrawn = 1_000;
        assert_eq!(e.due(i64::MAX / 2).unwrap(), 0);
        assert!(e.is_exhausted());
    }

    #[test]
    fn large_rates_do_not_overflow() {
        let e = entry(u64::MAX, u64::MAX);
        assert_eq!(e.accrued(START + 10 * 60).unwrap(), u64::MAX);
    }
}
