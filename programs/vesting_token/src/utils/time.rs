//! Elapsed-time utilities for per-minute accrual.
//! - minutes are whole minutes since `start_ts`, floored
//! - timestamps before `start_ts` count as zero elapsed minutes
//! - boundaries are inclusive: `start_ts + 60` is exactly one minute

use crate::constants::SECONDS_PER_MINUTE;
use crate::error::VestingError;

/// Whole minutes elapsed between `start_ts` and `now_ts` (Unix seconds).
pub fn minutes_elapsed(now_ts: i64, start_ts: i64) -> Result<u64, VestingError> {
    if now_ts <= start_ts {
        return Ok(0);
    }
    let secs = now_ts
        .checked_sub(start_ts)
        .ok_or(VestingError::MathOverflow)?;
    let minutes = secs.div_euclid(SECONDS_PER_MINUTE);
    u64::try_from(minutes).map_err(|_| VestingError::MathOverflow)
}

/// Timestamp of the boundary `minutes` after `start_ts`.
pub fn minute_boundary(start_ts: i64, minutes: u64) -> Result<i64, VestingError> {
    let minutes = i64::try_from(minutes).map_err(|_| VestingError::MathOverflow)?;
    minutes
        .checked_mul(SECONDS_PER_MINUTE)
        .ok_or(VestingError::MathOverflow)?
        .checked_add(start_ts)
        .ok_or(VestingError::MathOverflow)
}

#[cfg(test)]
mod tests {
    use super::*;

    const START: i64 = 1_700_000_000;

    #[test]
    fn minute_boundary_inclusive() {
        assert_eq!(minutes_elapsed(START, START).unwrap(), 0);
        let b1 = minute_boundary(START, 1).unwrap();
        assert_eq!(b1, START + 60);
        assert_eq!(minutes_elapsed(b1, START).unwrap(), 1);
        // one second before boundary_1 => still zero
        assert_eq!(minutes_elapsed(b1 - 1, START).unwrap(), 0);
    }

    #[test]
    fn before_start_is_zero() {
        assert_eq!(minutes_elapsed(START - 1, START).unwrap(), 0);
        assert_eq!(minutes_elapsed(i64::MIN, START).unwrap(), 0);
    }

    #[test]
    fn partial_minutes_floor() {
        assert_eq!(minutes_elapsed(START + 5 * 60 + 59, START).unwrap(), 5);
        assert_eq!(minutes_elapsed(START + 10 * 60, START).unwrap(), 10);
    }

    #[test]
    fn extreme_span_overflows() {
        assert!(matches!(
            minutes_elapsed(i64::MAX, -1),
            Err(VestingError::MathOverflow)
        ));
        assert!(matches!(
            minute_boundary(START, u64::MAX),
            Err(VestingError::MathOverflow)
        ));
    }
}
