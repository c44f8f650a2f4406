//! Shared fixtures for unit tests.

use anchor_lang::prelude::Pubkey;

use crate::error::VestingError;
use crate::interfaces::ValueSink;

pub const START: i64 = 1_700_000_000;

pub fn key(seed: u8) -> Pubkey {
    Pubkey::new_from_array([seed; 32])
}

/// `count` distinct beneficiary keys, seeded from 1.
pub fn beneficiaries(count: u8) -> Vec<Pubkey> {
    (1..=count).map(key).collect()
}

pub fn after_minutes(minutes: i64) -> i64 {
    START + minutes * 60
}

/// Records every completed transfer.
#[derive(Default)]
pub struct RecordingSink {
    pub transfers: Vec<(Pubkey, u64)>,
}

impl ValueSink for RecordingSink {
    fn transfer(&mut self, recipient: &Pubkey, amount: u64) -> Result<(), VestingError> {
        self.transfers.push((*recipient, amount));
        Ok(())
    }
}

/// Rejects every transfer.
pub struct FailingSink;

impl ValueSink for FailingSink {
    fn transfer(&mut self, _recipient: &Pubkey, _amount: u64) -> Result<(), VestingError> {
        Err(VestingError::TransferFailed)
    }
}
