//! Collaborator seams of the ledger core.
//!
//! The core never talks to the runtime directly: value leaves the ledger
//! through a [`ValueSink`] and notifications through an [`EventSink`], so the
//! accounting can be driven by the on-chain program or by an off-chain host.

use anchor_lang::prelude::{emit, Pubkey};

use crate::error::VestingError;
use crate::events::WithdrawVested;

/// Receives `(recipient, amount)` and either completes the transfer or fails.
/// A failed transfer must have no effect on the recipient.
pub trait ValueSink {
    fn transfer(&mut self, recipient: &Pubkey, amount: u64) -> Result<(), VestingError>;
}

/// Observational notification channel; nothing is read back.
pub trait EventSink {
    fn emit_withdraw(&mut self, event: WithdrawVested);
}

/// Publishes events to the program log.
pub struct ProgramEvents;

impl EventSink for ProgramEvents {
    fn emit_withdraw(&mut self, event: WithdrawVested) {
        emit!(event);
    }
}

/// Collects events in memory, in emission order.
impl EventSink for Vec<WithdrawVested> {
    fn emit_withdraw(&mut self, event: WithdrawVested) {
        self.push(event);
    }
}
