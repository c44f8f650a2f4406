pub mod ledger_state;
pub mod vesting_account;

pub use ledger_state::*;
pub use vesting_account::*;
