pub mod initialize_ledger;
pub mod withdraw;
pub mod check_due;

pub use initialize_ledger::*;
pub use withdraw::*;
pub use check_due::*;
