pub mod error;
pub mod ledger;
pub mod paths;

pub use error::{LedgerError, Result};
pub use ledger::Ledger;
