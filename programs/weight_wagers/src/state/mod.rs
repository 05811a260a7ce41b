pub mod config;
pub mod ledger;
pub mod oracle;

pub use config::*;
pub use ledger::*;
pub use oracle::*;
