//! utils
//!
//! Parsing and clock helpers shared by the ledger and the page facade.

pub mod amount;
pub mod time;

pub use amount::parse_amount;
pub use time::{current_time_ms, parse_deadline, DAY_MS};
