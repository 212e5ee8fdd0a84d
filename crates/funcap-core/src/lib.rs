//! funcap-core
//!
//! Pure domain types, trial statistics, unit normalization, and wizard
//! store-key conventions. No I/O — this is the shared vocabulary of the
//! funcap system.

pub mod models;
pub mod stats;
pub mod store_keys;
pub mod units;
