//! Analysis modules — per-record classification and per-source tallies.

pub mod classify;
pub mod tally;

pub use classify::{allocation_bucket, classify, combine_allocation, type_bucket};
pub use tally::{SourceStatus, SourceTally};
