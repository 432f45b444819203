//! TallySleuth Core — classification, tallying, aggregation and rendering.
//!
//! This crate contains all business logic with zero CLI dependencies.
//! The binary only parses arguments, initialises logging and calls in here.
//!
//! # Modules
//!
//! - [`model`] — Inventory records, tri-state flags and the bucket taxonomy.
//! - [`analysis`] — Per-record classification and per-source tallies.
//! - [`aggregate`] — Cross-source merge into a template descriptor and statistics map.
//! - [`inventory`] — Source specifications and the record-stream seam.
//! - [`report`] — Two-stage LaTeX / HTML table rendering.
//! - [`error`] — Typed errors for each failure class.
pub mod aggregate;
pub mod analysis;
pub mod error;
pub mod inventory;
pub mod model;
pub mod report;

pub use aggregate::Aggregator;
pub use analysis::{SourceStatus, SourceTally};
pub use error::{InventoryError, ReportError, SpecError};
pub use inventory::SourceSpec;
pub use report::Format;
