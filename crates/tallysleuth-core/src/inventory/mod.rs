//! Inventory sources — labeled specifications and the record-stream seam.
//!
//! Reading a tool's inventory format is the job of a [`RecordSource`]
//! implementation. The summary engine only ever sees the resulting stream
//! of [`Record`]s, one `Result` per record.
pub mod jsonl;
pub mod spec;

pub use jsonl::JsonLinesInventory;
pub use spec::{validate_all, SourceSpec};

use crate::error::InventoryError;
use crate::model::Record;

/// A lazily-evaluated stream of records. Enumeration stops at the first `Err`.
pub type RecordStream<'a> = Box<dyn Iterator<Item = Result<Record, InventoryError>> + 'a>;

/// Anything that can enumerate one tool's inventory records.
pub trait RecordSource {
    /// Human-readable name for log messages (usually the path).
    fn describe(&self) -> String;

    /// Start enumerating. An `Err` here means the source could not be
    /// opened at all.
    fn records(&self) -> Result<RecordStream<'_>, InventoryError>;
}
