//! Data model for inventory records and the bucket taxonomy.
//!
//! Re-exports the record types, the tri-state flag and the buckets
//! every file record is classified into.
pub mod bucket;
pub mod record;
pub mod tristate;

pub use bucket::{AllocationBucket, TallyKey, TypeBucket};
pub use record::{FileRecord, Record, VolumeRecord};
pub use tristate::TriState;
