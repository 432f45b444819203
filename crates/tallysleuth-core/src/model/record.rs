//! Inventory records as yielded by a record source.
//!
//! Only two record kinds matter to the summary: volumes (partitions) and
//! file-system entries. Anything else a tool emits is carried as
//! [`Record::Other`] and ignored by the tally.
use super::tristate::TriState;
use compact_str::CompactString;
use serde::{Deserialize, Serialize};

/// Raw name-type code for a directory.
pub const NAME_TYPE_DIRECTORY: &str = "d";

/// Raw name-type code for a regular file.
pub const NAME_TYPE_REGULAR: &str = "r";

/// One record in a tool's inventory stream.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum Record {
    Volume(VolumeRecord),
    File(FileRecord),
    #[serde(other)]
    Other,
}

/// A partition or logical volume found on the media.
///
/// Two volume records are the same volume when every defining field is
/// equal. Tools that re-emit a volume (e.g. once per pass) therefore count
/// it once.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(default)]
pub struct VolumeRecord {
    /// Byte offset of the partition from the start of the image.
    pub partition_offset: Option<u64>,
    pub sector_size: Option<u32>,
    pub block_size: Option<u32>,
    pub block_count: Option<u64>,
    /// File-system type string as reported by the tool (e.g. `ntfs`).
    pub ftype: Option<CompactString>,
}

impl VolumeRecord {
    /// Convenience constructor for a volume identified by its offset only.
    pub fn at_offset(partition_offset: u64) -> Self {
        Self {
            partition_offset: Some(partition_offset),
            ..Self::default()
        }
    }
}

/// A single file-system entry (file, directory, or anything else).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileRecord {
    /// Entry path, only used for debug logging.
    pub filename: Option<CompactString>,

    /// Overall allocation flag. Consulted only when neither
    /// `alloc_inode` nor `alloc_name` is reported.
    pub alloc: TriState,

    /// Allocation of the inode / metadata structure.
    pub alloc_inode: TriState,

    /// Allocation of the directory entry (name).
    pub alloc_name: TriState,

    /// Raw name-type code: `"d"` directory, `"r"` regular file, others
    /// (links, devices, sockets, ...) pass through untouched.
    pub name_type: Option<CompactString>,
}

impl FileRecord {
    /// A record with only the overall `alloc` flag and a type code set.
    pub fn new(alloc: TriState, name_type: Option<&str>) -> Self {
        Self {
            alloc,
            name_type: name_type.map(CompactString::new),
            ..Self::default()
        }
    }

    /// Set the inode and name allocation flags.
    pub fn with_split_alloc(mut self, alloc_inode: TriState, alloc_name: TriState) -> Self {
        self.alloc_inode = alloc_inode;
        self.alloc_name = alloc_name;
        self
    }
}
