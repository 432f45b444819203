//! Record classification into the (allocation, type) bucket pair.
//!
//! Pure and total: every file record lands in exactly one [`TallyKey`].
use crate::model::record::{NAME_TYPE_DIRECTORY, NAME_TYPE_REGULAR};
use crate::model::{AllocationBucket, FileRecord, TallyKey, TriState, TypeBucket};

/// Combine a record's three allocation flags into one tri-state value.
///
/// 1. When neither `alloc_inode` nor `alloc_name` is reported, the overall
///    `alloc` flag is used as-is.
/// 2. Otherwise the result is `alloc_inode AND alloc_name` with
///    short-circuit semantics ([`TriState::and`]): a false or unknown
///    `alloc_inode` wins without looking at `alloc_name`.
///
/// The evaluation order is observable in the rendered tables, so
/// `alloc_inode = Unknown, alloc_name = False` yields `Unknown`, not `False`.
pub fn combine_allocation(alloc: TriState, alloc_inode: TriState, alloc_name: TriState) -> TriState {
    if alloc_inode.is_unknown() && alloc_name.is_unknown() {
        alloc
    } else {
        alloc_inode.and(alloc_name)
    }
}

/// Map a combined allocation value to its bucket.
pub fn allocation_bucket(alloc: TriState) -> AllocationBucket {
    match alloc {
        TriState::True => AllocationBucket::Allocated,
        TriState::False => AllocationBucket::Unallocated,
        TriState::Unknown => AllocationBucket::Unknown,
    }
}

/// Map a raw name-type code to its bucket. Codes other than directory and
/// regular file (symlinks, devices, sockets, whiteouts, ...) are `Other`.
pub fn type_bucket(name_type: Option<&str>) -> TypeBucket {
    match name_type {
        None => TypeBucket::Unknown,
        Some(NAME_TYPE_DIRECTORY) => TypeBucket::Dirs,
        Some(NAME_TYPE_REGULAR) => TypeBucket::Files,
        Some(_) => TypeBucket::Other,
    }
}

/// Classify one file record.
pub fn classify(file: &FileRecord) -> TallyKey {
    let alloc = combine_allocation(file.alloc, file.alloc_inode, file.alloc_name);
    TallyKey::new(allocation_bucket(alloc), type_bucket(file.name_type.as_deref()))
}
