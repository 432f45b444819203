//! The closed bucket taxonomy every file record is counted under.
use std::fmt;

/// Allocation status after combining a record's three allocation flags.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum AllocationBucket {
    Allocated,
    Unallocated,
    Unknown,
}

impl AllocationBucket {
    /// Every bucket, in the order rows are emitted.
    pub const ALL: [AllocationBucket; 3] = [Self::Allocated, Self::Unallocated, Self::Unknown];

    /// Segment used inside composite keys and template field names.
    pub fn key(self) -> &'static str {
        match self {
            Self::Allocated => "allocated",
            Self::Unallocated => "unallocated",
            Self::Unknown => "unknown",
        }
    }
}

impl fmt::Display for AllocationBucket {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

/// Coarse entry type derived from the raw name-type code.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum TypeBucket {
    Dirs,
    Files,
    Unknown,
    Other,
}

impl TypeBucket {
    /// Every bucket, in the order rows are emitted.
    pub const ALL: [TypeBucket; 4] = [Self::Dirs, Self::Files, Self::Unknown, Self::Other];

    /// Segment used inside composite keys and template field names.
    pub fn key(self) -> &'static str {
        match self {
            Self::Dirs => "dirs",
            Self::Files => "files",
            Self::Unknown => "unknown",
            Self::Other => "other",
        }
    }
}

impl fmt::Display for TypeBucket {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

/// One cell of a source's tally: (allocation bucket, type bucket).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TallyKey {
    pub alloc: AllocationBucket,
    pub kind: TypeBucket,
}

impl TallyKey {
    #[inline]
    pub const fn new(alloc: AllocationBucket, kind: TypeBucket) -> Self {
        Self { alloc, kind }
    }

    /// All 12 keys in row order (allocation-major).
    pub fn all() -> impl Iterator<Item = TallyKey> {
        AllocationBucket::ALL
            .into_iter()
            .flat_map(|alloc| TypeBucket::ALL.into_iter().map(move |kind| Self::new(alloc, kind)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn all_keys_cover_the_taxonomy_once() {
        let keys: Vec<TallyKey> = TallyKey::all().collect();
        assert_eq!(keys.len(), 12);
        let unique: std::collections::HashSet<_> = keys.iter().collect();
        assert_eq!(unique.len(), 12);
        assert_eq!(keys[0], TallyKey::new(AllocationBucket::Allocated, TypeBucket::Dirs));
        assert_eq!(keys[11], TallyKey::new(AllocationBucket::Unknown, TypeBucket::Other));
    }

    #[test]
    fn key_segments_are_lowercase_names() {
        assert_eq!(AllocationBucket::Unallocated.to_string(), "unallocated");
        assert_eq!(TypeBucket::Dirs.key(), "dirs");
        assert_eq!(TypeBucket::Other.key(), "other");
    }
}
