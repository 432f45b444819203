//! Per-source tallies — one pass over a tool's record stream.
//!
//! Processing is fail-soft at source granularity: the first error stops
//! enumeration, marks the tally failed and keeps everything counted so far.
use super::classify::classify;
use crate::error::InventoryError;
use crate::inventory::RecordSource;
use crate::model::{Record, TallyKey, VolumeRecord};
use std::collections::{BTreeMap, HashSet};
use tracing::{debug, warn};

/// Outcome of enumerating a source's records.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SourceStatus {
    #[default]
    Success,
    Failure,
}

impl SourceStatus {
    /// Both statuses, success first.
    pub const ALL: [SourceStatus; 2] = [Self::Success, Self::Failure];

    /// Leading segment of every composite key for this source.
    pub fn prefix(self) -> &'static str {
        match self {
            Self::Success => "s",
            Self::Failure => "f",
        }
    }
}

/// Counts collected from a single source.
#[derive(Debug, Clone, Default)]
pub struct SourceTally {
    volumes: HashSet<VolumeRecord>,
    counts: BTreeMap<TallyKey, u64>,
    status: SourceStatus,
}

impl SourceTally {
    /// Enumerate `records` to the end, or up to the first error.
    pub fn from_records<I>(records: I) -> Self
    where
        I: IntoIterator<Item = Result<Record, InventoryError>>,
    {
        let mut tally = Self::default();
        for record in records {
            match record {
                Ok(record) => tally.observe(record),
                Err(e) => {
                    debug!("Record enumeration stopped: {e}");
                    tally.mark_failed();
                    break;
                }
            }
        }
        tally
    }

    /// Open `source` and tally its records. A source that cannot even be
    /// opened yields an empty, failed tally.
    pub fn from_source(source: &dyn RecordSource) -> Self {
        let tally = match source.records() {
            Ok(stream) => Self::from_records(stream),
            Err(e) => {
                debug!("Could not open {}: {e}", source.describe());
                let mut tally = Self::default();
                tally.mark_failed();
                tally
            }
        };
        if tally.failed() {
            warn!(
                "Processing {} failed after {} file records; partial counts kept",
                source.describe(),
                tally.file_count()
            );
        }
        tally
    }

    fn observe(&mut self, record: Record) {
        match record {
            Record::Volume(volume) => {
                debug!("Found a volume at offset {:?}", volume.partition_offset);
                self.volumes.insert(volume);
            }
            Record::File(file) => {
                *self.counts.entry(classify(&file)).or_insert(0) += 1;
            }
            Record::Other => {}
        }
    }

    /// Permanently flag this tally as failed. Counts are left untouched.
    pub fn mark_failed(&mut self) {
        self.status = SourceStatus::Failure;
    }

    pub fn status(&self) -> SourceStatus {
        self.status
    }

    pub fn failed(&self) -> bool {
        self.status == SourceStatus::Failure
    }

    /// Number of distinct volumes seen.
    pub fn volume_count(&self) -> usize {
        self.volumes.len()
    }

    /// Count for one bucket pair (zero when never seen).
    pub fn count(&self, key: TallyKey) -> u64 {
        self.counts.get(&key).copied().unwrap_or(0)
    }

    /// Total file records counted — the sum over every bucket.
    pub fn file_count(&self) -> u64 {
        self.counts.values().sum()
    }

    /// Non-zero bucket counts in key order.
    pub fn iter(&self) -> impl Iterator<Item = (TallyKey, u64)> + '_ {
        self.counts
            .iter()
            .filter(|&(_, &n)| n > 0)
            .map(|(&k, &n)| (k, n))
    }
}
