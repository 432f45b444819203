//! The flat statistics map: composite key -> stringified count.
use super::key::CompositeKey;
use crate::analysis::SourceTally;
use std::collections::BTreeMap;

/// Value of every cell no source contributed to.
pub const DEFAULT_CELL: &str = "0";

/// Stringified counts for every composite key at least one source produced.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StatisticsMap {
    values: BTreeMap<String, String>,
}

impl StatisticsMap {
    /// Merge per-source tallies. The status segment of every key is `f`
    /// for a failed source and `s` otherwise; each source always gets a
    /// volumes entry, bucket entries only for non-zero counts.
    pub fn build<'a>(sources: impl IntoIterator<Item = (&'a str, &'a SourceTally)>) -> Self {
        let mut counts: BTreeMap<String, u64> = BTreeMap::new();
        for (label, tally) in sources {
            let status = tally.status();
            counts.insert(
                CompositeKey::Volumes { status, label }.to_string(),
                tally.volume_count() as u64,
            );
            for (key, n) in tally.iter() {
                *counts
                    .entry(CompositeKey::Files { status, key, label }.to_string())
                    .or_insert(0) += n;
            }
        }

        Self {
            values: counts
                .into_iter()
                .map(|(k, n)| (k, n.to_string()))
                .collect(),
        }
    }

    /// Lookup with the zero default applied.
    pub fn lookup(&self, key: &str) -> &str {
        self.get(key).unwrap_or(DEFAULT_CELL)
    }

    /// Lookup without a default: `None` when no source produced `key`.
    pub fn get(&self, key: &str) -> Option<&str> {
        self.values.get(key).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}
