//! Aggregation — merges per-source tallies into the two derived
//! structures the renderers consume.
//!
//! Both derived structures are built lazily from the label-sorted source
//! map and memoised until the next [`Aggregator::record`].
pub mod key;
pub mod statistics;
pub mod template;

pub use key::CompositeKey;
pub use statistics::{StatisticsMap, DEFAULT_CELL};
pub use template::TemplateDescriptor;

use crate::analysis::{SourceStatus, SourceTally};
use crate::inventory::RecordSource;
use compact_str::CompactString;
use std::cell::OnceCell;
use std::collections::BTreeMap;
use tracing::{debug, info};

/// Owns one [`SourceTally`] per label.
#[derive(Debug, Default)]
pub struct Aggregator {
    tallies: BTreeMap<CompactString, SourceTally>,
    template: OnceCell<TemplateDescriptor>,
    statistics: OnceCell<StatisticsMap>,
}

impl Aggregator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Store the tally for `label`, replacing any earlier tally with the
    /// same label.
    pub fn record(&mut self, label: impl Into<CompactString>, tally: SourceTally) {
        let label = label.into();
        if self.tallies.insert(label.clone(), tally).is_some() {
            debug!("Replacing earlier tally for label {label:?}");
        }
        // A new source changes both derived structures.
        self.template.take();
        self.statistics.take();
    }

    /// Tally `source` and record it under `label`.
    pub fn summarize(
        &mut self,
        label: impl Into<CompactString>,
        source: &dyn RecordSource,
    ) -> SourceStatus {
        let label = label.into();
        let tally = SourceTally::from_source(source);
        let status = tally.status();
        info!(
            "Summarised {label}: {} volumes, {} files ({status:?})",
            tally.volume_count(),
            tally.file_count()
        );
        self.record(label, tally);
        status
    }

    /// The template descriptor, built once from the sorted labels.
    pub fn template(&self) -> &TemplateDescriptor {
        self.template
            .get_or_init(|| TemplateDescriptor::build(self.tallies.keys().map(CompactString::as_str)))
    }

    /// The statistics map, built once from every recorded tally.
    pub fn statistics(&self) -> &StatisticsMap {
        self.statistics.get_or_init(|| {
            StatisticsMap::build(
                self.tallies
                    .iter()
                    .map(|(label, tally)| (label.as_str(), tally)),
            )
        })
    }

    pub fn tally(&self, label: &str) -> Option<&SourceTally> {
        self.tallies.get(label)
    }

    /// Recorded labels in sorted order.
    pub fn labels(&self) -> impl Iterator<Item = &str> {
        self.tallies.keys().map(CompactString::as_str)
    }

    pub fn len(&self) -> usize {
        self.tallies.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tallies.is_empty()
    }
}
