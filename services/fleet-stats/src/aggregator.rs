//! Fleet-wide aggregation
//!
//! Combines reduced datasets into three results:
//! - `top_by_size`: every source sharing the maximum total size
//! - `top_by_count`: every source sharing the maximum record count
//! - `per_source_largest`: each source's largest records, in input order
//!
//! Ties are kept, never broken. Invalid datasets are skipped entirely.
//! Datasets are only read, never mutated.

use serde::{Deserialize, Serialize};
use tracing::debug;
use types::ids::SourceId;
use types::record::LargestRecord;

use crate::dataset::SourceDataset;
use crate::tie_set::TieSet;

/// A (source, value) pair in a fleet-wide tie-set.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SourceStat {
    pub source_id: SourceId,
    pub value: u64,
}

/// The largest records reported by one source.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SourceLargest {
    pub source_id: SourceId,
    pub largest_records: Vec<LargestRecord>,
}

/// Result of aggregating a fleet.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FleetSummary {
    pub top_by_size: Vec<SourceStat>,
    pub top_by_count: Vec<SourceStat>,
    pub per_source_largest: Vec<SourceLargest>,
    /// Datasets offered to the aggregator
    pub sources_seen: usize,
    /// Datasets skipped because they were invalid
    pub sources_skipped: usize,
}

impl FleetSummary {
    pub fn valid_sources(&self) -> usize {
        self.sources_seen - self.sources_skipped
    }
}

/// Incremental fleet aggregator.
///
/// Feed datasets in the order they should be reported, then call `finish`.
#[derive(Debug, Default)]
pub struct FleetAggregator {
    by_size: TieSet<SourceStat>,
    by_count: TieSet<SourceStat>,
    per_source_largest: Vec<SourceLargest>,
    sources_seen: usize,
    sources_skipped: usize,
}

impl FleetAggregator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Aggregate a whole collection in one call.
    pub fn aggregate<'a, I>(datasets: I) -> FleetSummary
    where
        I: IntoIterator<Item = &'a SourceDataset>,
    {
        let mut aggregator = Self::new();
        for dataset in datasets {
            aggregator.accumulate(dataset);
        }
        aggregator.finish()
    }

    /// Fold one dataset into the running results.
    pub fn accumulate(&mut self, dataset: &SourceDataset) {
        self.sources_seen += 1;

        let summary = match dataset.summary() {
            Some(summary) if dataset.is_valid() => summary,
            _ => {
                self.sources_skipped += 1;
                debug!(source_id = %dataset.source_id(), "Skipping invalid source");
                return;
            }
        };

        let source_id = dataset.source_id();
        self.by_size.offer(
            summary.total_size,
            SourceStat {
                source_id,
                value: summary.total_size,
            },
        );
        self.by_count.offer(
            summary.record_count,
            SourceStat {
                source_id,
                value: summary.record_count,
            },
        );
        self.per_source_largest.push(SourceLargest {
            source_id,
            largest_records: summary.largest_records.clone(),
        });
    }

    pub fn sources_seen(&self) -> usize {
        self.sources_seen
    }

    pub fn finish(self) -> FleetSummary {
        FleetSummary {
            top_by_size: self.by_size.into_entries(),
            top_by_count: self.by_count.into_entries(),
            per_source_largest: self.per_source_largest,
            sources_seen: self.sources_seen,
            sources_skipped: self.sources_skipped,
        }
    }
}
