//! Per-source dataset and reduction
//!
//! A `SourceDataset` is created with its externally assigned id and no
//! records. One call to `parse` (or `reduce`) stores the records and computes
//! the derived fields in a single left-to-right pass:
//! - `total_size`: sum of all record sizes
//! - `record_count`: number of records
//! - `largest_records`: every (position, size) pair tied at the maximum size
//!
//! Derived fields are computed exactly once. The records may then be
//! discarded to bound memory; the derived fields and validity survive.
//!
//! A payload containing any negative size, or whose sizes sum past
//! `u64::MAX`, is rejected as a whole: nothing is stored and the dataset
//! stays invalid. A rejected dataset cannot be reduced later.

use serde::{Deserialize, Serialize};
use tracing::{debug, warn};
use types::prelude::*;

use crate::tie_set::TieSet;

/// Derived fields of a reduced dataset.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DatasetSummary {
    pub total_size: u64,
    pub record_count: u64,
    pub largest_records: Vec<LargestRecord>,
}

impl DatasetSummary {
    /// Summary of a source that reported no records.
    pub fn empty() -> Self {
        Self {
            total_size: 0,
            record_count: 0,
            largest_records: Vec::new(),
        }
    }
}

/// Compute the derived fields of a record sequence.
///
/// Single pass, O(n) time. Positions are 1-based in arrival order.
/// Returns `None` if the total size overflows `u64`.
pub fn summarize(records: &[SourceRecord]) -> Option<DatasetSummary> {
    let mut total_size: u64 = 0;
    let mut record_count: u64 = 0;
    let mut largest = TieSet::new();

    for (idx, record) in records.iter().enumerate() {
        total_size = total_size.checked_add(record.size)?;
        record_count += 1;
        largest.offer(
            record.size,
            LargestRecord {
                position: idx + 1,
                size: record.size,
            },
        );
    }

    Some(DatasetSummary {
        total_size,
        record_count,
        largest_records: largest.into_entries(),
    })
}

/// All records and derived statistics for one source.
#[derive(Debug, Clone)]
pub struct SourceDataset {
    source_id: SourceId,
    records: Vec<SourceRecord>,
    summary: Option<DatasetSummary>,
    valid: bool,
    invalid_reason: Option<String>,
}

impl SourceDataset {
    /// Create an unpopulated dataset for a source.
    pub fn new(source_id: SourceId) -> Self {
        Self {
            source_id,
            records: Vec::new(),
            summary: None,
            valid: false,
            invalid_reason: None,
        }
    }

    /// Create a dataset that is already known to be unusable (e.g. the
    /// source could not be reached).
    pub fn invalid(source_id: SourceId, reason: impl Into<String>) -> Self {
        let mut dataset = Self::new(source_id);
        dataset.mark_invalid(reason);
        dataset
    }

    /// Validate a retrieved payload, store its records and reduce them.
    ///
    /// On a negative size the whole payload is rejected and the dataset is
    /// marked invalid.
    pub fn parse(&mut self, payload: &RawPayload) -> Result<&DatasetSummary, DatasetError> {
        self.ensure_reducible()?;

        if payload.source_id != i64::from(self.source_id.as_u32()) {
            warn!(
                source_id = %self.source_id,
                payload_source_id = payload.source_id,
                "Payload reports a different source id; keeping assigned id"
            );
        }

        let records = match payload.to_records() {
            Ok(records) => records,
            Err(e) => {
                self.mark_invalid(e.to_string());
                return Err(e.into());
            }
        };

        self.reduce(records)
    }

    /// Store already-validated records and compute the derived fields.
    ///
    /// Fails without storing anything if the dataset was already reduced or
    /// rejected, or if the total size overflows.
    pub fn reduce(
        &mut self,
        records: Vec<SourceRecord>,
    ) -> Result<&DatasetSummary, DatasetError> {
        self.ensure_reducible()?;

        let Some(summary) = summarize(&records) else {
            let err = DatasetError::TotalOverflow {
                source_id: self.source_id,
            };
            self.mark_invalid(err.to_string());
            return Err(err);
        };
        debug!(
            source_id = %self.source_id,
            total_size = summary.total_size,
            record_count = summary.record_count,
            largest = summary.largest_records.len(),
            "Source reduced"
        );

        self.records = records;
        self.valid = true;
        Ok(&*self.summary.insert(summary))
    }

    /// Drop the stored records, keeping derived fields and validity.
    ///
    /// Fails with `PrematureDiscard` if the dataset has not been reduced.
    pub fn discard(&mut self) -> Result<(), DatasetError> {
        if self.summary.is_none() {
            return Err(DatasetError::PrematureDiscard {
                source_id: self.source_id,
            });
        }
        self.records = Vec::new();
        Ok(())
    }

    /// Exclude this source from aggregation.
    pub fn mark_invalid(&mut self, reason: impl Into<String>) {
        self.valid = false;
        self.invalid_reason = Some(reason.into());
    }

    pub fn source_id(&self) -> SourceId {
        self.source_id
    }

    pub fn is_valid(&self) -> bool {
        self.valid
    }

    pub fn is_reduced(&self) -> bool {
        self.summary.is_some()
    }

    pub fn invalid_reason(&self) -> Option<&str> {
        self.invalid_reason.as_deref()
    }

    /// Records still held in memory. Empty after `discard`.
    pub fn records(&self) -> &[SourceRecord] {
        &self.records
    }

    pub fn summary(&self) -> Option<&DatasetSummary> {
        self.summary.as_ref()
    }

    pub fn total_size(&self) -> Option<u64> {
        self.summary.as_ref().map(|s| s.total_size)
    }

    pub fn record_count(&self) -> Option<u64> {
        self.summary.as_ref().map(|s| s.record_count)
    }

    pub fn largest_records(&self) -> Option<&[LargestRecord]> {
        self.summary.as_ref().map(|s| s.largest_records.as_slice())
    }

    fn ensure_reducible(&self) -> Result<(), DatasetError> {
        if self.summary.is_some() {
            return Err(DatasetError::AlreadyReduced {
                source_id: self.source_id,
            });
        }
        if let Some(reason) = &self.invalid_reason {
            return Err(DatasetError::Rejected {
                source_id: self.source_id,
                reason: reason.clone(),
            });
        }
        Ok(())
    }
}
