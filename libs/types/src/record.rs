//! Record types
//!
//! A record is one payload-size measurement reported by a source. Records
//! have no identity beyond their 1-based position in the source's arrival
//! order.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::errors::RecordError;

/// A single measured item (an image) reported by a source.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SourceRecord {
    /// Byte size of the item
    pub size: u64,
}

impl SourceRecord {
    /// Validate a raw size and build a record.
    ///
    /// `position` is 1-based and only used to report where the bad value was.
    pub fn new(position: usize, size: i64) -> Result<Self, RecordError> {
        u64::try_from(size)
            .map(|size| Self { size })
            .map_err(|_| RecordError::NegativeSize { position, size })
    }

    /// Build a record from an already non-negative size.
    pub fn from_size(size: u64) -> Self {
        Self { size }
    }
}

/// A (position, size) pair belonging to the tie-set of largest records.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct LargestRecord {
    /// 1-based position within the source's arrival order
    pub position: usize,
    pub size: u64,
}

impl fmt::Display for LargestRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.position, self.size)
    }
}
