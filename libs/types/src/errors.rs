//! Error types shared across the fleet workspace
//!
//! Comprehensive error taxonomy using thiserror

use thiserror::Error;

use crate::ids::SourceId;

/// Record-level validation errors
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RecordError {
    #[error("Invalid record at position {position}: negative size {size}")]
    NegativeSize { position: usize, size: i64 },
}

/// Errors raised while decoding a payload
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum PayloadError {
    #[error("Malformed payload: {0}")]
    Malformed(String),
}

/// Dataset lifecycle errors
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DatasetError {
    #[error("Dataset rejected: {0}")]
    InvalidRecord(#[from] RecordError),

    #[error("Records of source {source_id} discarded before reduction")]
    PrematureDiscard { source_id: SourceId },

    #[error("Source {source_id} has already been reduced")]
    AlreadyReduced { source_id: SourceId },

    #[error("Source {source_id} was rejected earlier: {reason}")]
    Rejected { source_id: SourceId, reason: String },

    #[error("Total size of source {source_id} exceeds {}", u64::MAX)]
    TotalOverflow { source_id: SourceId },
}
