//! Fleet statistics core
//!
//! Reduces each source's records to summary statistics and combines the
//! per-source summaries into fleet-wide superlatives: the source(s) with the
//! largest total size, the source(s) with the most records, and the largest
//! record(s) of every source.
//!
//! Everything in this crate is synchronous and performs no I/O apart from
//! the optional report export.
//!
//! # Modules
//! - `tie_set`: Running maximum that keeps every entry tied at the maximum
//! - `dataset`: Per-source record storage and single-pass reduction
//! - `aggregator`: Cross-source tie-aware aggregation
//! - `report`: Human-readable rendering and JSON export

pub mod tie_set;
pub mod dataset;
pub mod aggregator;
pub mod report;

pub use aggregator::{FleetAggregator, FleetSummary, SourceLargest, SourceStat};
pub use dataset::{DatasetSummary, SourceDataset};
pub use report::FleetReport;
pub use tie_set::TieSet;

/// Crate version constant
pub const VERSION: &str = "0.1.0";
