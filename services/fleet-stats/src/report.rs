//! Fleet report rendering and export
//!
//! Renders the three human-readable sections in a fixed order (largest
//! total size, most records, largest records per source) and serializes
//! the whole report to JSON for external consumption.

use std::fmt::Write as _;
use std::path::Path;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use types::ids::{RunId, SourceId};

use crate::aggregator::{FleetSummary, SourceStat};

/// Why a source was left out of the aggregation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SourceFailure {
    pub source_id: SourceId,
    pub reason: String,
}

/// Output of one poll run over the fleet.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FleetReport {
    pub version: String,
    pub run_id: RunId,
    pub generated_at: DateTime<Utc>,
    pub summary: FleetSummary,
    pub failures: Vec<SourceFailure>,
}

impl FleetReport {
    pub fn new(run_id: RunId, summary: FleetSummary, failures: Vec<SourceFailure>) -> Self {
        Self {
            version: crate::VERSION.to_string(),
            run_id,
            generated_at: Utc::now(),
            summary,
            failures,
        }
    }

    /// Render the three report sections.
    pub fn render(&self) -> String {
        let mut out = String::new();

        out.push_str("Source(s) with the largest total size:\n");
        out.push_str(&format_stats(&self.summary.top_by_size));
        out.push('\n');

        out.push_str("Source(s) with the most records:\n");
        out.push_str(&format_stats(&self.summary.top_by_count));
        out.push('\n');

        out.push_str("Largest record(s) per source:\n");
        for entry in &self.summary.per_source_largest {
            let records: Vec<String> =
                entry.largest_records.iter().map(|r| r.to_string()).collect();
            // Writing into a String cannot fail.
            let _ = writeln!(out, "  source {}: [{}]", entry.source_id, records.join(", "));
        }

        out
    }

    /// One-line run summary for logs.
    pub fn headline(&self) -> String {
        format!(
            "Run {} | Sources: {} | Valid: {} | Skipped: {}",
            self.run_id,
            self.summary.sources_seen,
            self.summary.valid_sources(),
            self.summary.sources_skipped,
        )
    }

    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }

    /// Write the JSON export to a file path.
    pub fn write_to_file(&self, path: impl AsRef<Path>) -> std::io::Result<()> {
        let json = self.to_json()?;
        std::fs::write(path, json)
    }
}

fn format_stats(stats: &[SourceStat]) -> String {
    let pairs: Vec<String> = stats
        .iter()
        .map(|s| format!("({}, {})", s.source_id, s.value))
        .collect();
    format!("[{}]", pairs.join(", "))
}
