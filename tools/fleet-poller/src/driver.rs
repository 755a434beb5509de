//! Poll loop
//!
//! Sources are fetched one after another in id order. A source that cannot
//! be fetched or parsed is marked invalid, recorded as a failure and left
//! out of the aggregate; the run always continues to the next source.

use fleet_stats::report::{FleetReport, SourceFailure};
use fleet_stats::{FleetAggregator, SourceDataset};
use source_client::SourceClient;
use tracing::{info, warn};
use types::ids::{RunId, SourceId};

/// Poll sources `0..source_count` and build the fleet report.
pub async fn poll_fleet(client: &dyn SourceClient, source_count: u32) -> FleetReport {
    let run_id = RunId::new();
    info!(
        run_id = %run_id,
        client = client.label(),
        sources = source_count,
        "Starting fleet poll"
    );

    let mut aggregator = FleetAggregator::new();
    let mut failures = Vec::new();

    for raw_id in 0..source_count {
        let dataset = poll_source(client, SourceId::new(raw_id)).await;
        if let Some(reason) = dataset.invalid_reason() {
            failures.push(SourceFailure {
                source_id: dataset.source_id(),
                reason: reason.to_string(),
            });
        }
        aggregator.accumulate(&dataset);
    }

    let report = FleetReport::new(run_id, aggregator.finish(), failures);
    info!("{}", report.headline());
    report
}

/// Fetch, reduce and discard one source.
pub async fn poll_source(client: &dyn SourceClient, source_id: SourceId) -> SourceDataset {
    info!(source_id = %source_id, "Getting source");

    let payload = match client.fetch(source_id).await {
        Ok(payload) => payload,
        Err(e) => {
            warn!(source_id = %source_id, kind = ?e.kind(), error = %e, "Source fetch failed");
            return SourceDataset::invalid(source_id, e.to_string());
        }
    };

    let mut dataset = SourceDataset::new(source_id);
    let parsed = dataset.parse(&payload).map(|_| ());
    drop(payload);

    if let Err(e) = parsed {
        warn!(source_id = %source_id, error = %e, "Source payload rejected");
        return dataset;
    }

    // Only the derived fields are reported.
    if let Err(e) = dataset.discard() {
        warn!(source_id = %source_id, error = %e, "Discard failed");
    }
    dataset
}
