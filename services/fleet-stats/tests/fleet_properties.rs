//! Reduction and aggregation properties
//!
//! Exercises the dataset reduction and fleet aggregation end to end:
//! - Sum and count are exact and order-independent
//! - Reduction is idempotent over an unchanged record sequence
//! - Tie-sets reset on a new maximum and accumulate on equality
//! - Invalid sources never reach any fleet result

use fleet_stats::dataset::summarize;
use fleet_stats::{FleetAggregator, SourceDataset, SourceStat};
use proptest::prelude::*;
use types::errors::DatasetError;
use types::ids::SourceId;
use types::payload::RawPayload;
use types::record::{LargestRecord, SourceRecord};

fn to_records(sizes: &[u64]) -> Vec<SourceRecord> {
    sizes.iter().map(|&s| SourceRecord::from_size(s)).collect()
}

fn parsed(id: u32, sizes: &[i64]) -> SourceDataset {
    let mut dataset = SourceDataset::new(SourceId::new(id));
    dataset.parse(&RawPayload::new(i64::from(id), sizes.iter().copied())).unwrap();
    dataset.discard().unwrap();
    dataset
}

fn pairs(records: &[LargestRecord]) -> Vec<(usize, u64)> {
    records.iter().map(|r| (r.position, r.size)).collect()
}

proptest! {
    #[test]
    fn prop_sum_and_count_exact(sizes in prop::collection::vec(0u64..2_097_152, 0..200)) {
        let summary = summarize(&to_records(&sizes)).unwrap();
        prop_assert_eq!(summary.total_size, sizes.iter().sum::<u64>());
        prop_assert_eq!(summary.record_count, sizes.len() as u64);
    }

    #[test]
    fn prop_sum_order_independent(sizes in prop::collection::vec(0u64..2_097_152, 0..200)) {
        let mut reversed = sizes.clone();
        reversed.reverse();

        let forward = summarize(&to_records(&sizes)).unwrap();
        let backward = summarize(&to_records(&reversed)).unwrap();
        prop_assert_eq!(forward.total_size, backward.total_size);
        prop_assert_eq!(forward.record_count, backward.record_count);
        prop_assert_eq!(forward.largest_records.len(), backward.largest_records.len());
    }

    #[test]
    fn prop_reduction_idempotent(sizes in prop::collection::vec(0u64..1_000, 0..100)) {
        let records = to_records(&sizes);
        prop_assert_eq!(summarize(&records).unwrap(), summarize(&records).unwrap());
    }

    #[test]
    fn prop_largest_records_are_exactly_the_maxima(
        sizes in prop::collection::vec(1u64..20, 1..100),
    ) {
        let summary = summarize(&to_records(&sizes)).unwrap();
        let max = *sizes.iter().max().unwrap();
        let expected: Vec<(usize, u64)> = sizes
            .iter()
            .enumerate()
            .filter(|(_, s)| **s == max)
            .map(|(i, s)| (i + 1, *s))
            .collect();
        prop_assert_eq!(pairs(&summary.largest_records), expected);
    }

    #[test]
    fn prop_any_negative_size_rejects_dataset(
        sizes in prop::collection::vec(0i64..10_000, 0..50),
        bad in -1_000i64..0,
        at in 0usize..50,
    ) {
        let mut sizes = sizes;
        let at = at.min(sizes.len());
        sizes.insert(at, bad);

        let mut dataset = SourceDataset::new(SourceId::new(0));
        let result = dataset.parse(&RawPayload::new(0, sizes));
        prop_assert!(matches!(result, Err(DatasetError::InvalidRecord(_))));
        prop_assert!(!dataset.is_valid());
        prop_assert_eq!(dataset.total_size(), None);
    }
}

#[test]
fn test_tie_set_excludes_smaller_record() {
    let summary = summarize(&to_records(&[5, 5, 3, 5])).unwrap();
    assert_eq!(pairs(&summary.largest_records), vec![(1, 5), (2, 5), (4, 5)]);
}

#[test]
fn test_tie_set_monotonic_reset() {
    let summary = summarize(&to_records(&[3, 5, 5, 2])).unwrap();
    assert_eq!(pairs(&summary.largest_records), vec![(2, 5), (3, 5)]);
}

#[test]
fn test_empty_sequence() {
    let dataset = parsed(0, &[]);
    assert_eq!(dataset.total_size(), Some(0));
    assert_eq!(dataset.record_count(), Some(0));
    assert!(dataset.largest_records().unwrap().is_empty());
    assert!(dataset.is_valid());
}

#[test]
fn test_fleet_size_tie() {
    let fleet = vec![parsed(1, &[100]), parsed(2, &[200, 50]), parsed(3, &[125, 125])];
    let summary = FleetAggregator::aggregate(&fleet);
    assert_eq!(
        summary.top_by_size,
        vec![
            SourceStat { source_id: SourceId::new(2), value: 250 },
            SourceStat { source_id: SourceId::new(3), value: 250 },
        ]
    );
}

#[test]
fn test_invalid_sources_excluded() {
    let mut fleet = Vec::new();
    for id in 0..5u32 {
        if id == 1 || id == 3 {
            fleet.push(SourceDataset::invalid(SourceId::new(id), "source unreachable"));
        } else {
            fleet.push(parsed(id, &[i64::from(id) * 10, 7]));
        }
    }

    // Source 3 would have the largest totals if it were valid.
    let mut rejected = SourceDataset::new(SourceId::new(3));
    assert!(rejected.parse(&RawPayload::new(3, [1_000_000, -1])).is_err());
    fleet[3] = rejected;

    let summary = FleetAggregator::aggregate(&fleet);
    assert_eq!(summary.per_source_largest.len(), 3);
    assert_eq!(summary.sources_skipped, 2);
    assert_eq!(
        summary.top_by_size,
        vec![SourceStat { source_id: SourceId::new(4), value: 47 }]
    );

    let counted: Vec<u32> = summary.top_by_count.iter().map(|s| s.source_id.as_u32()).collect();
    assert_eq!(counted, vec![0, 2, 4]);
}

#[test]
fn test_overflowing_source_excluded_from_fleet() {
    let mut overflowing = SourceDataset::new(SourceId::new(0));
    let err = overflowing
        .parse(&RawPayload::new(0, [i64::MAX, i64::MAX, 2]))
        .unwrap_err();
    assert_eq!(err, DatasetError::TotalOverflow { source_id: SourceId::new(0) });

    let fleet = vec![overflowing, parsed(1, &[5, 5])];
    let summary = FleetAggregator::aggregate(&fleet);
    assert_eq!(
        summary.top_by_size,
        vec![SourceStat { source_id: SourceId::new(1), value: 10 }]
    );
    assert_eq!(summary.per_source_largest.len(), 1);
    assert_eq!(summary.sources_skipped, 1);
}
