#![cfg(test)]
use rangr_core::{Interval, RangeError, aggregate, distribute, has_overlap, split_interval};

/// Aggregation promises a disjoint, non-adjacent cover; feeding its output
/// straight back into the overlap checker must therefore never trip it.
#[test]
fn aggregated_output_never_overlaps() -> anyhow::Result<()> {
    let tokens = [
        "10.0.0.200",
        "10.0.0.1-10.0.0.120",
        "10.0.0.100-10.0.0.150",
        "10.0.0.151",
        "10.0.2.1-10.0.2.30",
    ];

    let merged = aggregate(&tokens);
    assert!(
        !has_overlap(&merged)?,
        "aggregated ranges still overlap: {merged:?}"
    );

    Ok(())
}

#[test]
fn aggregation_is_a_fixed_point() {
    let tokens = [
        "172.16.0.9",
        "172.16.0.1-172.16.0.8",
        "172.16.0.30-172.16.0.40",
        "bogus",
        "172.16.0.35-172.16.0.50",
    ];

    let once = aggregate(&tokens);
    let twice = aggregate(&once);
    assert_eq!(once, twice, "aggregate is not idempotent on its own output");
}

#[test]
fn aggregate_then_shard_covers_the_merged_range() -> anyhow::Result<()> {
    let tokens = ["192.168.1.17-192.168.1.40", "192.168.1.1-192.168.1.16"];

    let merged = aggregate(&tokens);
    assert_eq!(merged, vec!["192.168.1.1-192.168.1.40"]);

    let whole: Interval = merged[0].parse()?;
    let shards = split_interval(whole, 4)?;

    assert_eq!(shards.first().map(Interval::low), Some(whole.low()));
    assert_eq!(shards.last().map(Interval::high), Some(whole.high()));
    for pair in shards.windows(2) {
        assert_eq!(
            pair[1].low(),
            pair[0].high() + 1,
            "shards are not contiguous"
        );
    }

    let sizes: Vec<u64> = shards.iter().map(Interval::size).collect();
    let largest = sizes.iter().max().copied().unwrap_or(0);
    let smallest = sizes.iter().min().copied().unwrap_or(0);
    assert!(largest - smallest <= 1, "shard sizes unbalanced: {sizes:?}");

    Ok(())
}

#[test]
fn distribute_preserves_every_address() -> anyhow::Result<()> {
    let tokens = ["10.1.0.1-10.1.0.50", "10.2.0.1-10.2.0.13"];
    let buckets = distribute(&tokens, 4)?;

    let all_shards: Vec<String> = buckets.into_iter().flatten().collect();
    assert!(
        !has_overlap(&all_shards)?,
        "distributed shards overlap each other"
    );

    let total: u64 = all_shards
        .iter()
        .map(|token| token.parse::<Interval>().map(|interval| interval.size()))
        .sum::<Result<u64, RangeError>>()?;
    assert_eq!(total, 50 + 13, "distribution lost or duplicated addresses");

    Ok(())
}

/// The strict/lenient split is part of the contract: overlap checking
/// rejects what aggregation quietly tolerates.
#[test]
fn strict_and_lenient_paths_disagree_on_garbage() {
    let tokens = ["10.0.0.1", "not-an-address"];

    let overlap = has_overlap(&tokens);
    assert_eq!(
        overlap,
        Err(RangeError::InvalidFormat("not-an-address".to_string()))
    );

    let merged = aggregate(&tokens);
    assert_eq!(merged, vec!["10.0.0.1", "not-an-address"]);
}
