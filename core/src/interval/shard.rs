//! # Interval Sharding
//!
//! Splits one interval into near-equal contiguous slices, and fans a list
//! of range tokens out across a fixed number of buckets so that each
//! bucket works on roughly the same share of every range.

use tracing::{debug, trace};

use crate::error::{RangeError, RangeResult};
use crate::interval::Interval;

/// Splits `interval` into at most `count` contiguous sub-intervals whose
/// sizes differ by at most one address.
///
/// With `size = interval.size()`, `q = size / count` and `r = size % count`:
/// the first `r` shards span `q + 1` addresses, the remaining ones span
/// `q`. Shards come out in ascending order, each starting one past the end
/// of the previous, and together cover `interval` exactly. When `count`
/// exceeds the interval size, one single-address shard is emitted per
/// address and the surplus is dropped; no empty or inverted shard is ever
/// produced.
///
/// Fails with [`RangeError::InvalidArgument`] when `count` is zero.
pub fn split_interval(interval: Interval, count: u64) -> RangeResult<Vec<Interval>> {
    if count == 0 {
        return Err(RangeError::InvalidArgument(
            "shard count must be at least 1".to_string(),
        ));
    }

    let size = interval.size();
    let span = size / count;
    let mut remainder = size % count;

    let mut shards: Vec<Interval> = Vec::new();
    let mut cursor = interval.low();

    for _ in 0..count {
        if cursor > interval.high() {
            break;
        }
        let mut width = span;
        if remainder > 0 {
            width += 1;
            remainder -= 1;
        }
        // While addresses remain, either span >= 1 or the remainder is not
        // yet used up, so width >= 1 here.
        let high = cursor + width - 1;
        shards.push(Interval::new(cursor, high));
        cursor = high + 1;
    }

    trace!("split {interval} into {} shard(s)", shards.len());

    Ok(shards)
}

/// Fans a list of range tokens out across `buckets` buckets.
///
/// Every parsed interval is split with [`split_interval`] into at most
/// `buckets` shards, and shard `k` lands in bucket `k`, so each bucket
/// receives about a `1/buckets` slice of every range, formatted back to
/// tokens. Tokens that fail to parse are skipped, like
/// [`aggregate`](crate::interval::aggregate::aggregate) does. Buckets
/// beyond a small interval's size stay empty.
///
/// Fails with [`RangeError::InvalidArgument`] when `buckets` is zero.
pub fn distribute<S: AsRef<str>>(tokens: &[S], buckets: usize) -> RangeResult<Vec<Vec<String>>> {
    if buckets == 0 {
        return Err(RangeError::InvalidArgument(
            "bucket count must be at least 1".to_string(),
        ));
    }

    let mut out: Vec<Vec<String>> = vec![Vec::new(); buckets];

    for token in tokens {
        let interval: Interval = match token.as_ref().parse() {
            Ok(interval) => interval,
            Err(_) => {
                debug!("skipping unparseable token: {}", token.as_ref());
                continue;
            }
        };

        let shards = split_interval(interval, buckets as u64)?;
        for (idx, shard) in shards.iter().enumerate() {
            out[idx].push(shard.to_string());
        }
    }

    Ok(out)
}

// ╔════════════════════════════════════════════╗
// ║ ████████╗███████╗███████╗████████╗███████╗ ║
// ║ ╚══██╔══╝██╔════╝██╔════╝╚══██╔══╝██╔════╝ ║
// ║    ██║   █████╗  ███████╗   ██║   ███████╗ ║
// ║    ██║   ██╔══╝  ╚════██║   ██║   ╚════██║ ║
// ║    ██║   ███████╗███████║   ██║   ███████║ ║
// ║    ╚═╝   ╚══════╝╚══════╝   ╚═╝   ╚══════╝ ║
// ╚════════════════════════════════════════════╝
