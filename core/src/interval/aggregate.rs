//! Greedy aggregation of range tokens into a minimal disjoint cover.

use tracing::debug;

use crate::interval::Interval;

/// Merges overlapping or directly adjacent ranges into the smallest list of
/// disjoint ranges, formatted back to tokens in ascending order.
///
/// This is a best-effort cleanup pass, not a validator: tokens that fail to
/// parse are skipped and never reported. Two intervals merge when they share
/// an address or sit exactly next to each other (gap of zero); merged output
/// intervals are separated by at least one uncovered address.
///
/// When fewer than two tokens parse, the input list is returned verbatim,
/// unparseable entries included, rather than the reformatted single
/// interval. Callers relying on canonical output must therefore not assume
/// it for zero- or one-interval inputs.
pub fn aggregate<S: AsRef<str>>(tokens: &[S]) -> Vec<String> {
    let mut intervals: Vec<Interval> = Vec::with_capacity(tokens.len());
    for token in tokens {
        match token.as_ref().parse::<Interval>() {
            Ok(interval) => intervals.push(interval),
            Err(_) => debug!("skipping unparseable token: {}", token.as_ref()),
        }
    }

    if intervals.len() < 2 {
        return tokens.iter().map(|t| t.as_ref().to_string()).collect();
    }

    intervals.sort_by_key(|interval| interval.low());

    let mut merged: Vec<Interval> = Vec::new();
    let mut current: Interval = intervals[0];

    for interval in intervals.iter().skip(1) {
        if interval.low() > current.high() + 1 {
            merged.push(current);
            current = *interval;
        } else {
            current = Interval::new(current.low(), current.high().max(interval.high()));
        }
    }
    merged.push(current);

    merged.iter().map(Interval::to_string).collect()
}

// ╔════════════════════════════════════════════╗
// ║ ████████╗███████╗███████╗████████╗███████╗ ║
// ║ ╚══██╔══╝██╔════╝██╔════╝╚══██╔══╝██╔════╝ ║
// ║    ██║   █████╗  ███████╗   ██║   ███████╗ ║
// ║    ██║   ██╔══╝  ╚════██║   ██║   ╚════██║ ║
// ║    ██║   ███████╗███████║   ██║   ███████║ ║
// ║    ╚═╝   ╚══════╝╚══════╝   ╚═╝   ╚══════╝ ║
// ╚════════════════════════════════════════════╝
