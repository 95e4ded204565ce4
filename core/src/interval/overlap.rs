//! Pairwise overlap detection across a list of range tokens.

use crate::error::RangeResult;
use crate::interval::Interval;

/// Reports whether any two of the given tokens cover a common address.
///
/// Every token must parse; the first malformed one fails the whole call
/// with [`RangeError::InvalidFormat`](crate::error::RangeError). An empty
/// list is vacuously non-overlapping.
///
/// Each new interval is tested against everything seen before it, so the
/// scan is O(n²) in the token count. Token lists here are short,
/// user-supplied range lists, not bulk address catalogues.
pub fn has_overlap<S: AsRef<str>>(tokens: &[S]) -> RangeResult<bool> {
    let mut seen: Vec<Interval> = Vec::with_capacity(tokens.len());

    for token in tokens {
        let candidate: Interval = token.as_ref().parse()?;
        if seen.iter().any(|prior| prior.overlaps(&candidate)) {
            return Ok(true);
        }
        seen.push(candidate);
    }

    Ok(false)
}

// ╔════════════════════════════════════════════╗
// ║ ████████╗███████╗███████╗████████╗███████╗ ║
// ║ ╚══██╔══╝██╔════╝██╔════╝╚══██╔══╝██╔════╝ ║
// ║    ██║   █████╗  ███████╗   ██║   ███████╗ ║
// ║    ██║   ██╔══╝  ╚════██║   ██║   ╚════██║ ║
// ║    ██║   ███████╗███████║   ██║   ███████║ ║
// ║    ╚═╝   ╚══════╝╚══════╝   ╚═╝   ╚══════╝ ║
// ╚════════════════════════════════════════════╝
