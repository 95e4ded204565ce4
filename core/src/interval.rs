//! # Address Intervals
//!
//! Defines the [`Interval`] value type and the token syntax around it.
//!
//! A token is either:
//! * A single address (e.g. `192.168.1.1`), covering exactly one address.
//! * A hyphenated range (e.g. `192.168.1.1-192.168.1.100`), covering both
//!   bounds and everything between them.
//!
//! Parsed intervals are always normalized so `low <= high`, regardless of
//! the order the token listed its bounds in. The interval algorithms live
//! in the submodules: [`overlap`], [`aggregate`], and [`shard`].

pub mod aggregate;
pub mod overlap;
pub mod shard;

use std::fmt;
use std::str::FromStr;

use crate::addr;
use crate::error::RangeError;

/// An inclusive range of integer-encoded IPv4 addresses.
///
/// Immutable once constructed; `low <= high` always holds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Interval {
    low: u64,
    high: u64,
}

impl Interval {
    /// Builds an interval from two bounds in either order.
    ///
    /// Bounds are integer-encoded addresses; bits above the low 32 are
    /// masked off, as [`addr::int_to_address`] does when formatting.
    pub fn new(a: u64, b: u64) -> Self {
        let a = u64::from(a as u32);
        let b = u64::from(b as u32);
        Self {
            low: a.min(b),
            high: a.max(b),
        }
    }

    /// The smaller bound, inclusive.
    pub fn low(&self) -> u64 {
        self.low
    }

    /// The larger bound, inclusive.
    pub fn high(&self) -> u64 {
        self.high
    }

    /// Number of addresses covered, bounds included.
    pub fn size(&self) -> u64 {
        self.high - self.low + 1
    }

    /// True when the interval covers exactly one address.
    pub fn is_single(&self) -> bool {
        self.low == self.high
    }

    /// Closed-interval intersection test: true when `self` and `other`
    /// share at least one address.
    pub fn overlaps(&self, other: &Interval) -> bool {
        self.low.max(other.low) <= self.high.min(other.high)
    }
}

impl FromStr for Interval {
    type Err = RangeError;

    /// Parses a token into an interval.
    ///
    /// A token without `-` must be a single valid address and yields an
    /// interval with coinciding bounds. A token with one `-` must have a
    /// valid address on each side; the bounds may come in either order.
    /// Anything else fails with [`RangeError::InvalidFormat`].
    fn from_str(token: &str) -> Result<Self, Self::Err> {
        let parts: Vec<&str> = token.split('-').collect();
        let (start, end) = match parts.as_slice() {
            [single] => (*single, *single),
            [start, end] => (*start, *end),
            _ => return Err(RangeError::InvalidFormat(token.to_string())),
        };

        let low = addr::address_to_int(start)
            .ok_or_else(|| RangeError::InvalidFormat(token.to_string()))?;
        let high = addr::address_to_int(end)
            .ok_or_else(|| RangeError::InvalidFormat(token.to_string()))?;

        Ok(Interval::new(low, high))
    }
}

impl fmt::Display for Interval {
    /// Renders the canonical token form: the single address when the
    /// bounds coincide, `low-high` otherwise.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_single() {
            write!(f, "{}", addr::int_to_address(self.low))
        } else {
            write!(
                f,
                "{}-{}",
                addr::int_to_address(self.low),
                addr::int_to_address(self.high)
            )
        }
    }
}

// ╔════════════════════════════════════════════╗
// ║ ████████╗███████╗███████╗████████╗███████╗ ║
// ║ ╚══██╔══╝██╔════╝██╔════╝╚══██╔══╝██╔════╝ ║
// ║    ██║   █████╗  ███████╗   ██║   ███████╗ ║
// ║    ██║   ██╔══╝  ╚════██║   ██║   ╚════██║ ║
// ║    ██║   ███████╗███████║   ██║   ███████║ ║
// ║    ╚═╝   ╚══════╝╚══════╝   ╚═╝   ╚══════╝ ║
// ╚════════════════════════════════════════════╝
