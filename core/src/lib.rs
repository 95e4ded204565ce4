//! # rangr-core
//!
//! IPv4 address and interval utilities: dotted-quad validation and the
//! string/integer codec, range-token parsing, overlap detection, greedy
//! aggregation of overlapping or adjacent ranges, and balanced sharding of
//! a range into contiguous slices.
//!
//! ## Module Overview
//! * **[`addr`]**: dotted-quad validation and the address codec.
//! * **[`interval`]**: the [`Interval`] value type and the token syntax.
//!     * **[`interval::overlap`]**: pairwise overlap detection over token lists.
//!     * **[`interval::aggregate`]**: greedy merge into a minimal disjoint cover.
//!     * **[`interval::shard`]**: balanced splitting and bucket distribution.
//! * **[`error`]**: the two-kind error surface ([`RangeError`]).
//!
//! Tokens are plain strings: `"a.b.c.d"` for a single address or
//! `"a.b.c.d-e.f.g.h"` for an inclusive range. All operations are pure,
//! synchronous functions over small in-memory lists; the crate does no
//! I/O and holds no state across calls.

pub mod addr;
pub mod error;
pub mod interval;

pub use error::{RangeError, RangeResult};
pub use interval::Interval;
pub use interval::aggregate::aggregate;
pub use interval::overlap::has_overlap;
pub use interval::shard::{distribute, split_interval};
