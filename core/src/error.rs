use thiserror::Error;

/// Result type for range operations.
pub type RangeResult<T> = Result<T, RangeError>;

/// Errors reported by token parsing, overlap checking, and sharding.
///
/// Aggregation never reports these: it is a best-effort cleanup pass and
/// skips tokens it cannot parse.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum RangeError {
    /// The token is empty, is not a dotted-quad address, or is not a
    /// `addr-addr` pair of valid addresses.
    #[error("invalid address or range: {0}")]
    InvalidFormat(String),

    /// Structural misuse of an operation, e.g. requesting zero shards.
    #[error("invalid argument: {0}")]
    InvalidArgument(String),
}
