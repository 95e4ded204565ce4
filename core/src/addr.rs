//! Dotted-quad validation and the string/integer address codec.
//!
//! Addresses travel as `u64` so that byte arithmetic shifted up to 24 bits
//! stays far away from any sign or wrap-around edge; only the low 32 bits
//! carry value.

use std::net::Ipv4Addr;
use std::sync::OnceLock;

use regex::Regex;

/// Full-string dotted-quad pattern: first octet in `1..=255`, remaining
/// octets in `0..=255`, no leading zeros anywhere. Digit classes are spelled
/// `[0-9]`; `\d` here would admit any Unicode decimal digit.
const ADDRESS_PATTERN: &str =
    r"^([1-9]|[1-9][0-9]|1[0-9]{2}|2[0-4][0-9]|25[0-5])(\.([0-9]|[1-9][0-9]|1[0-9]{2}|2[0-4][0-9]|25[0-5])){3}$";

static COMPILED_PATTERN: OnceLock<Regex> = OnceLock::new();

/// Retrieves or initializes the compiled address pattern.
fn address_pattern() -> &'static Regex {
    COMPILED_PATTERN.get_or_init(|| {
        Regex::new(ADDRESS_PATTERN).expect("failed to compile address pattern")
    })
}

/// Checks whether `addr` is a well-formed dotted-quad IPv4 address.
///
/// The pattern must cover the whole string, so surrounding characters or
/// whitespace make it fail. `0.x.x.x` addresses are rejected.
pub fn is_valid_address(addr: &str) -> bool {
    address_pattern().is_match(addr)
}

/// Converts a dotted-quad string to its integer value,
/// `b0*2^24 + b1*2^16 + b2*2^8 + b3`.
///
/// Returns `None` when `addr` fails [`is_valid_address`]; absence is not an
/// error, callers gate on validity first.
pub fn address_to_int(addr: &str) -> Option<u64> {
    if !is_valid_address(addr) {
        return None;
    }
    let parsed: Ipv4Addr = addr.parse().ok()?;
    Some(u64::from(u32::from(parsed)))
}

/// Formats the low 32 bits of `value` as a dotted-quad string.
///
/// Exact inverse of [`address_to_int`] for every valid address.
pub fn int_to_address(value: u64) -> String {
    // Truncating to u32 is the per-byte `& 0xFF` masking.
    Ipv4Addr::from(value as u32).to_string()
}

// ╔════════════════════════════════════════════╗
// ║ ████████╗███████╗███████╗████████╗███████╗ ║
// ║ ╚══██╔══╝██╔════╝██╔════╝╚══██╔══╝██╔════╝ ║
// ║    ██║   █████╗  ███████╗   ██║   ███████╗ ║
// ║    ██║   ██╔══╝  ╚════██║   ██║   ╚════██║ ║
// ║    ██║   ███████╗███████║   ██║   ███████║ ║
// ║    ╚═╝   ╚══════╝╚══════╝   ╚═╝   ╚══════╝ ║
// ╚════════════════════════════════════════════╝
