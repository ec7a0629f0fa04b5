// crates/core/src/parse.rs
use crate::tokens::is_token_separator;

/// Extracts a leading integer the way a formatted stream read does: skip
/// whitespace, take an optional sign and a non-empty digit run, ignore
/// everything after it.
///
/// Returns `None` when no digit run is present or the value does not fit in
/// an `i64` (out-of-range input counts as a failed extraction).
#[must_use]
pub fn extract_integer(input: &[u8]) -> Option<i64> {
    let mut rest = input;
    while let [byte, tail @ ..] = rest {
        if !is_token_separator(*byte) {
            break;
        }
        rest = tail;
    }
    let negative = match rest.first() {
        Some(b'-') => {
            rest = &rest[1..];
            true
        }
        Some(b'+') => {
            rest = &rest[1..];
            false
        }
        _ => false,
    };
    // Accumulate on the negative side so i64::MIN parses cleanly.
    let mut value: i64 = 0;
    let mut digits = 0usize;
    for &byte in rest {
        if !byte.is_ascii_digit() {
            break;
        }
        value = value.checked_mul(10)?.checked_sub(i64::from(byte - b'0'))?;
        digits += 1;
    }
    if digits == 0 {
        return None;
    }
    if negative { Some(value) } else { value.checked_neg() }
}
