//! Numeric token scanners for free-text product fields.
//!
//! Tokens are ASCII digit runs, optionally followed by a single fractional part
//! (`12`, `12.5`). Scanning is leftmost-first, so `"1.2.3"` yields `1.2` then `3`.
//!
//! Only ASCII `0-9` count as digits. Other Unicode decimal digits (e.g. Arabic-Indic
//! `٥٠٠٠`) are not numbers here, so a field written only in them reads as missing.

use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    static ref DECIMAL_RE: Regex = Regex::new(r"[0-9]+(?:\.[0-9]+)?").unwrap();
    static ref INTEGER_RE: Regex = Regex::new(r"[0-9]+").unwrap();
    static ref LEADING_DIGITS_RE: Regex = Regex::new(r"^[0-9]+").unwrap();
}

/// Every decimal number in `s`, left to right.
pub fn all_decimals(s: &str) -> Vec<f64> {
    DECIMAL_RE
        .find_iter(s)
        .filter_map(|m| m.as_str().parse::<f64>().ok())
        .collect()
}

/// The first decimal number anywhere in `s`.
pub fn first_decimal(s: &str) -> Option<f64> {
    DECIMAL_RE.find(s).and_then(|m| m.as_str().parse::<f64>().ok())
}

/// The first digit run anywhere in `s`, as written.
pub fn first_integer_token(s: &str) -> Option<&str> {
    INTEGER_RE.find(s).map(|m| m.as_str())
}

/// The first digit run anywhere in `s`, as a number.
pub fn first_integer(s: &str) -> Option<f64> {
    first_integer_token(s).and_then(|t| t.parse::<f64>().ok())
}

/// Digit run at the very start of `s` after trimming surrounding whitespace.
pub fn leading_digits(s: &str) -> Option<&str> {
    LEADING_DIGITS_RE.find(s.trim()).map(|m| m.as_str())
}
