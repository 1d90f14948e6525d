//! Temporal validation for message expiry dates.

use chrono::NaiveDate;
use regex::Regex;
use std::sync::LazyLock;

/// `YYYY-MM-DD` with zero-padded month 01-12 and day 01-31.
static DATE_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[0-9]{4}-(0[1-9]|1[0-2])-(0[1-9]|[1-2][0-9]|3[0-1])$").unwrap()
});

/// Parse an expiry string, requiring both the exact layout and a real
/// calendar date.
///
/// The layout gate pins leading zeros and the digit count; the parse rejects
/// impossible dates like `2023-02-29` that slip through the crude 01-31 day
/// range.
pub fn parse_expiry(raw: &str) -> Option<NaiveDate> {
    if !DATE_PATTERN.is_match(raw) {
        return None;
    }
    NaiveDate::parse_from_str(raw, "%Y-%m-%d").ok()
}

/// Whether `raw` is a well-formed calendar date string.
pub fn is_valid_expiry(raw: &str) -> bool {
    parse_expiry(raw).is_some()
}
