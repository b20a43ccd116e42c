//! Display formatting for raw message fields.

use chrono::DateTime;
use mailfeed_types::Timestamp;

/// 2000-01-01T00:00:00Z in milliseconds.
///
/// Timestamps below this value are taken to be in seconds. This misreads
/// genuine millisecond timestamps before 2000 (and any seconds value at or
/// above ~2.9e10, far in the future), which the feed has never produced.
pub const MILLIS_THRESHOLD: Timestamp = 946_684_800_000;

/// Rendered when a timestamp cannot be represented as a date
pub const INVALID_DATE: &str = "Invalid Date";

const DATE_PATTERN: &str = "%b %d, %Y, %H:%M:%S";

/// Escape markup-significant characters.
///
/// Total over all input; escaping already-escaped text escapes the
/// ampersands again.
pub fn escape(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for ch in text.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(ch),
        }
    }
    out
}

/// Normalize a seconds-or-milliseconds timestamp to milliseconds
pub fn normalize_millis(value: Timestamp) -> Option<Timestamp> {
    if value < MILLIS_THRESHOLD {
        value.checked_mul(1000)
    } else {
        Some(value)
    }
}

/// Format a timestamp as `Mon DD, YYYY, HH:MM:SS` (UTC, 24-hour clock).
pub fn format_timestamp(value: Timestamp) -> String {
    normalize_millis(value)
        .and_then(DateTime::from_timestamp_millis)
        .map(|dt| dt.format(DATE_PATTERN).to_string())
        .unwrap_or_else(|| INVALID_DATE.to_string())
}
