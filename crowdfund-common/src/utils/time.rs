use chrono::{DateTime, NaiveDate, Utc};

use crate::error::{FundError, Result};

/// Milliseconds in one day.
pub const DAY_MS: i64 = 24 * 60 * 60 * 1000;

/// Returns the current UNIX timestamp in milliseconds.
pub fn current_time_ms() -> i64 {
    Utc::now().timestamp_millis()
}

/// Parses the deadline field of the create form into a UTC millisecond timestamp.
///
/// Accepts a plain date (`2026-12-31`, midnight UTC) as produced by a date
/// input, or a full RFC 3339 timestamp.
pub fn parse_deadline(raw: &str) -> Result<i64> {
    let trimmed = raw.trim();

    if let Ok(date) = NaiveDate::parse_from_str(trimmed, "%Y-%m-%d") {
        if let Some(midnight) = date.and_hms_opt(0, 0, 0) {
            return Ok(midnight.and_utc().timestamp_millis());
        }
    }

    DateTime::parse_from_rfc3339(trimmed)
        .map(|dt| dt.timestamp_millis())
        .map_err(|_| FundError::InvalidDeadline(raw.to_string()))
}
