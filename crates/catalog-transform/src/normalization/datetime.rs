//! Feed date parsing and UTC timestamp formatting.
//!
//! Catalog feeds carry dates in the `dtf` attribute of date elements, nearly
//! always as a bare `YYYY-MM-DD`. Search documents store full UTC timestamps,
//! so a bare date becomes midnight UTC of that day.

use chrono::{DateTime, NaiveDate, NaiveDateTime, NaiveTime, Utc};

/// Output format of every normalized timestamp.
pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%dT%H:%M:%SZ";

/// Naive datetime layouts, interpreted as UTC.
const NAIVE_DATETIME_FORMATS: [&str; 3] = [
    "%Y-%m-%dT%H:%M:%S%.f",
    "%Y-%m-%dT%H:%M:%S",
    "%Y-%m-%dT%H:%M",
];

const DATE_FORMAT: &str = "%Y-%m-%d";

/// Parse a feed date into a UTC instant.
///
/// Accepted, in order: RFC 3339 with an offset (converted to UTC), a naive
/// `YYYY-MM-DDTHH:MM[:SS[.f]]` (taken as UTC), and a bare `YYYY-MM-DD`
/// (midnight UTC).
pub fn parse_timestamp(value: &str) -> Option<DateTime<Utc>> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return None;
    }

    if let Ok(dt) = DateTime::parse_from_rfc3339(trimmed) {
        return Some(dt.with_timezone(&Utc));
    }

    for fmt in &NAIVE_DATETIME_FORMATS {
        if let Ok(dt) = NaiveDateTime::parse_from_str(trimmed, fmt) {
            return Some(dt.and_utc());
        }
    }

    NaiveDate::parse_from_str(trimmed, DATE_FORMAT)
        .ok()
        .map(|date| date.and_time(NaiveTime::MIN).and_utc())
}

/// Normalize a feed date to `YYYY-MM-DDTHH:MM:SSZ`.
pub fn to_utc_timestamp(value: &str) -> Option<String> {
    parse_timestamp(value).map(|dt| dt.format(TIMESTAMP_FORMAT).to_string())
}
