//! Relative timestamps ("5m ago") for event lists.

use chrono::{DateTime, Local, NaiveDateTime, Utc};

const MINUTE_MS: i64 = 60_000;
const HOUR_MS: i64 = 3_600_000;
const DAY_MS: i64 = 86_400_000;

/// Parses an event timestamp.
///
/// Accepts RFC 3339 and the backend's `2024-05-01 10:00:00.123Z` layout.
pub fn parse_timestamp(raw: &str) -> Option<DateTime<Utc>> {
    let raw = raw.trim();
    if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
        return Some(dt.with_timezone(&Utc));
    }
    NaiveDateTime::parse_from_str(raw.trim_end_matches('Z'), "%Y-%m-%d %H:%M:%S%.f")
        .ok()
        .map(|naive| naive.and_utc())
}

/// Formats `then` relative to `now`.
///
/// Under a minute (future timestamps included) is "just now", then whole
/// minutes, then whole hours; a day or more falls back to the local date.
pub fn relative_age_at(then: DateTime<Utc>, now: DateTime<Utc>) -> String {
    let elapsed = now.signed_duration_since(then).num_milliseconds();
    if elapsed < MINUTE_MS {
        "just now".to_string()
    } else if elapsed < HOUR_MS {
        format!("{}m ago", elapsed / MINUTE_MS)
    } else if elapsed < DAY_MS {
        format!("{}h ago", elapsed / HOUR_MS)
    } else {
        then.with_timezone(&Local).format("%Y-%m-%d").to_string()
    }
}

/// Relative age of a raw timestamp; unparseable input is shown as-is.
pub fn relative_age(raw: &str, now: DateTime<Utc>) -> String {
    match parse_timestamp(raw) {
        Some(then) => relative_age_at(then, now),
        None => raw.to_string(),
    }
}

#[cfg(test)]
#[path = "tests/age_tests.rs"]
mod tests;
