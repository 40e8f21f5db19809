//! Lenient ISO-8601 timestamp parsing for recency ordering.

use chrono::{DateTime, NaiveDate, NaiveDateTime, Utc};

/// Parse a creation timestamp.
///
/// Accepts RFC 3339 (`2024-01-15T10:00:00Z`, `2024-01-15T10:00:00+07:00`),
/// a naive date-time without offset (read as UTC), or a bare `YYYY-MM-DD`
/// date (midnight UTC). Returns `None` for anything else.
pub fn parse_timestamp(value: &str) -> Option<DateTime<Utc>> {
    let value = value.trim();
    if let Ok(dt) = DateTime::parse_from_rfc3339(value) {
        return Some(dt.with_timezone(&Utc));
    }
    if let Ok(naive) = NaiveDateTime::parse_from_str(value, "%Y-%m-%dT%H:%M:%S%.f") {
        return Some(naive.and_utc());
    }
    if let Ok(date) = NaiveDate::parse_from_str(value, "%Y-%m-%d") {
        return date.and_hms_opt(0, 0, 0).map(|naive| naive.and_utc());
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Datelike, Timelike};

    #[test]
    fn parses_rfc3339_utc() {
        let dt = parse_timestamp("2024-01-15T10:00:00Z").expect("valid");
        assert_eq!((dt.year(), dt.month(), dt.day()), (2024, 1, 15));
        assert_eq!(dt.hour(), 10);
    }

    #[test]
    fn parses_rfc3339_with_offset_into_utc() {
        let dt = parse_timestamp("2024-01-15T10:00:00+07:00").expect("valid");
        assert_eq!(dt.hour(), 3);
    }

    #[test]
    fn parses_fractional_seconds() {
        assert!(parse_timestamp("2024-01-15T10:00:00.123Z").is_some());
        assert!(parse_timestamp("2024-01-15T10:00:00.123").is_some());
    }

    #[test]
    fn parses_bare_date_as_midnight() {
        let dt = parse_timestamp("2024-01-05").expect("valid");
        assert_eq!(dt.day(), 5);
        assert_eq!(dt.hour(), 0);
    }

    #[test]
    fn trims_surrounding_whitespace() {
        assert!(parse_timestamp("  2024-01-05 ").is_some());
    }

    #[test]
    fn rejects_garbage() {
        assert!(parse_timestamp("").is_none());
        assert!(parse_timestamp("yesterday").is_none());
        assert!(parse_timestamp("2024-13-01").is_none());
    }
}
