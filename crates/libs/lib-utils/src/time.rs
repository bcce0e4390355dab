//! # Time Utilities
//!
//! Utilities for time formatting using chrono.

use chrono::{DateTime, SecondsFormat, Utc};

/// Get current UTC time.
pub fn now_utc() -> DateTime<Utc> {
    Utc::now()
}

/// Format time as an RFC 3339 / ISO 8601 string with millisecond precision.
pub fn format_rfc3339(time: DateTime<Utc>) -> String {
    time.to_rfc3339_opts(SecondsFormat::Millis, true)
}

// region:    --- Tests
#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn formatted_time_parses_back() {
        let now = now_utc();
        let formatted = format_rfc3339(now);

        let parsed = DateTime::parse_from_rfc3339(&formatted).expect("valid RFC 3339");
        assert_eq!(parsed.timestamp_millis(), now.timestamp_millis());
    }

    #[test]
    fn formatted_time_is_utc_with_millis() {
        let formatted = format_rfc3339(now_utc());
        assert!(formatted.ends_with('Z'));
        assert!(formatted.contains('.'));
    }
}
// endregion: --- Tests
