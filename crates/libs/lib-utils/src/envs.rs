//! # Environment Variables
//!
//! Utilities for reading environment variables with defaults.
//!
//! An unset variable and a variable set to the empty string are treated the
//! same way, so `API_PORT=` in a `.env` file does not override a default.

use std::env;
use std::str::FromStr;

/// Get an environment variable, treating empty values as unset.
pub fn env_opt(name: &str) -> Option<String> {
    env::var(name).ok().filter(|val| !val.is_empty())
}

/// Get an environment variable, falling back to a default when unset or empty.
pub fn env_or(name: &str, default: &str) -> String {
    env_opt(name).unwrap_or_else(|| default.to_string())
}

/// Get and parse an environment variable, falling back to a default when
/// unset, empty, or unparseable.
pub fn env_parse_or<T: FromStr>(name: &str, default: T) -> T {
    env_opt(name)
        .and_then(|val| val.parse::<T>().ok())
        .unwrap_or(default)
}

// region:    --- Tests
#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_value_counts_as_unset() {
        env::set_var("LIB_UTILS_TEST_EMPTY", "");
        assert_eq!(env_opt("LIB_UTILS_TEST_EMPTY"), None);
        assert_eq!(env_or("LIB_UTILS_TEST_EMPTY", "fallback"), "fallback");
    }

    #[test]
    fn set_value_is_returned() {
        env::set_var("LIB_UTILS_TEST_SET", "value");
        assert_eq!(env_opt("LIB_UTILS_TEST_SET"), Some("value".to_string()));
        assert_eq!(env_or("LIB_UTILS_TEST_SET", "fallback"), "value");
    }

    #[test]
    fn parse_falls_back_on_garbage() {
        env::set_var("LIB_UTILS_TEST_PARSE", "not-a-number");
        assert_eq!(env_parse_or("LIB_UTILS_TEST_PARSE", 42u16), 42);

        env::set_var("LIB_UTILS_TEST_PARSE_OK", "8080");
        assert_eq!(env_parse_or("LIB_UTILS_TEST_PARSE_OK", 42u16), 8080);
    }
}
// endregion: --- Tests
