//! # Application Configuration
//!
//! Configuration loaded from environment variables, resolved once at startup.
//! Request handling never reads the environment; everything downstream works
//! from the resolved [`Config`] value.

use lib_utils::env_opt;

/// Port the HTTP listener binds when `API_PORT` is unset, empty, or invalid.
pub const DEFAULT_PORT: u16 = 3000;

/// Application configuration loaded from environment variables.
#[derive(Clone, Debug)]
pub struct Config {
    /// HTTP listening port, from `API_PORT`.
    pub api_port: u16,

    /// Deployment environment, from `APP_ENV`.
    ///
    /// Production enables file-based error logging.
    pub environment: Environment,
}

impl Config {
    /// Load configuration from environment variables.
    pub fn from_env() -> Self {
        Self {
            api_port: resolve_port(env_opt("API_PORT")),
            environment: Environment::from_raw(env_opt("APP_ENV").as_deref()),
        }
    }
}

/// Deployment environment of the running process.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Environment {
    Development,
    Production,
}

impl Environment {
    /// Resolve from the raw `APP_ENV` value. Anything other than the exact
    /// string `production` is treated as development.
    pub fn from_raw(raw: Option<&str>) -> Self {
        match raw {
            Some("production") => Environment::Production,
            _ => Environment::Development,
        }
    }

    pub fn is_production(self) -> bool {
        matches!(self, Environment::Production)
    }
}

/// Resolve the listening port from the raw `API_PORT` value.
///
/// Unset and empty values fall back silently; a value that does not parse as
/// a port logs a warning before falling back.
fn resolve_port(raw: Option<String>) -> u16 {
    match raw {
        None => DEFAULT_PORT,
        Some(val) => val.parse().unwrap_or_else(|_| {
            tracing::warn!(
                "cannot parse `API_PORT` value {:?}, defaulting to {}",
                val,
                DEFAULT_PORT
            );
            DEFAULT_PORT
        }),
    }
}

// region:    --- Tests
#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn port_defaults_when_unset() {
        assert_eq!(resolve_port(None), 3000);
    }

    #[test]
    fn port_uses_value_when_set() {
        assert_eq!(resolve_port(Some("8080".to_string())), 8080);
    }

    #[test]
    fn port_defaults_on_garbage() {
        assert_eq!(resolve_port(Some("not-a-port".to_string())), 3000);
        assert_eq!(resolve_port(Some("99999".to_string())), 3000);
    }

    #[test]
    fn environment_resolves_production_exactly() {
        assert_eq!(
            Environment::from_raw(Some("production")),
            Environment::Production
        );
        assert_eq!(
            Environment::from_raw(Some("Production")),
            Environment::Development
        );
        assert_eq!(
            Environment::from_raw(Some("development")),
            Environment::Development
        );
        assert_eq!(Environment::from_raw(None), Environment::Development);
    }

    #[test]
    fn production_flag() {
        assert!(Environment::Production.is_production());
        assert!(!Environment::Development.is_production());
    }
}
// endregion: --- Tests
