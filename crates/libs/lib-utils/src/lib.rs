//! # Utilities Library
//!
//! Shared utility functions for environment variables and time formatting.

pub mod envs;
pub mod time;

// Re-export commonly used functions
pub use envs::{env_opt, env_or, env_parse_or};
pub use time::{format_rfc3339, now_utc};
