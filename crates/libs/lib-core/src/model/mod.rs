//! # Core Models
//!
//! Plain data entities shared across the application.

// region: --- Modules
pub mod user;
// endregion: --- Modules

// region: --- Re-exports
pub use user::{UserRecord, UserRecordPartial};
// endregion: --- Re-exports
