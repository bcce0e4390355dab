//! # Middleware
//!
//! Axum middleware for request stamping and request/response logging.
//!
//! ## Modules
//!
//! - **[`mw_req_stamp`]**: Request ID and timestamp stamping
//! - **[`mw_logging`]**: Compact per-request log line (target `http`)
//! - **[`mw_body_log`]**: Verbose body logging with optional error-log
//!   persistence (target `http_detail`)

// region: --- Modules
pub mod mw_body_log;
pub mod mw_logging;
pub mod mw_req_stamp;
// endregion: --- Modules

// region: --- Re-exports
pub use mw_body_log::{log_bodies, BodyLogConfig};
pub use mw_logging::log_requests;
pub use mw_req_stamp::{stamp_req, RequestStamp};
// endregion: --- Re-exports
