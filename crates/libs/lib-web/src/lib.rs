//! # Web Library
//!
//! Server bootstrap, router construction, middleware, and API documentation.

pub mod docs;
pub mod error_log;
pub mod middleware;
pub mod server;

pub use error_log::ErrorLog;
pub use server::{build_router, start_server, ServerConfig};
