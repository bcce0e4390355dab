//! # Compact Request Logging Middleware
//!
//! Emits one line per request under the `http` target:
//!
//! ```text
//! GET /api/v1/users 200 3 ms - 57
//! ```
//!
//! The method is colorized for terminal output (GET blue, POST green,
//! PATCH light blue, DELETE red, anything else uncolored). The trailing
//! number is the response `content-length`, `-` when the header is absent.

use axum::{
    extract::Request,
    http::{header, Method},
    middleware::Next,
    response::Response,
};
use colored::Colorize;
use std::time::Instant;
use tracing::info;

use super::mw_req_stamp::RequestStamp;

/// Compact request/response logging middleware.
pub async fn log_requests(req: Request, next: Next) -> Response {
    let start = Instant::now();
    let method = req.method().clone();
    let uri = req.uri().clone();
    let request_id = req
        .extensions()
        .get::<RequestStamp>()
        .map(|stamp| stamp.id.clone())
        .unwrap_or_else(|| "unknown".to_string());

    let response = next.run(req).await;

    let latency_ms = start.elapsed().as_millis();
    let status = response.status().as_u16();
    let content_length = response
        .headers()
        .get(header::CONTENT_LENGTH)
        .and_then(|val| val.to_str().ok())
        .unwrap_or("-")
        .to_string();

    info!(
        target: "http",
        request_id = %request_id,
        status,
        latency_ms = latency_ms as u64,
        "{} {} {} {} ms - {}",
        colorize_method(&method),
        uri,
        status,
        latency_ms,
        content_length
    );

    response
}

/// Wrap the method name in its ANSI color. Methods outside the palette are
/// returned uncolored.
pub(crate) fn colorize_method(method: &Method) -> String {
    match method.as_str() {
        "GET" => "GET".blue().to_string(),
        "POST" => "POST".green().to_string(),
        // Light blue (#87ceeb)
        "PATCH" => "PATCH".truecolor(135, 206, 235).to_string(),
        "DELETE" => "DELETE".red().to_string(),
        other => other.to_string(),
    }
}

// endregion: --- Tests
