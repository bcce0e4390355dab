//! # Verbose Body Logging Middleware
//!
//! Captures request and response bodies, pretty-prints JSON payloads, and
//! emits the formatted message at `debug` level under the `http_detail`
//! target with colorized method tokens.
//!
//! When an [`ErrorLog`] is configured (production), responses with status
//! >= 400 additionally append one timestamped line to the error log file.
//! Requests whose URI contains the documentation path fragment are not
//! logged at all.

use axum::{
    body::{Body, Bytes},
    extract::{Request, State},
    http::{Method, StatusCode, Uri},
    middleware::Next,
    response::{IntoResponse, Response},
};
use std::sync::Arc;
use std::time::Instant;
use tracing::{debug, warn};

use crate::error_log::ErrorLog;
use super::mw_logging::colorize_method;

/// Configuration for the body logger, built once at startup. Request
/// handling never consults the environment.
#[derive(Clone, Debug)]
pub struct BodyLogConfig {
    /// Requests whose URI contains this fragment are skipped entirely.
    pub docs_path_fragment: String,
    /// Present only when file-based error logging is enabled (production).
    pub error_log: Option<ErrorLog>,
}

impl Default for BodyLogConfig {
    fn default() -> Self {
        Self {
            docs_path_fragment: "/docs".to_string(),
            error_log: None,
        }
    }
}

/// Verbose request/response body logging middleware.
pub async fn log_bodies(
    State(config): State<Arc<BodyLogConfig>>,
    req: Request,
    next: Next,
) -> Response {
    if !config.docs_path_fragment.is_empty()
        && req.uri().to_string().contains(&config.docs_path_fragment)
    {
        return next.run(req).await;
    }

    let start = Instant::now();
    let method = req.method().clone();
    let uri = req.uri().clone();

    let (req, request_body) = match buffer_request(req).await {
        Ok(buffered) => buffered,
        Err(response) => return response,
    };

    let response = next.run(req).await;
    let latency_ms = start.elapsed().as_millis();

    let (response, response_body) = buffer_response(response).await;
    let status = response.status();

    let message = format_detail(&method, &uri, status, latency_ms, &request_body, &response_body);

    debug!(
        target: "http_detail",
        status = status.as_u16(),
        "{}",
        colorize_message(&message)
    );

    if status.as_u16() >= 400 {
        if let Some(error_log) = &config.error_log {
            // One request, one line
            let line = message.replace('\n', " ");
            let timestamp = lib_utils::format_rfc3339(lib_utils::now_utc());
            if let Err(err) = error_log.append(&timestamp, &line) {
                warn!(
                    "failed to append to error log {:?}: {}",
                    error_log.path(),
                    err
                );
            }
        }
    }

    response
}

/// Buffer the request body so it can be both logged and forwarded.
async fn buffer_request(req: Request) -> Result<(Request, Bytes), Response> {
    let (parts, body) = req.into_parts();
    match axum::body::to_bytes(body, usize::MAX).await {
        Ok(bytes) => {
            let req = Request::from_parts(parts, Body::from(bytes.clone()));
            Ok((req, bytes))
        }
        Err(err) => {
            warn!("failed to read request body: {}", err);
            Err(StatusCode::BAD_REQUEST.into_response())
        }
    }
}

/// Buffer the response body so it can be both logged and returned.
async fn buffer_response(res: Response) -> (Response, Bytes) {
    let (parts, body) = res.into_parts();
    match axum::body::to_bytes(body, usize::MAX).await {
        Ok(bytes) => (
            Response::from_parts(parts, Body::from(bytes.clone())),
            bytes,
        ),
        Err(err) => {
            warn!("failed to read response body: {}", err);
            (Response::from_parts(parts, Body::empty()), Bytes::new())
        }
    }
}

fn format_detail(
    method: &Method,
    uri: &Uri,
    status: StatusCode,
    latency_ms: u128,
    request_body: &Bytes,
    response_body: &Bytes,
) -> String {
    let mut message = format!("{} {} {} {} ms", method, uri, status.as_u16(), latency_ms);
    if let Some(body) = pretty_body(request_body) {
        message.push_str("\nRequest Body:\n");
        message.push_str(&body);
    }
    if let Some(body) = pretty_body(response_body) {
        message.push_str("\nResponse Body:\n");
        message.push_str(&body);
    }
    message
}

/// Pretty-print a body for logging. JSON payloads are re-serialized with
/// indentation; anything else is logged as lossy UTF-8. Empty bodies are
/// elided.
fn pretty_body(bytes: &Bytes) -> Option<String> {
    if bytes.is_empty() {
        return None;
    }
    match serde_json::from_slice::<serde_json::Value>(bytes) {
        Ok(value) => serde_json::to_string_pretty(&value).ok(),
        Err(_) => Some(String::from_utf8_lossy(bytes).into_owned()),
    }
}

/// Colorize every known method token in the message.
fn colorize_message(message: &str) -> String {
    message
        .replace("POST", &colorize_method(&Method::POST))
        .replace("GET", &colorize_method(&Method::GET))
        .replace("PATCH", &colorize_method(&Method::PATCH))
        .replace("DELETE", &colorize_method(&Method::DELETE))
}

// endregion: --- Tests
