//! # Server Setup
//!
//! Server initialization, route mounting, and HTTP server startup.
//!
//! This module builds the Axum router with the global path prefix, URI
//! versioning, documentation route, and the logging middleware stack, then
//! binds the listener and serves until process exit.

// region: --- Imports
use axum::{http::StatusCode, routing::get, Router};
use lib_core::Config;
use std::net::SocketAddr;
use std::path::PathBuf;
use std::sync::Arc;
use tower_http::trace::TraceLayer;
use tracing::info;

use crate::docs;
use crate::error_log::ErrorLog;
use crate::middleware::{log_bodies, log_requests, stamp_req, BodyLogConfig};
// endregion: --- Imports

// region: --- Server Configuration
/// Server configuration. All routing and logging knobs live here so the
/// middleware stays free of environment branching.
#[derive(Clone, Debug)]
pub struct ServerConfig {
    /// Path segment prepended to every route (e.g. `api`).
    pub global_prefix: String,
    /// Version prefix letter for URI versioning (e.g. `v`).
    pub version_prefix: String,
    /// Default API version; application routes mount under
    /// `/{global_prefix}/{version_prefix}{default_version}`.
    pub default_version: u32,
    /// Documentation path segment under the global prefix.
    pub docs_path: String,
    /// Directory holding the error log file.
    pub log_dir: PathBuf,
    /// Error log file name inside `log_dir`.
    pub error_log_file: String,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            global_prefix: "api".to_string(),
            version_prefix: "v".to_string(),
            default_version: 1,
            docs_path: "docs".to_string(),
            log_dir: PathBuf::from("logs"),
            error_log_file: "error.log".to_string(),
        }
    }
}

impl ServerConfig {
    /// Mount point for application routes, e.g. `/api/v1`.
    pub fn versioned_prefix(&self) -> String {
        format!(
            "/{}/{}{}",
            self.global_prefix, self.version_prefix, self.default_version
        )
    }

    /// Route serving the OpenAPI document, e.g. `/api/docs`.
    pub fn docs_route(&self) -> String {
        format!("/{}/{}", self.global_prefix, self.docs_path)
    }

    /// URI fragment identifying documentation requests, e.g. `/docs`.
    pub fn docs_fragment(&self) -> String {
        format!("/{}", self.docs_path)
    }

    /// Full path of the error log file.
    pub fn error_log_path(&self) -> PathBuf {
        self.log_dir.join(&self.error_log_file)
    }
}
// endregion: --- Server Configuration

// region: --- Server Setup
/// Initialize and start the HTTP server.
///
/// Application routes are nested under the versioned prefix
/// (`/api/v1/...` with the default configuration).
///
/// # Errors
///
/// Returns an error if the log directory cannot be created (production
/// only) or the listener fails to bind.
pub async fn start_server(config: ServerConfig, api_routes: Router) -> anyhow::Result<()> {
    init_tracing();

    let app_config = Config::from_env();

    let body_log = body_log_config(&config, &app_config)?;
    let app = build_router(&config, body_log, api_routes);

    let addr = SocketAddr::from(([0, 0, 0, 0], app_config.api_port));
    let listener = tokio::net::TcpListener::bind(addr).await?;

    info!(
        "Application is running on: http://localhost:{}/{}",
        app_config.api_port, config.global_prefix
    );

    axum::serve(listener, app).await?;
    Ok(())
}

/// Create the application router with documentation, versioned application
/// routes, a health probe, and the logging middleware stack.
pub fn build_router(config: &ServerConfig, body_log: BodyLogConfig, api_routes: Router) -> Router {
    Router::new()
        .route(&config.docs_route(), get(docs::serve_docs))
        .route("/health", get(|| async { "OK" }))
        .nest(&config.versioned_prefix(), api_routes)
        .fallback(|| async { (StatusCode::NOT_FOUND, "Route not found") })
        // The last layer added runs first: stamping wraps both loggers so
        // they see the request ID.
        .layer(axum::middleware::from_fn_with_state(
            Arc::new(body_log),
            log_bodies,
        ))
        .layer(axum::middleware::from_fn(log_requests))
        .layer(axum::middleware::from_fn(stamp_req))
        .layer(
            TraceLayer::new_for_http().make_span_with(|request: &axum::http::Request<_>| {
                tracing::info_span!(
                    "http_request",
                    method = %request.method(),
                    uri = %request.uri(),
                )
            }),
        )
}

/// Build the body-logger configuration from the resolved application
/// config. File logging is enabled only in production; the log directory
/// is created up front so request handling never has to.
fn body_log_config(config: &ServerConfig, app_config: &Config) -> anyhow::Result<BodyLogConfig> {
    let error_log = if app_config.environment.is_production() {
        let error_log = ErrorLog::new(config.error_log_path());
        error_log.ensure_dir()?;
        Some(error_log)
    } else {
        None
    };

    Ok(BodyLogConfig {
        docs_path_fragment: config.docs_fragment(),
        error_log,
    })
}

fn init_tracing() {
    let log_level = lib_utils::env_or("LOG_LEVEL", "info").to_lowercase();
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(&log_level));

    // try_init: tests and embedded servers may have installed a subscriber
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(true)
        .try_init();
}
// endregion: --- Server Setup

// region:    --- Tests
#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::Body;
    use axum::http::Request as HttpRequest;
    use tower::ServiceExt;

    fn test_router(api_routes: Router) -> Router {
        build_router(
            &ServerConfig::default(),
            BodyLogConfig::default(),
            api_routes,
        )
    }

    async fn status_of(app: Router, uri: &str) -> StatusCode {
        app.oneshot(HttpRequest::builder().uri(uri).body(Body::empty()).unwrap())
            .await
            .unwrap()
            .status()
    }

    #[tokio::test]
    async fn docs_are_served_at_api_docs() {
        let app = test_router(Router::new());

        let response = app
            .oneshot(
                HttpRequest::builder()
                    .uri("/api/docs")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(
            response.headers().get("content-type").unwrap(),
            "application/json"
        );

        let body = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        let doc: serde_json::Value = serde_json::from_slice(&body).unwrap();
        assert_eq!(doc["info"]["title"], "API Documentation");
        assert_eq!(doc["info"]["version"], "1.0");
    }

    #[tokio::test]
    async fn routes_mount_under_versioned_prefix() {
        let api_routes = Router::new().route("/users", get(|| async { "users" }));

        assert_eq!(
            status_of(test_router(api_routes.clone()), "/api/v1/users").await,
            StatusCode::OK
        );
        // No v2 mounted, and the bare path must not resolve either
        assert_eq!(
            status_of(test_router(api_routes.clone()), "/api/v2/users").await,
            StatusCode::NOT_FOUND
        );
        assert_eq!(
            status_of(test_router(api_routes), "/users").await,
            StatusCode::NOT_FOUND
        );
    }

    #[tokio::test]
    async fn health_probe_responds() {
        assert_eq!(
            status_of(test_router(Router::new()), "/health").await,
            StatusCode::OK
        );
    }

    #[tokio::test]
    async fn unmatched_routes_fall_back_to_404() {
        assert_eq!(
            status_of(test_router(Router::new()), "/nowhere").await,
            StatusCode::NOT_FOUND
        );
    }

    #[tokio::test]
    async fn responses_carry_request_stamp() {
        let app = test_router(Router::new());

        let response = app
            .oneshot(
                HttpRequest::builder()
                    .uri("/health")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();
        assert!(response.headers().contains_key("X-Request-ID"));
    }

    #[test]
    fn development_skips_log_dir_and_file_logging() {
        let mut config = ServerConfig::default();
        config.log_dir = std::env::temp_dir().join(format!("dev-logs-{}", uuid::Uuid::new_v4()));

        let app_config = Config {
            api_port: 3000,
            environment: lib_core::Environment::Development,
        };

        let body_log = body_log_config(&config, &app_config).unwrap();
        assert!(body_log.error_log.is_none());
        assert!(!config.log_dir.exists());
    }

    #[test]
    fn production_creates_log_dir() {
        let mut config = ServerConfig::default();
        config.log_dir = std::env::temp_dir().join(format!("prod-logs-{}", uuid::Uuid::new_v4()));

        let app_config = Config {
            api_port: 3000,
            environment: lib_core::Environment::Production,
        };

        let body_log = body_log_config(&config, &app_config).unwrap();
        assert!(body_log.error_log.is_some());
        assert!(config.log_dir.exists());
        assert_eq!(body_log.docs_path_fragment, "/docs");

        std::fs::remove_dir_all(&config.log_dir).ok();
    }

    #[test]
    fn config_paths() {
        let config = ServerConfig::default();
        assert_eq!(config.versioned_prefix(), "/api/v1");
        assert_eq!(config.docs_route(), "/api/docs");
        assert_eq!(config.docs_fragment(), "/docs");
        assert_eq!(config.error_log_path(), PathBuf::from("logs/error.log"));
    }
}
// endregion: --- Tests
