//! # API Service
//!
//! Thin entry point that delegates to lib-web for server setup.

use axum::Router;
use lib_web::{start_server, ServerConfig};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load environment variables
    dotenvy::dotenv().ok();

    // Application route modules are nested under the versioned prefix
    // (/api/v1) as they come online.
    start_server(ServerConfig::default(), Router::new()).await
}
