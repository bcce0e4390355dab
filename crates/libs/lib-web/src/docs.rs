//! # API Documentation
//!
//! OpenAPI document for the service, served as JSON at the configured
//! documentation path (`/api/docs` by default).

use axum::http::header;
use axum::response::IntoResponse;
use lib_core::{AppError, UserRecord};
use utoipa::openapi::security::{HttpAuthScheme, HttpBuilder, SecurityScheme};
use utoipa::{Modify, OpenApi};

#[derive(OpenApi)]
#[openapi(
    info(
        title = "API Documentation",
        description = "The API description",
        version = "1.0"
    ),
    modifiers(&SecurityAddon),
    components(schemas(UserRecord)),
    tags(
        (name = "api", description = "Application endpoints")
    )
)]
pub struct ApiDoc;

/// Adds the bearer-auth security scheme to the generated document.
struct SecurityAddon;

impl Modify for SecurityAddon {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        let components = openapi.components.get_or_insert_with(Default::default);
        components.add_security_scheme(
            "bearer",
            SecurityScheme::Http(
                HttpBuilder::new()
                    .scheme(HttpAuthScheme::Bearer)
                    .bearer_format("JWT")
                    .build(),
            ),
        );
    }
}

/// Serve the OpenAPI document as pretty-printed JSON.
pub async fn serve_docs() -> Result<impl IntoResponse, AppError> {
    let json = ApiDoc::openapi().to_pretty_json()?;
    Ok(([(header::CONTENT_TYPE, "application/json")], json))
}

// endregion: --- Tests
