use utoipa::OpenApi;

use crate::error::ErrorResponse;
use crate::handlers;
use crate::models::InfoResponse;

/// OpenAPI documentation
///
/// Covers the routes served under the configured base path; the document's
/// `servers` entry is set to that base path at router construction time so
/// the paths here stay relative. The unprefixed `/healthz` probe lives
/// outside the base path and is not part of this document.
#[derive(OpenApi)]
#[openapi(
    info(
        title = "hello-app API",
        version = "1.0.0",
        description = "A sample hello-world service that mounts all routes under an APP_NAME path prefix"
    ),
    paths(handlers::greeting::greeting_handler, handlers::info::info_handler),
    components(schemas(InfoResponse, ErrorResponse)),
    tags(
        (name = "greeting", description = "The greeting page"),
        (name = "system", description = "Build and runtime information")
    )
)]
pub struct ApiDoc;
