use axum::{
    Json,
    http::{StatusCode, Uri},
};
use serde::{Deserialize, Serialize};

/// Error response type
#[derive(Serialize, Deserialize, utoipa::ToSchema)]
pub struct ErrorResponse {
    pub error: String,
}

/// Fallback handler for requests outside the registered route tree.
///
/// Everything not explicitly registered, in particular any path outside the
/// configured base path, ends up here with a 404 and a JSON body naming the
/// path that missed.
pub async fn not_found(uri: Uri) -> (StatusCode, Json<ErrorResponse>) {
    (
        StatusCode::NOT_FOUND,
        Json(ErrorResponse {
            error: format!("no route for {}", uri.path()),
        }),
    )
}
