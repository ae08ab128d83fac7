use crate::models::HealthResponse;
use axum::Json;

/// GET /healthz handler - Liveness probe
///
/// The one route registered outside the configured base path, so the
/// hosting runner can probe the process without knowing its app name.
/// Always returns 200 while the process is running.
pub async fn health_handler() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok".to_string(),
    })
}
