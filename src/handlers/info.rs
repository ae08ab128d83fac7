use crate::models::InfoResponse;
use crate::routes;
use crate::state::AppState;
use axum::{Json, extract::State};

// From Cargo.toml; the git/rustc values come from build.rs.
const VERSION: Option<&str> = option_env!("CARGO_PKG_VERSION");

/// GET /info handler (relative to the base path) - Build and runtime report
#[utoipa::path(
    get,
    path = routes::INFO,
    responses(
        (status = 200, description = "Build and runtime information", body = InfoResponse)
    ),
    tag = "system"
)]
pub async fn info_handler(State(state): State<AppState>) -> Json<InfoResponse> {
    Json(InfoResponse {
        app_name: state.config.app_name.clone(),
        port: state.config.port,
        version: VERSION.unwrap_or("unknown").to_string(),
        git_commit: env!("GIT_COMMIT_SHORT").to_string(),
        git_dirty: env!("GIT_DIRTY").to_string(),
        rustc_version: env!("RUSTC_VERSION").to_string(),
        started_at: state.started_at.to_rfc3339(),
    })
}
