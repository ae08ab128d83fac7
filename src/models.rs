use serde::{Deserialize, Serialize};

/// Response type for the liveness endpoint
#[derive(Serialize, Deserialize, utoipa::ToSchema)]
pub struct HealthResponse {
    pub status: String,
}

/// Response type for the build/runtime info endpoint
#[derive(Serialize, Deserialize, utoipa::ToSchema)]
pub struct InfoResponse {
    pub app_name: String,
    pub port: u16,
    pub version: String,
    pub git_commit: String,
    pub git_dirty: String,
    pub rustc_version: String,
    pub started_at: String,
}
