use crate::config::Config;
use chrono::{DateTime, Utc};
use std::sync::Arc;

/// Shared application state
///
/// Immutable after startup: handlers read the resolved configuration from
/// here instead of touching the process environment again.
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<Config>,
    pub started_at: DateTime<Utc>,
}

impl AppState {
    pub fn new(config: Config) -> Self {
        AppState {
            config: Arc::new(config),
            started_at: Utc::now(),
        }
    }
}
