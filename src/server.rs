use anyhow::{Context, Result};
use axum::{Router, routing::get};
use tokio::signal;
use tower_http::{services::ServeDir, trace::TraceLayer};
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use crate::api_doc::ApiDoc;
use crate::config::Config;
use crate::error;
use crate::handlers::{greeting_handler, health_handler, info_handler};
use crate::routes;
use crate::state::AppState;

const STATIC_ROOT: &str = "static";

/// Build the application router.
///
/// Every application route is registered with its full, already-prefixed
/// path, so the routing table is complete and immutable before the listener
/// ever accepts a connection. The prefix root is registered with and without
/// a trailing slash; `/healthz` is the single route outside the prefix.
///
/// An `APP_NAME` the router cannot parse (e.g. containing `{`), or the
/// reserved name `healthz`, makes registration panic, which aborts
/// startup before the listener opens.
pub fn app(state: AppState) -> Router {
    let base = state.config.base_path();
    let root = routes::under_base(&base, routes::GREETING);

    let mut openapi = ApiDoc::openapi();
    // Documented paths are relative to the base path; point Swagger's
    // "try it out" at the mounted location.
    openapi.servers = Some(vec![utoipa::openapi::Server::new(base.clone())]);

    Router::new()
        .route(&root, get(greeting_handler))
        .route(&format!("{root}/"), get(greeting_handler))
        .route(&routes::under_base(&base, routes::INFO), get(info_handler))
        .route(routes::HEALTHZ, get(health_handler))
        .with_state(state)
        .nest_service(
            &routes::under_base(&base, routes::STATIC_ASSETS),
            ServeDir::new(STATIC_ROOT),
        )
        .merge(
            SwaggerUi::new(routes::under_base(&base, routes::DOCS))
                .url(routes::under_base(&base, routes::OPENAPI_JSON), openapi),
        )
        .fallback(error::not_found)
        .layer(TraceLayer::new_for_http())
}

/// Bind the resolved listen address and serve until a shutdown signal.
pub async fn serve(config: Config) -> Result<()> {
    let state = AppState::new(config);
    let addr = state.config.listen_addr();
    let base = state.config.base_path();
    let app = app(state);

    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .with_context(|| format!("failed to bind {addr}"))?;

    tracing::info!("Service started at http://{addr}{base}/");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("server error")?;

    tracing::info!("Server shutdown complete");
    Ok(())
}

async fn shutdown_signal() {
    let ctrl_c = async {
        signal::ctrl_c()
            .await
            .expect("failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        signal::unix::signal(signal::unix::SignalKind::terminate())
            .expect("failed to install signal handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {
            tracing::info!("Received Ctrl+C, shutting down");
        },
        _ = terminate => {
            tracing::info!("Received SIGTERM, shutting down");
        },
    }
}
