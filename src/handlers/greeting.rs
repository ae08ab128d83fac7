use crate::routes;
use crate::state::AppState;
use axum::{extract::State, response::Html};

const VERSION: Option<&str> = option_env!("CARGO_PKG_VERSION");

/// GET / handler (relative to the base path) - The greeting page
///
/// Renders from the resolved configuration only; the environment is never
/// re-read during request handling.
#[utoipa::path(
    get,
    path = routes::GREETING,
    responses(
        (status = 200, description = "HTML greeting naming the app and its runtime",
         body = String, content_type = "text/html")
    ),
    tag = "greeting"
)]
pub async fn greeting_handler(State(state): State<AppState>) -> Html<String> {
    let config = &state.config;
    let stylesheet = format!(
        "{}/style.css",
        routes::under_base(&config.base_path(), routes::STATIC_ASSETS)
    );

    Html(format!(
        "<html>\n\
         <head>\n\
         <title>{name}</title>\n\
         <link rel=\"stylesheet\" href=\"{stylesheet}\">\n\
         </head>\n\
         <body>\n\
         <h1>Hello from {name}!</h1>\n\
         <ul>\n\
         <li>APP_NAME is {name}</li>\n\
         <li>APP_PORT is {port}</li>\n\
         <li>App version is {version}</li>\n\
         <li>Rust version is {rustc}</li>\n\
         </ul>\n\
         </body>\n\
         </html>\n",
        name = config.app_name,
        port = config.port,
        version = VERSION.unwrap_or("unknown"),
        rustc = env!("RUSTC_VERSION"),
    ))
}
