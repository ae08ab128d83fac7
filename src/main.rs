mod api_doc;
mod config;
mod error;
mod handlers;
mod models;
mod routes;
mod server;
mod state;

use config::Config;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    tracing_subscriber::fmt::init();

    tracing::info!("hello-app starting");

    let config = Config::from_env()?;
    config.log_startup();

    server::serve(config).await
}
