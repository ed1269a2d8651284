//! SSR host for the content-validation dashboard.
//!
//! Serves the Leptos app, its `/pkg` assets and a health probe. All content
//! data comes from the external eLearning API, which the browser calls
//! directly; this process holds no state.

mod config;
mod routes;

use tracing_subscriber::EnvFilter;

use crate::config::{ServerConfig, ServerError};

#[tokio::main]
async fn main() -> Result<(), ServerError> {
    // A missing .env is normal outside local development.
    let _ = dotenvy::dotenv();
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let config = ServerConfig::from_env()?;
    let app = routes::app()?;
    let listener = tokio::net::TcpListener::bind(config.bind_addr())
        .await
        .map_err(|source| ServerError::Bind { addr: config.bind_addr(), source })?;

    tracing::info!(port = config.port, "elearn-admin listening");
    axum::serve(listener, app).await.map_err(ServerError::Serve)
}
