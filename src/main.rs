//! # folio
//!
//! Axum host for the portfolio site: renders the Leptos page on the server
//! and serves the hydration bundle plus static assets.

mod config;
mod routes;

use tracing_subscriber::EnvFilter;

use crate::config::ServerConfig;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let dotenv = dotenvy::dotenv();

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    match dotenv {
        Ok(path) => tracing::info!(path = %path.display(), "loaded environment file"),
        Err(err) if err.not_found() => tracing::debug!("no .env file"),
        Err(err) => tracing::warn!(error = %err, "ignoring unreadable .env file"),
    }

    let config = ServerConfig::from_env()?;
    let app = routes::app(&config)?;

    let addr = config.socket_addr();
    let listener = tokio::net::TcpListener::bind(addr).await?;

    tracing::info!(%addr, "folio listening");
    axum::serve(listener, app).await?;
    Ok(())
}
