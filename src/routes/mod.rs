//! Router assembly.
//!
//! SYSTEM CONTEXT
//! ==============
//! Stitches the Leptos SSR page, its compiled `/pkg` assets, the static
//! `public/` directory, and the health probe into a single Axum router.

pub mod health;

use std::path::PathBuf;

use axum::Router;
use axum::routing::get;
use leptos::prelude::*;
use leptos_axum::{LeptosRoutes, generate_route_list};
use tower_http::compression::CompressionLayer;
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;

use crate::config::ServerConfig;

#[derive(Debug, thiserror::Error)]
pub enum RouteError {
    /// Missing or malformed `[[workspace.metadata.leptos]]` section.
    #[error("leptos configuration: {0}")]
    LeptosConfig(String),
}

/// Probe routes that do not depend on the Leptos build.
pub fn health_routes() -> Router {
    Router::new().route("/healthz", get(health::healthz))
}

/// Full site: SSR page at `/`, assets under `/pkg`, static files as fallback.
///
/// # Errors
///
/// Returns [`RouteError`] if the Leptos configuration cannot be loaded.
pub fn app(config: &ServerConfig) -> Result<Router, RouteError> {
    let conf = get_configuration(None).map_err(|e| RouteError::LeptosConfig(e.to_string()))?;
    let leptos_options = conf.leptos_options;
    let routes = generate_route_list(client::app::App);

    let leptos_router = Router::new()
        .leptos_routes(&leptos_options, routes, {
            let opts = leptos_options.clone();
            move || client::app::shell(opts.clone())
        })
        .with_state(leptos_options.clone());

    let site_root = PathBuf::from(leptos_options.site_root.as_ref());
    tracing::debug!(site_root = %site_root.display(), public_dir = %config.public_dir.display(), "serving static assets");

    Ok(health_routes()
        .merge(leptos_router)
        .nest_service("/pkg", ServeDir::new(site_root.join("pkg")))
        .fallback_service(ServeDir::new(&config.public_dir))
        .layer(CompressionLayer::new())
        .layer(TraceLayer::new_for_http()))
}
