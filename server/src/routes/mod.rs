//! Router assembly.
//!
//! SYSTEM CONTEXT
//! ==============
//! The host serves the Leptos SSR pages and the compiled WASM bundle. All
//! board data lives in the external backend, which the browser calls
//! directly; this router only renders pages and gates them on the session
//! cookie.

pub mod gate;

use std::path::{Path, PathBuf};

use axum::Router;
use axum::http::StatusCode;
use axum::middleware::from_fn_with_state;
use axum::routing::get;
use leptos::prelude::*;
use leptos_axum::{LeptosRoutes, generate_route_list};
use tower_http::compression::CompressionLayer;
use tower_http::services::{ServeDir, ServeFile};
use tower_http::trace::TraceLayer;

use crate::config::ConfigError;
use gate::{GateConfig, route_gate};

#[derive(Debug, thiserror::Error)]
pub enum HostError {
    #[error(transparent)]
    Config(#[from] ConfigError),
    #[error("leptos configuration: {0}")]
    Leptos(String),
    #[error("failed to bind {0}: {1}")]
    Bind(String, #[source] std::io::Error),
    #[error("server failed: {0}")]
    Serve(#[source] std::io::Error),
}

/// Full host router: Leptos pages plus static assets behind the route gate.
///
/// # Errors
///
/// Returns `HostError::Leptos` if the `[[workspace.metadata.leptos]]`
/// configuration cannot be loaded.
pub fn app() -> Result<Router, HostError> {
    let conf = get_configuration(None).map_err(|e| HostError::Leptos(e.to_string()))?;
    let leptos_options = conf.leptos_options;
    let routes = generate_route_list(taskboard_client::app::App);

    let pages = Router::new()
        .leptos_routes(&leptos_options, routes, {
            let opts = leptos_options.clone();
            move || taskboard_client::app::shell(opts.clone())
        })
        .with_state(leptos_options.clone());

    let site_root = PathBuf::from(leptos_options.site_root.as_ref());
    Ok(assemble(pages, &site_root, GateConfig::default()))
}

/// Attach assets, health check, gate and tracing to a page router.
pub fn assemble(pages: Router, site_root: &Path, gate: GateConfig) -> Router {
    pages
        .route("/healthz", get(healthz))
        .nest_service("/pkg", ServeDir::new(site_root.join("pkg")))
        .route_service("/favicon.svg", ServeFile::new(site_root.join("favicon.svg")))
        .route_service("/favicon.ico", ServeFile::new(site_root.join("favicon.ico")))
        .layer(from_fn_with_state(gate, route_gate))
        .layer(CompressionLayer::new())
        .layer(TraceLayer::new_for_http())
}

async fn healthz() -> StatusCode {
    StatusCode::OK
}
