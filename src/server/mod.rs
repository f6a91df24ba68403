//! Router assembly for the SSR host.
//!
//! SYSTEM CONTEXT
//! ==============
//! Serves the Leptos shell for every console route, the compiled `/pkg`
//! assets, and (when `LIBRARY_API_UPSTREAM` is set) forwards `/api/*` to the
//! library backend so the browser can stay same-origin.

pub mod proxy;

use std::path::PathBuf;
use std::time::Duration;

use axum::Router;
use axum::http::StatusCode;
use axum::routing::get;
use leptos::prelude::*;
use leptos_axum::{LeptosRoutes, generate_route_list};
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;

use crate::app::{App, shell};
use crate::config::ServerConfig;
use proxy::ApiProxy;

#[derive(Debug, thiserror::Error)]
pub enum ServerError {
    #[error("leptos configuration: {0}")]
    Leptos(String),
    #[error("proxy client: {0}")]
    ProxyClient(#[from] reqwest::Error),
}

/// Full application router.
///
/// # Errors
///
/// Returns an error if the Leptos configuration cannot be loaded or the
/// proxy's HTTP client cannot be built.
pub fn app(config: &ServerConfig) -> Result<Router, ServerError> {
    let conf = get_configuration(None).map_err(|e| ServerError::Leptos(e.to_string()))?;
    let leptos_options = conf.leptos_options;
    let routes = generate_route_list(App);

    let leptos_router = Router::new()
        .leptos_routes(&leptos_options, routes, {
            let opts = leptos_options.clone();
            move || shell(opts.clone())
        })
        .with_state(leptos_options.clone());

    let site_root_path = PathBuf::from(leptos_options.site_root.as_ref());

    let mut router = Router::new().route("/healthz", get(healthz));
    if let Some(upstream) = &config.api_upstream {
        let proxy = ApiProxy::new(upstream.clone(), Duration::from_secs(config.proxy_timeout_secs))?;
        tracing::info!(%upstream, "forwarding /api to upstream");
        router = router.merge(proxy.router());
    }

    Ok(router
        .merge(leptos_router)
        .nest_service("/pkg", ServeDir::new(site_root_path.join("pkg")))
        .layer(TraceLayer::new_for_http()))
}

async fn healthz() -> StatusCode {
    StatusCode::OK
}
