//! # library-console
//!
//! Leptos SSR + hydrate admin console for a library management backend.
//!
//! The browser half keeps an authenticated session, routes the operator
//! between entity screens behind a navigation guard, and funnels every REST
//! call through a single gateway that attaches the bearer token and turns
//! failures into notices. The `ssr` half serves the shell, static assets and
//! an optional `/api` reverse proxy.

pub mod app;
pub mod components;
pub mod config;
pub mod nav;
pub mod net;
pub mod pages;
pub mod state;
pub mod util;

#[cfg(feature = "ssr")]
pub mod server;

/// WASM entry point: hydrate the server-rendered shell.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    if let Err(e) = console_log::init_with_level(log::Level::Info) {
        leptos::logging::warn!("console logger unavailable: {e}");
    }
    leptos::mount::hydrate_body(app::App);
}
