//! # taskboard-client
//!
//! Leptos + WASM frontend for the taskboard kanban application.
//!
//! This crate contains pages, components, application state, and the REST
//! client for the external board backend. It is server-rendered by
//! `taskboard-server` (`ssr` feature) and hydrated in the browser
//! (`hydrate` feature). Plain native builds compile every module so state
//! logic can be unit-tested without a browser.

pub mod app;
pub mod components;
pub mod config;
pub mod net;
pub mod pages;
pub mod state;
pub mod util;

/// WASM entry point: install panic/log hooks and hydrate the SSR markup.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Debug);
    leptos::mount::hydrate_body(app::App);
}
