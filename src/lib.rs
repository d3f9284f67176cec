//! # pressmark
//!
//! Leptos + WASM browser client for a blog content-management system.
//! Every screen is a fetch-and-render view over the backend's REST API;
//! session state is a pair of bearer tokens in localStorage.
//!
//! This crate contains pages, components, application state, the REST
//! client, and browser utility glue. The `hydrate` feature gates all
//! browser-only code so the crate unit-tests natively; `ssr` builds the
//! shell for a hosting server.

pub mod app;
pub mod components;
pub mod net;
pub mod pages;
pub mod state;
pub mod util;

/// Browser entry point: install panic/log hooks and hydrate the app.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Info);
    leptos::mount::hydrate_body(app::App);
}
