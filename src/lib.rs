//! # ordering-client
//!
//! Leptos + WASM frontend for the food ordering application.
//!
//! This crate contains the canonical route table, the persisted session
//! store, and the pages and components that render them. Build the browser
//! bundle with the `csr` feature; without it the crate compiles natively so
//! the routing and state logic can be tested with `cargo test`.

pub mod app;
pub mod components;
pub mod config;
pub mod pages;
pub mod routes;
pub mod state;
pub mod util;

/// Browser entry point: install console logging and mount the app.
#[cfg(feature = "csr")]
#[wasm_bindgen::prelude::wasm_bindgen(start)]
pub fn start() {
    console_error_panic_hook::set_once();
    if let Err(err) = console_log::init_with_level(log::Level::Debug) {
        leptos::logging::warn!("console logger not installed: {err}");
    }
    leptos::mount::mount_to_body(app::App);
}
