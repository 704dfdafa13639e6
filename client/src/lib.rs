//! # client
//!
//! Leptos + WASM frontend for the organization/project/document workspace.
//!
//! This crate contains the root app and router, pages, creation dialogs,
//! application state, and the REST client for the server's JSON API. The
//! `ssr` feature renders it inside the Axum server; `hydrate` builds the
//! browser bundle.

pub mod app;
pub mod components;
pub mod net;
pub mod pages;
pub mod state;
pub mod util;

/// WASM entry point: attach to the server-rendered DOM.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Debug);
    leptos::mount::hydrate_body(app::App);
}
