//! # client
//!
//! Leptos UI for the catalog admin dashboard: product listing, create/edit
//! forms, category chart and user directory.
//!
//! The crate is compiled twice: with `ssr` into the host binary for server
//! rendering, and with `hydrate` to WASM for the browser. Network calls only
//! happen in the `hydrate` build.

pub mod app;
pub mod components;
pub mod net;
pub mod pages;
pub mod state;
pub mod util;

/// WASM entry point: install logging and hydrate the server-rendered body.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    if let Err(err) = console_log::init_with_level(log::Level::Info) {
        web_sys::console::warn_1(&format!("console logger unavailable: {err}").into());
    }
    leptos::mount::hydrate_body(app::App);
}
