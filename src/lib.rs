//! # netbot-client
//!
//! Leptos + WASM chat client for the NetBot network-diagnostics backend.
//!
//! The user types a request ("scan network", "ping 8.8.8.8"), the client
//! posts it to the backend's chat endpoint, and the reply is rendered as
//! formatted text, optionally with a device or port table. A periodic
//! health probe drives the Connected/Offline indicator.
//!
//! Layout:
//! - `net`: wire types, errors, and the [`net::api::Backend`] seam
//! - `state`: transcript and conversation phase, plus UI chrome state
//! - `controller`: the request lifecycle and the connection monitor
//! - `util`: message formatting, table building, theme, clock, shortcuts
//! - `components` / `pages` / `app`: the Leptos view layer

pub mod app;
pub mod components;
pub mod config;
pub mod controller;
pub mod net;
pub mod pages;
pub mod state;
pub mod util;

/// Browser entry point.
#[cfg(feature = "csr")]
#[wasm_bindgen::prelude::wasm_bindgen(start)]
pub fn start() {
    console_error_panic_hook::set_once();
    if console_log::init_with_level(log::Level::Debug).is_err() {
        leptos::logging::warn!("console logger already initialised");
    }
    leptos::mount::mount_to_body(app::App);
}
