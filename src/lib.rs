//! # portfolio
//!
//! Leptos + WASM interaction layer for a static personal portfolio site.
//!
//! The crate renders the page shell and wires six independent features:
//! theme switching, the rotating hero role, the project gallery with its
//! detail modal, the contact form with a mail-client fallback, the hero video
//! overlay, and the settings panel that edits the profile in place.
//!
//! Browser-only code sits behind the `csr` feature. Everything under `state`
//! is plain data and runs in native tests.

pub mod app;
pub mod components;
pub mod config;
pub mod content;
pub mod net;
pub mod pages;
pub mod state;
pub mod util;

/// WASM entry point: installs panic/console logging and mounts the app.
#[cfg(feature = "csr")]
#[wasm_bindgen::prelude::wasm_bindgen(start)]
pub fn start() {
    console_error_panic_hook::set_once();
    if let Err(e) = console_log::init_with_level(log::Level::Debug) {
        leptos::logging::warn!("console logger already installed: {e}");
    }
    leptos::mount::mount_to_body(app::App);
}
