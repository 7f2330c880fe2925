//! # roster
//!
//! Leptos + WASM frontend for the activity roster: lists sign-up-able
//! activities, keeps the list in step with the server through a one-shot
//! snapshot fetch plus a reconnecting push channel, and submits email signups.
//!
//! All state and protocol logic lives in plain Rust (`state`, `net`,
//! `dispatcher`) and is tested natively. Browser glue (fetch, WebSocket,
//! timers, mounting) is gated behind the `csr` feature.

pub mod app;
pub mod components;
pub mod config;
pub mod dispatcher;
pub mod error;
pub mod net;
pub mod runtime;
pub mod state;
pub mod util;

/// WASM entry point: install the console logger and panic hook, then mount
/// the root component onto `<body>`.
#[cfg(feature = "csr")]
#[wasm_bindgen::prelude::wasm_bindgen(start)]
pub fn start() {
    console_error_panic_hook::set_once();
    if let Err(e) = console_log::init_with_level(log::Level::Debug) {
        leptos::logging::warn!("console logger already installed: {e}");
    }
    leptos::mount::mount_to_body(app::App);
}
