//! # calendar-shell
//!
//! Leptos + WASM client shell for the calendar application.
//!
//! The shell decides which screens a visitor may reach and authenticates
//! every backend call. `routes` holds the route table and private-route gate,
//! `net` the shared API client and its pre-send pipeline, `state` the stored
//! credential, and `util::redirect` the entry-screen redirect. `pages` are
//! placeholder hosts for screens rendered elsewhere.

pub mod app;
pub mod config;
pub mod error;
pub mod net;
pub mod pages;
pub mod routes;
pub mod state;
pub mod util;

/// Browser entry point: install logging and mount the app.
#[cfg(feature = "csr")]
#[wasm_bindgen::prelude::wasm_bindgen(start)]
pub fn main() {
    console_error_panic_hook::set_once();
    if let Err(e) = console_log::init_with_level(log::Level::Debug) {
        leptos::logging::warn!("logger init failed: {e}");
    }
    log::info!("calendar shell starting");
    leptos::mount::mount_to_body(app::App);
}
