//! # portfolio-client
//!
//! Leptos + WASM frontend for the single-page portfolio.
//!
//! This crate contains the page controller (theme, navigation, mobile menu),
//! the browser adapters it drives, the static content tables, and the
//! components that render them. The `server` crate renders [`app::App`] and
//! serves the hydrate bundle built from this crate.

pub mod app;
pub mod components;
pub mod content;
pub mod pages;
pub mod state;
pub mod util;

/// WASM entry point: attach the reactive runtime to the server-rendered body.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    if let Err(e) = console_log::init_with_level(log::Level::Debug) {
        web_sys::console::warn_1(&format!("console logger unavailable: {e}").into());
    }
    leptos::mount::hydrate_body(app::App);
}
