//! # sprintdeck-client
//!
//! Leptos + WASM frontend for the SprintDeck sprint planning application.
//!
//! This crate contains the routed pages, the auth-gated layout shell, the
//! shared state contexts (auth, account, theme, sidebar, project generation),
//! the identity and REST helpers, and the presentational components. It is
//! compiled with `hydrate` for the browser bundle and with `ssr` when linked
//! into the host server.

#![recursion_limit = "256"]

pub mod app;
pub mod components;
pub mod config;
pub mod error;
pub mod net;
pub mod pages;
pub mod state;
pub mod util;

#[cfg(test)]
pub(crate) mod test_support;

/// WASM entry point: installs browser logging and hydrates the SSR markup.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Debug);
    leptos::mount::hydrate_body(app::App);
}
