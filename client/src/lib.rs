//! # lostfound-client
//!
//! Leptos + WASM frontend for the lost-and-found listing service.
//!
//! This crate contains the route-level pages (login, lost items, session
//! expired), the presentational components they compose, the explicit state
//! machines behind each page, and the HTTP collaborators that talk to the
//! backend API.

pub mod app;
pub mod components;
pub mod constants;
pub mod net;
pub mod pages;
pub mod state;
pub mod util;

/// Browser entry point: installs panic/log hooks and hydrates the SSR markup.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Debug);
    leptos::mount::hydrate_body(app::App);
}
