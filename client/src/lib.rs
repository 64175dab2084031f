//! # client
//!
//! Leptos + WASM frontend for the ArbiFreelance escrow marketplace.
//!
//! This crate contains the routed pages, shared components, reactive state,
//! and the browser wallet bridge. Marketplace rules (listing, voting, form
//! validation, contract encoding) live in the `market` crate so they can be
//! tested natively; this crate wires them to signals and the DOM.

pub mod actions;
pub mod app;
pub mod components;
pub mod net;
pub mod pages;
pub mod state;
pub mod util;

/// WASM entry point: attach to the server-rendered body.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Debug);
    leptos::mount::hydrate_body(app::App);
}
