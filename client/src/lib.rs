#![recursion_limit = "256"]
//! # client
//!
//! Leptos + WASM admin dashboard for the eLearning content-moderation
//! platform.
//!
//! This crate contains pages, components, browser state, and the `gloo-net`
//! transport. Domain rules (status normalization, list filtering, the review
//! state machine, wizard validation) live in the `content` crate; pages here
//! hold that state in signals and render it.

pub mod app;
pub mod components;
pub mod net;
pub mod pages;
pub mod state;
pub mod util;

/// Browser entry point: install panic/log hooks and hydrate the SSR markup.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Debug);
    leptos::mount::hydrate_body(app::App);
}
