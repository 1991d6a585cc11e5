//! # client
//!
//! Leptos front end for the scholarship recommendation letter workflow.
//!
//! This crate contains pages, components, session state and the REST client.
//! Workflow rules (who may act, which actions exist, where to route) come
//! from the `workflow` crate; pages only render them.

pub mod app;
pub mod components;
pub mod net;
pub mod pages;
pub mod state;
pub mod util;

/// WASM entry point: hydrate the server-rendered body.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Info);
    leptos::mount::hydrate_body(app::App);
}
