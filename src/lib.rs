//! # taskdeck
//!
//! Leptos + WASM client for a task-management service: a login screen, an
//! authenticated task list with CRUD, and a typed HTTP layer over the
//! `/task-management` REST API. The server, its database, and the visual
//! design live elsewhere; this crate owns view rendering, local UI state,
//! and request/response plumbing.

pub mod app;
pub mod components;
pub mod net;
pub mod pages;
pub mod state;
pub mod util;

/// Browser entry point: install panic/log hooks and hydrate the app shell.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Info);
    leptos::mount::hydrate_body(crate::app::App);
}
