//! # hr-client
//!
//! Leptos + WASM front end for the HR record-keeping system. Authenticates
//! against the remote HR API, shows a dashboard of aggregate employee
//! statistics, and supports listing, viewing, creating, editing, and
//! deleting employee records.
//!
//! Browser-only code (HTTP, localStorage, dialogs) lives behind the `csr`
//! feature so the pure logic in `state/` and `net/` stays testable on the
//! host.

pub mod app;
pub mod components;
pub mod net;
pub mod pages;
pub mod state;
pub mod util;

/// Browser entry point: mounts the application onto `<body>`.
#[cfg(feature = "csr")]
#[wasm_bindgen::prelude::wasm_bindgen(start)]
pub fn start() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Info);
    leptos::mount::mount_to_body(crate::app::App);
}
