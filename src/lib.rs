// lib.rs - Root module for the local_directory library
//
// The library hosts the Leptos web application (shared between the
// server binary and the WASM bundle) and the SQL fixtures used to
// bootstrap and seed the directory tables.

/// Table definitions and seed SQL for the directory store
pub mod fixtures;

/// The Leptos web application
pub mod web_app;

/// WASM entry point: hydrates the server-rendered page in the browser
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    leptos::mount::hydrate_body(web_app::App);
}
