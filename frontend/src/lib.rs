//! This crate provides the WebAssembly (WASM) entry point for the SentiNEX site.
//!
//! It hydrates the server-rendered HTML so navigation runs in the browser, and
//! routes the app's `log` output to the browser console.

#![recursion_limit = "256"]

#[wasm_bindgen::prelude::wasm_bindgen]
/// Hydrates the Leptos application on the client-side.
///
/// Initializes `console_log` (debug level in debug builds, info otherwise) and
/// `console_error_panic_hook`, then hydrates the body with `app::component`.
pub fn hydrate() {
    use app::component;
    _ = console_log::init_with_level(log_level());
    console_error_panic_hook::set_once();

    leptos::mount::hydrate_body(component);
}

fn log_level() -> log::Level {
    if cfg!(debug_assertions) {
        log::Level::Debug
    } else {
        log::Level::Info
    }
}
