//! Leptos UI for the equipment rental catalog.
//!
//! SYSTEM CONTEXT
//! ==============
//! Built twice: with `ssr` it is rendered by the `spectech` host, with
//! `hydrate` it compiles to WASM and takes over the server-rendered page.
//! Domain rules come from `fleet`; this crate holds only reactive state,
//! components and browser glue.

pub mod app;
pub mod components;
pub mod pages;
pub mod state;
pub mod util;

/// WASM entry point.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Debug);
    leptos::mount::hydrate_body(app::App);
}
