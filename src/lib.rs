//! Bazaari - consumer marketplace front-end
//!
//! The combined sign-in / sign-up screen for the Bazaari marketplace,
//! built with Leptos and WebAssembly.

#![recursion_limit = "2048"]

pub mod app;
pub mod core;
pub mod ui;

#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    use crate::app::*;
    console_error_panic_hook::set_once();
    leptos::mount::hydrate_body(App);
}
