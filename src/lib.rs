//! Vlog Vintage - School Vlog Newspaper
//!
//! A single-page site styled as a vintage newspaper for a school vlog,
//! rendered with Leptos on the server and hydrated in the browser where the
//! page interactions (menu, scroll effects, typewriter headlines, social
//! feedback, easter egg) run as WebAssembly.

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
