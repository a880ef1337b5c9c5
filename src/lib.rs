//! Taskboard - projects and tasks in the browser
//!
//! A Leptos front end for a REST task-management backend: sign in, list
//! projects, and move tasks across a three-column board.

#![recursion_limit = "4096"]

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
