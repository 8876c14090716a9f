//! Cafeteria Food-Safety Compliance Analyzer (Leptos + WASM)

mod api;
mod app;
mod components;
mod theme;

use wasm_bindgen::prelude::*;

#[wasm_bindgen(start)]
pub fn main() {
    console_error_panic_hook::set_once();
    theme::inject_stylesheet();
    leptos::mount::mount_to_body(app::App);
}
