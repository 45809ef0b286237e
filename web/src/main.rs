//! Nuevos Espacios Marketing Site
//!
//! Single-page Leptos frontend: static content plus the theme toggle, the
//! client marquee and reveal-on-view animations.

use leptos::prelude::*;
use wasm_bindgen::prelude::*;

mod app;
mod components;
mod services;
mod state;
mod utils;

use app::App;

#[wasm_bindgen(start)]
pub fn main() {
    // Set up panic hook for better error messages in WASM
    console_error_panic_hook::set_once();

    // Initialize logger; core crates log through `tracing`'s `log` fallback
    wasm_logger::init(wasm_logger::Config::default());
    log::info!("Nuevos Espacios site starting");

    let config = utils::config::load_presentation_config();

    leptos::mount::mount_to_body(move || view! { <App config=config/> });
}
