//! OrbiBrain Coming-Soon Page
//!
//! Leptos-based WASM frontend. All behavior lives in `teaser-core`; this crate
//! renders it and feeds it browser time.

mod app;
mod clock;
mod components;
mod logging;
mod pages;

pub use app::App;

use wasm_bindgen::prelude::*;

/// WASM entry point
#[wasm_bindgen(start)]
pub fn main() {
    console_error_panic_hook::set_once();
    logging::init();
    leptos::mount::mount_to_body(App);
}
