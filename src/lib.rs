#[cfg(any(feature = "ssr", feature = "hydrate"))]
pub mod app;
pub mod catalog;
pub mod config;
pub mod interaction;
pub mod notice;
pub mod page;
pub mod player;
pub mod share;

#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    use crate::app::*;
    console_error_panic_hook::set_once();
    // a second init only happens on hot reload
    _ = console_log::init_with_level(log::Level::Info);
    leptos::mount::hydrate_body(App);
}
