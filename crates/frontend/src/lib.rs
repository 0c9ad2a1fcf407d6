pub mod app;
pub mod layout;
pub mod shared;

use contracts::navigation::{validate_catalog, PRODUCT_CATEGORIES};
use wasm_bindgen::prelude::wasm_bindgen;

fn log_level() -> log::Level {
    if cfg!(debug_assertions) {
        log::Level::Debug
    } else {
        log::Level::Info
    }
}

#[wasm_bindgen]
pub fn hydrate() {
    // initializes logging using the `log` crate
    _ = console_log::init_with_level(log_level());
    console_error_panic_hook::set_once();

    if let Err(err) = validate_catalog(PRODUCT_CATEGORIES) {
        log::error!("product catalog: {err}");
    }

    leptos::mount::mount_to_body(app::App);
}

#[wasm_bindgen(start)]
pub fn start() {
    hydrate();
}
