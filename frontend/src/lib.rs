//! Browser entry point for the timeline page.

use app::App;
use wasm_bindgen::prelude::*;

/// Log level for the browser console.
fn console_level() -> log::Level {
    cfg_if::cfg_if! {
        if #[cfg(debug_assertions)] {
            log::Level::Debug
        } else {
            log::Level::Warn
        }
    }
}

/// Route `log` records to the browser console.
fn install_console_logger() -> Result<(), log::SetLoggerError> {
    console_log::init_with_level(console_level())
}

/// Mount the app once the WASM module is loaded.
#[wasm_bindgen(start)]
pub fn main() {
    console_error_panic_hook::set_once();
    if let Err(err) = install_console_logger() {
        // records still reach whichever logger got installed first
        log::warn!("timeline: console logger not installed: {err}");
    }

    log::info!("timeline: mounting app");
    leptos::mount::mount_to_body(App);
}
