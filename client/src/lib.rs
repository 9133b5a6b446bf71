//! # client
//!
//! WebAssembly entry point for the portfolio page. Attaches the behaviors
//! from the `behavior` crate to the static markup: it reads element geometry,
//! feeds it to the pure functions there, and writes the results back to the
//! DOM.
//!
//! Browser bindings are compiled only with the `csr` feature. Without it the
//! crate builds natively with inert storage and relay stubs so its tests run
//! under `cargo test`.

pub mod dom;
#[cfg(feature = "csr")]
pub mod page;
pub mod relay;
pub mod site_config;
pub mod status;
pub mod storage;

/// Module start hook: install panic and log routing, then wire the page.
#[cfg(feature = "csr")]
#[wasm_bindgen::prelude::wasm_bindgen(start)]
pub fn start() {
    console_error_panic_hook::set_once();
    let level = if cfg!(debug_assertions) { log::Level::Debug } else { log::Level::Info };
    if let Err(err) = console_log::init_with_level(level) {
        web_sys::console::warn_1(&format!("console logger unavailable: {err}").into());
    }
    if let Err(err) = page::boot_when_ready() {
        log::error!("page behaviors disabled: {err}");
    }
}
