//! # client
//!
//! Leptos + WASM frontend for the portfolio site.
//!
//! This crate contains the page, its section components, the presentation
//! controllers (theme, role rotation, reveal sequencing, navigation), and
//! the browser capabilities those controllers run against. The server crate
//! renders `app::shell` and the browser hydrates it through [`hydrate`].

pub mod app;
pub mod components;
pub mod content;
pub mod pages;
pub mod state;
pub mod util;

/// WASM entry point: install logging and hydrate the server-rendered body.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    if let Err(err) = console_log::init_with_level(log::Level::Info) {
        web_sys::console::warn_1(&format!("console logger not installed: {err}").into());
    }
    leptos::mount::hydrate_body(app::App);
}
