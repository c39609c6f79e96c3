//! # skillnest-client
//!
//! Leptos frontend for the SkillNest course platform. Compiled natively for
//! SSR (`ssr`), to WASM for the browser (`hydrate`), and natively without
//! features for unit tests.
//!
//! The REST pipeline lives in `net`, the auth-session lifecycle in
//! `state::auth`, and route guarding in `util::auth`.

pub mod app;
pub mod components;
pub mod net;
pub mod pages;
pub mod state;
pub mod util;

#[cfg(test)]
mod test_support;

/// WASM entry point: install logging and hydrate the server-rendered body.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    if console_log::init_with_level(log::Level::Debug).is_err() {
        leptos::logging::warn!("console logger already installed");
    }
    leptos::mount::hydrate_body(app::App);
}
