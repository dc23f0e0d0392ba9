//! # warehouse-client
//!
//! Leptos + WASM frontend for the warehouse management dashboard.
//!
//! This crate contains the session store and route guard, the translation
//! catalog, and the pages and components built on them. The `server` crate
//! renders it with SSR; the `hydrate` feature builds the browser bundle.

pub mod app;
pub mod components;
pub mod i18n;
pub mod pages;
pub mod state;
pub mod util;

/// Browser entry point: install logging and hydrate the SSR markup.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Debug);
    leptos::mount::hydrate_body(app::App);
}
