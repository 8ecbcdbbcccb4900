//! # members-client
//!
//! Leptos + WASM frontend for the membership-management application.
//!
//! This crate contains the navigation route table and tree, the themed icon
//! set, the change-password DTOs and password rules, the REST client, and the
//! pages that tie them together. With the `ssr` feature the `members-client`
//! binary serves the app; with `hydrate` it runs in the browser.

pub mod app;
pub mod components;
#[cfg(any(test, feature = "ssr"))]
pub mod config;
pub mod icons;
pub mod nav;
pub mod net;
pub mod pages;
pub mod password;
pub mod state;

/// WASM entry point: install console logging and hydrate the SSR markup.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Info);
    log::info!("hydrating members client");
    leptos::mount::hydrate_body(app::App);
}
