//! # chaptered
//!
//! Leptos + WASM frontend for the Chaptered book and movie review service.
//! A thin presentation layer over the Chaptered REST backend: browsing
//! books and movies, reading and submitting reviews, and managing a user
//! account (register/login/profile/logout).
//!
//! This crate contains pages, components, application state, wire types,
//! and the REST API client with its bearer-token refresh handling. All
//! real data and business rules live on the backend.

pub mod app;
pub mod components;
pub mod net;
pub mod pages;
pub mod state;
pub mod util;

/// WASM entry point: hydrate the server-rendered document in the browser.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Info);
    leptos::mount::hydrate_body(crate::app::App);
}
