//! # chesscircle
//!
//! Leptos + WASM client for a chess community discovery app: meetups,
//! clubs, venues, tournaments, leagues and sponsors.
//!
//! This crate contains pages, components, client-side view state, the route
//! table and the mock catalog every page renders from. There is no backend;
//! verification, scanning and invite delivery are simulated with timers.

pub mod app;
pub mod components;
pub mod config;
pub mod mock;
pub mod pages;
pub mod routes;
pub mod state;
pub mod util;

/// Browser entry point: installs console logging and mounts the app.
#[cfg(feature = "csr")]
#[wasm_bindgen::prelude::wasm_bindgen(start)]
pub fn start() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Debug);
    leptos::mount::mount_to_body(app::App);
}
