//! # bandnames-client
//!
//! Leptos + WASM frontend for the BandNames realtime voting screen.
//!
//! The client mirrors a peer-owned list of bands pushed over a persistent
//! websocket event channel. It holds no authoritative data: every inbound
//! `current-bands` snapshot fully replaces the local collection, and user
//! gestures (create, rename, upvote, delete) are emitted as best-effort
//! outbound events for the peer to apply.
//!
//! This crate contains the page, components, application state, wire types,
//! and the websocket channel client.

pub mod app;
pub mod components;
pub mod net;
pub mod pages;
pub mod state;
pub mod util;

/// WASM entry point: install logging and mount the app over the SSR shell.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Debug);
    leptos::mount::hydrate_body(app::App);
}
