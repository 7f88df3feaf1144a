//! # client
//!
//! Leptos + WASM front-end for the poem workshop: a line-by-line poem editor
//! with model-suggested continuations, a public poem viewer, and a
//! token-gated download of recorded line preferences.
//!
//! The crate compiles twice: with `ssr` it is rendered by the `server` crate,
//! with `hydrate` it becomes the browser bundle that takes over the
//! server-rendered markup.

pub mod app;
pub mod components;
pub mod net;
pub mod pages;
pub mod state;
pub mod util;

/// WASM entry point: install browser logging and hydrate the SSR markup.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    _ = console_log::init_with_level(log::Level::Debug);
    console_error_panic_hook::set_once();

    leptos::mount::hydrate_body(app::App);
}
