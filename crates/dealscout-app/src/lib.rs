//! DealScout web client.
//!
//! A Leptos application that lets a user type a free-text query and browse
//! matching products aggregated from multiple e-commerce marketplaces.
//! All behavioral rules live in `dealscout-core`; this crate wires them to
//! the DOM:
//!
//! - [`components::SearchView`] owns the search session and the request
//!   lifecycle
//! - [`components::ProductGrid`] renders tiles/skeletons from the session
//!   state
//! - [`api::SearchClient`] talks to the remote search service

pub mod api;
pub mod app;
pub mod components;

#[cfg(target_arch = "wasm32")]
#[wasm_bindgen::prelude::wasm_bindgen(start)]
pub fn start() {
    use app::App;

    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Debug);
    leptos::mount::mount_to_body(App);
}
