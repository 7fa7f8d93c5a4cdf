//! # storefront
//!
//! Leptos + WASM storefront for a computer hardware retailer: catalog,
//! cart, wishlist, enterprise checkout, bulk orders, and company accounts.
//!
//! Cart, wishlist, company selection, and theme live in `localStorage`
//! through `state::store::Persisted`. Orders and companies are posted to
//! a remote backend through `net::api`.

pub mod app;
pub mod components;
pub mod forms;
pub mod net;
pub mod pages;
pub mod state;
pub mod util;

/// Browser entry point: hydrate the server-rendered body.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Info);
    leptos::mount::hydrate_body(app::App);
}
