//! Shared client-side state modules.
//!
//! DESIGN
//! ======
//! State is split by domain (`cart`, `wishlist`, `company`, etc.) so
//! components depend on small focused models. Anything mirrored to
//! `localStorage` goes through `store::Persisted`.

pub mod cart;
pub mod catalog;
pub mod company;
pub mod store;
pub mod ui;
pub mod wishlist;
