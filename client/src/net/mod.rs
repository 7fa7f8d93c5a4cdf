//! Networking modules for the storefront backend.
//!
//! SYSTEM CONTEXT
//! ==============
//! `api` issues REST calls, `config` resolves the backend base URL, `error`
//! normalizes failure bodies, and `types` defines the request/response schema.

pub mod api;
pub mod config;
pub mod error;
pub mod types;
