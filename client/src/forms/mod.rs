//! Form models, validation, and submission flows.
//!
//! ARCHITECTURE
//! ============
//! Pages own the input signals and rendering; everything that decides whether
//! a submission may proceed and what gets sent lives here, free of Leptos.

pub mod bulk_order;
pub mod checkout;
pub mod registration;
pub mod submit;
pub mod validation;
