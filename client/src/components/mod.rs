//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components render storefront chrome and product/form building blocks while
//! reading/writing shared stores from Leptos context providers.

pub mod error_banner;
pub mod footer;
pub mod form_field;
pub mod navbar;
pub mod order_confirmation;
pub mod product_card;
