//! Page modules for route-level screens.
//!
//! ARCHITECTURE
//! ============
//! Each page owns route-scoped orchestration and delegates rendering details
//! to `components` and submission rules to `forms`.

pub mod bulk_order;
pub mod cart;
pub mod checkout;
pub mod company_dashboard;
pub mod company_register;
pub mod home;
pub mod product;
pub mod wishlist;
