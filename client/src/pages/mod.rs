//! Page modules for route-level screens.
//!
//! ARCHITECTURE
//! ============
//! Each page owns route-scoped data loading and delegates rendering details
//! to `components`.

pub mod dashboard;
pub mod product_create;
pub mod product_edit;
pub mod products;
pub mod users;
