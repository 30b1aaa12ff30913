//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components render catalog data handed down by pages and report mutations
//! back through callbacks, navigation, or the shared toast context.

pub mod category_container;
pub mod doughnut_chart;
pub mod navbar;
pub mod product_card;
pub mod product_form;
pub mod toasts;
pub mod user_modal;
