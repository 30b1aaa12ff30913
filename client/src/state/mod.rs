//! Client-side state models.
//!
//! DESIGN
//! ======
//! State is split per component (`product_form`, `product_card`,
//! `categories`, ...) as plain structs with explicit transitions. Components
//! hold them in `RwSignal`s; the transitions stay testable without a DOM.

pub mod catalog;
pub mod categories;
pub mod notifications;
pub mod product_card;
pub mod product_form;
pub mod users;
