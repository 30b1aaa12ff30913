//! Service layer.
//!
//! SYSTEM CONTEXT
//! ==============
//! Route handlers stay thin; outbound calls to the catalog API live here so
//! transport and status handling are shared by every relay route.

pub mod catalog;
