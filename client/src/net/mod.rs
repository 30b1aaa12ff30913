//! Networking modules for the catalog API.
//!
//! SYSTEM CONTEXT
//! ==============
//! `api` issues the REST calls and classifies failures; `types` defines the
//! JSON shapes shared with the host relay.

pub mod api;
pub mod types;

#[cfg(test)]
pub(crate) mod fake_catalog;
