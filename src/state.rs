//! Shared application state.
//!
//! DESIGN
//! ======
//! `AppState` is injected into Axum handlers via the `State` extractor. The
//! host keeps no data of its own; it only holds the pooled catalog client.

use std::sync::Arc;

use crate::services::catalog::CatalogClient;

#[derive(Clone)]
pub struct AppState {
    pub catalog: Arc<CatalogClient>,
}

impl AppState {
    #[must_use]
    pub fn new(catalog: CatalogClient) -> Self {
        Self { catalog: Arc::new(catalog) }
    }
}
