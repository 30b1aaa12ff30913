//! Recording in-memory [`CatalogService`] for flow tests.

use std::cell::RefCell;

use super::api::{ApiError, CatalogService};
use super::types::{Product, ProductPayload};

/// A call observed by [`FakeCatalog`].
#[derive(Clone, Debug, PartialEq)]
pub enum Call {
    Create(ProductPayload),
    Update(String, ProductPayload),
    Delete(String),
}

/// Records every call and answers with a preset failure, if any.
#[derive(Default)]
pub struct FakeCatalog {
    pub calls: RefCell<Vec<Call>>,
    pub failure: Option<ApiError>,
}

impl FakeCatalog {
    pub fn failing(err: ApiError) -> Self {
        Self { calls: RefCell::new(Vec::new()), failure: Some(err) }
    }

    pub fn calls(&self) -> Vec<Call> {
        self.calls.borrow().clone()
    }

    fn answer<T>(&self, value: T) -> Result<T, ApiError> {
        match &self.failure {
            Some(err) => Err(err.clone()),
            None => Ok(value),
        }
    }
}

impl CatalogService for FakeCatalog {
    async fn create_product(&self, payload: &ProductPayload) -> Result<Option<Product>, ApiError> {
        self.calls.borrow_mut().push(Call::Create(payload.clone()));
        self.answer(None)
    }

    async fn update_product(&self, id: &str, payload: &ProductPayload) -> Result<Option<Product>, ApiError> {
        self.calls.borrow_mut().push(Call::Update(id.to_owned(), payload.clone()));
        self.answer(None)
    }

    async fn delete_product(&self, id: &str) -> Result<(), ApiError> {
        self.calls.borrow_mut().push(Call::Delete(id.to_owned()));
        self.answer(())
    }
}
