//! Fetched product/user collections and single-record lookups.
//!
//! DESIGN
//! ======
//! No client-side cache: every page mount or refresh re-fetches and replaces
//! the whole collection. The last error is kept next to the (now empty)
//! items so pages can render it inline.

#[cfg(test)]
#[path = "catalog_test.rs"]
mod catalog_test;

use crate::net::api::ApiError;
use crate::net::types::{Product, User};

/// A fetched list plus its load phase.
#[derive(Clone, Debug, PartialEq)]
pub struct Collection<T> {
    pub items: Vec<T>,
    pub loading: bool,
    pub error: Option<String>,
}

impl<T> Default for Collection<T> {
    fn default() -> Self {
        Self { items: Vec::new(), loading: false, error: None }
    }
}

impl<T> Collection<T> {
    pub fn begin_load(&mut self) {
        self.loading = true;
        self.error = None;
    }

    pub fn finish_load(&mut self, result: Result<Vec<T>, ApiError>) {
        self.loading = false;
        match result {
            Ok(items) => {
                self.items = items;
                self.error = None;
            }
            Err(err) => {
                self.items.clear();
                self.error = Some(err.user_message());
            }
        }
    }
}

pub type ProductsState = Collection<Product>;
pub type UsersState = Collection<User>;

/// A single record fetched by id.
#[derive(Clone, Debug, PartialEq)]
pub enum Lookup<T> {
    Loading,
    Found(T),
    NotFound,
    Failed(String),
}

impl<T> Default for Lookup<T> {
    fn default() -> Self {
        Self::Loading
    }
}

impl<T> Lookup<T> {
    pub fn from_result(result: Result<T, ApiError>) -> Self {
        match result {
            Ok(value) => Self::Found(value),
            Err(ApiError::NotFound(_)) => Self::NotFound,
            Err(err) => Self::Failed(err.user_message()),
        }
    }

    pub fn found(&self) -> Option<&T> {
        match self {
            Self::Found(value) => Some(value),
            _ => None,
        }
    }
}
