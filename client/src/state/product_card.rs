//! Delete flow for a single product card.
//!
//! The card owns a `deleting` flag; [`run_delete`] drives it through
//! confirm → busy → idle and reports what the card should announce.

#[cfg(test)]
#[path = "product_card_test.rs"]
mod product_card_test;

use crate::net::api::{ApiError, CatalogService};
use crate::state::notifications::ToastKind;

pub const DELETE_CONFIRMATION: &str = "Are you sure you want to delete this product?";
pub const DELETE_SUCCESS_MESSAGE: &str = "Product deleted successfully!";
pub const DELETE_FAILURE_MESSAGE: &str = "Failed to delete product";

/// What happened to one delete attempt.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum DeleteOutcome {
    /// The user dismissed the confirmation; nothing was sent.
    Declined,
    Deleted,
    Failed(ApiError),
}

impl DeleteOutcome {
    /// Toast to show, if any.
    pub fn toast(&self) -> Option<(ToastKind, &'static str)> {
        match self {
            Self::Declined => None,
            Self::Deleted => Some((ToastKind::Success, DELETE_SUCCESS_MESSAGE)),
            Self::Failed(_) => Some((ToastKind::Error, DELETE_FAILURE_MESSAGE)),
        }
    }

    /// Only a successful delete asks the hosting page to re-fetch.
    pub fn should_refresh(&self) -> bool {
        matches!(self, Self::Deleted)
    }
}

pub fn delete_button_label(deleting: bool) -> &'static str {
    if deleting { "Deleting..." } else { "Delete" }
}

/// Confirm, then delete through `service`.
///
/// `set_deleting(true)` is published before the request and
/// `set_deleting(false)` after it on every path. A declined confirmation
/// publishes nothing.
pub async fn run_delete<S, C, F>(service: &S, product_id: &str, confirm: C, mut set_deleting: F) -> DeleteOutcome
where
    S: CatalogService,
    C: FnOnce() -> bool,
    F: FnMut(bool),
{
    if !confirm() {
        return DeleteOutcome::Declined;
    }

    set_deleting(true);
    let result = service.delete_product(product_id).await;
    set_deleting(false);

    match result {
        Ok(()) => DeleteOutcome::Deleted,
        Err(err) => DeleteOutcome::Failed(err),
    }
}
