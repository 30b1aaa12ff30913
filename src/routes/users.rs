//! User relay routes under `/api/users`. Read-only.

use axum::extract::{Path, State};
use axum::response::Response;

use super::{catalog_error_response, relayed_response};
use crate::state::AppState;

/// `GET /api/users`
pub async fn list_users(State(state): State<AppState>) -> Response {
    match state.catalog.list_users().await {
        Ok(relayed) => relayed_response(relayed),
        Err(e) => catalog_error_response(e),
    }
}

/// `GET /api/users/{id}`
pub async fn get_user(State(state): State<AppState>, Path(id): Path<String>) -> Response {
    match state.catalog.get_user(&id).await {
        Ok(relayed) => relayed_response(relayed),
        Err(e) => catalog_error_response(e),
    }
}
