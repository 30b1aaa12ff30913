//! Product relay routes under `/api/products`.

use axum::Json;
use axum::extract::{Path, State};
use axum::response::Response;
use serde_json::Value;

use super::{catalog_error_response, relayed_response};
use crate::state::AppState;

/// `GET /api/products`
pub async fn list_products(State(state): State<AppState>) -> Response {
    match state.catalog.list_products().await {
        Ok(relayed) => relayed_response(relayed),
        Err(e) => catalog_error_response(e),
    }
}

/// `GET /api/products/{id}`
pub async fn get_product(State(state): State<AppState>, Path(id): Path<String>) -> Response {
    match state.catalog.get_product(&id).await {
        Ok(relayed) => relayed_response(relayed),
        Err(e) => catalog_error_response(e),
    }
}

/// `POST /api/products`
pub async fn create_product(State(state): State<AppState>, Json(payload): Json<Value>) -> Response {
    match state.catalog.create_product(&payload).await {
        Ok(relayed) => {
            tracing::info!(status = relayed.status, "product created");
            relayed_response(relayed)
        }
        Err(e) => catalog_error_response(e),
    }
}

/// `PUT /api/products/{id}`
pub async fn update_product(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(payload): Json<Value>,
) -> Response {
    match state.catalog.update_product(&id, &payload).await {
        Ok(relayed) => {
            tracing::info!(%id, "product updated");
            relayed_response(relayed)
        }
        Err(e) => catalog_error_response(e),
    }
}

/// `DELETE /api/products/{id}`
pub async fn delete_product(State(state): State<AppState>, Path(id): Path<String>) -> Response {
    match state.catalog.delete_product(&id).await {
        Ok(relayed) => {
            tracing::info!(%id, "product deleted");
            relayed_response(relayed)
        }
        Err(e) => catalog_error_response(e),
    }
}
