//! Router assembly.
//!
//! SYSTEM CONTEXT
//! ==============
//! This module binds the `/api/*` catalog relay and stitches it with Leptos
//! SSR rendering under a single Axum router. The browser build of the UI
//! only ever talks to this host; the catalog API URL never reaches it.

pub mod products;
pub mod users;

use std::path::PathBuf;

use axum::http::StatusCode;
use axum::response::{IntoResponse, Json, Response};
use axum::routing::get;
use axum::Router;
use leptos::prelude::*;
use leptos_axum::{LeptosRoutes, generate_route_list};
use tower_http::compression::CompressionLayer;
use tower_http::cors::{Any, CorsLayer};
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;

use crate::services::catalog::{CatalogError, Relayed, upstream_message};
use crate::state::AppState;

/// Catalog relay routes plus health check.
pub fn api_routes(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/api/products", get(products::list_products).post(products::create_product))
        .route(
            "/api/products/{id}",
            get(products::get_product)
                .put(products::update_product)
                .delete(products::delete_product),
        )
        .route("/api/users", get(users::list_users))
        .route("/api/users/{id}", get(users::get_user))
        .route("/healthz", get(healthz))
        .layer(cors)
        .with_state(state)
}

/// Full application: API routes + Leptos SSR + static `/pkg` assets.
///
/// # Errors
///
/// Returns an error if the Leptos configuration cannot be loaded (missing or
/// malformed `[package.metadata.leptos]` section).
pub fn app(state: AppState) -> Result<Router, String> {
    let conf = get_configuration(None).map_err(|e| format!("leptos configuration: {e}"))?;
    let leptos_options = conf.leptos_options;
    let routes = generate_route_list(client::app::App);

    let leptos_router = Router::new()
        .leptos_routes(&leptos_options, routes, {
            let opts = leptos_options.clone();
            move || client::app::shell(opts.clone())
        })
        .with_state(leptos_options.clone());

    let site_root_path = PathBuf::from(leptos_options.site_root.as_ref());

    Ok(api_routes(state)
        .merge(leptos_router)
        .nest_service("/pkg", ServeDir::new(site_root_path.join("pkg")))
        .layer(CompressionLayer::new())
        .layer(TraceLayer::new_for_http()))
}

async fn healthz() -> StatusCode {
    StatusCode::OK
}

// =============================================================================
// RESPONSES
// =============================================================================

/// Forward a successful upstream answer with its status and JSON body.
pub fn relayed_response(relayed: Relayed) -> Response {
    let status = StatusCode::from_u16(relayed.status).unwrap_or(StatusCode::OK);
    match relayed.body {
        Some(body) => (status, Json(body)).into_response(),
        None => status.into_response(),
    }
}

/// Map a catalog failure to a `{ "message": ... }` response.
///
/// Upstream 4xx statuses pass through with the upstream message; upstream
/// 5xx, transport, and parse failures become `502 Bad Gateway`. Ids that
/// would not stay inside their collection are `400 Bad Request` and never
/// reach the catalog.
pub fn catalog_error_response(err: CatalogError) -> Response {
    let (status, message) = match &err {
        CatalogError::Upstream { status, body } => {
            let passthrough = StatusCode::from_u16(*status)
                .ok()
                .filter(StatusCode::is_client_error)
                .unwrap_or(StatusCode::BAD_GATEWAY);
            let message = upstream_message(body).unwrap_or_else(|| default_message(passthrough));
            (passthrough, message)
        }
        CatalogError::InvalidId(_) => (StatusCode::BAD_REQUEST, err.to_string()),
        CatalogError::Request(_) | CatalogError::Parse(_) => (StatusCode::BAD_GATEWAY, err.to_string()),
        CatalogError::BaseUrl(_) | CatalogError::HttpClientBuild(_) => {
            (StatusCode::INTERNAL_SERVER_ERROR, err.to_string())
        }
    };

    if status.is_server_error() {
        tracing::warn!(error = %err, %status, "catalog relay failed");
    } else {
        tracing::debug!(error = %err, %status, "catalog rejected request");
    }

    (status, Json(serde_json::json!({ "message": message }))).into_response()
}

fn default_message(status: StatusCode) -> String {
    status.canonical_reason().map_or_else(|| format!("status {}", status.as_u16()), str::to_owned)
}

#[cfg(test)]
#[path = "mod_test.rs"]
mod tests;
