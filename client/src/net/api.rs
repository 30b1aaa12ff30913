//! REST service client for the catalog API.
//!
//! Client-side (hydrate): real HTTP calls via `gloo-net` against the host's
//! same-origin `/api/*` relay. Server-side (SSR): every call resolves to
//! [`ApiError::Unavailable`]; pages load their data after hydration.
//!
//! ERROR HANDLING
//! ==============
//! Non-2xx responses are classified by status into [`ApiError`] variants,
//! carrying the server's `message` when the body has one. Callers convert
//! errors into inline text or toasts; nothing here retries.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use super::types::{Product, ProductPayload, User};

/// Localized fallback shown when an error carries no usable message.
pub const GENERIC_ERROR_MESSAGE: &str = "Bir hata oluştu. Lütfen tekrar deneyin.";

#[cfg(any(test, feature = "hydrate"))]
const API_BASE: &str = "/api";

/// Shown when an id cannot address a single resource.
pub const INVALID_ID_MESSAGE: &str = "Geçersiz kimlik.";

/// Characters left as-is in an id path segment; everything else is escaped.
#[cfg(any(test, feature = "hydrate"))]
const ID_SEGMENT: &percent_encoding::AsciiSet =
    &percent_encoding::NON_ALPHANUMERIC.remove(b'-').remove(b'_').remove(b'.').remove(b'~');

// =============================================================================
// ERROR
// =============================================================================

/// Failures surfaced by the service client.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ApiError {
    /// The request never produced a response (offline, DNS, CORS, ...).
    #[error("network error: {0}")]
    Network(String),

    /// The API rejected the payload.
    #[error("{message}")]
    Validation { status: u16, message: String },

    /// The addressed product or user does not exist.
    #[error("{0}")]
    NotFound(String),

    /// Any other non-success status.
    #[error("{message}")]
    Status { status: u16, message: String },

    /// The response body did not match the expected shape.
    #[error("invalid response: {0}")]
    Decode(String),

    /// Called during server-side rendering.
    #[error("not available on server")]
    Unavailable,
}

impl ApiError {
    /// Classify a non-success response by status code.
    pub fn from_response(status: u16, body: &str) -> Self {
        let message = response_message(body);
        match status {
            404 => Self::NotFound(message.unwrap_or_else(|| "not found".to_owned())),
            400 | 409 | 422 => Self::Validation {
                status,
                message: message.unwrap_or_else(|| format!("validation failed: {status}")),
            },
            _ => Self::Status { status, message: message.unwrap_or_else(|| request_failed_message(status)) },
        }
    }

    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound(_))
    }

    /// Message suitable for display.
    ///
    /// Transport, decode and SSR failures carry technical detail meant for
    /// the log, so they show [`GENERIC_ERROR_MESSAGE`], as do blank messages.
    pub fn user_message(&self) -> String {
        match self {
            Self::Network(_) | Self::Decode(_) | Self::Unavailable => GENERIC_ERROR_MESSAGE.to_owned(),
            Self::Validation { message, .. } | Self::NotFound(message) | Self::Status { message, .. } => {
                if message.trim().is_empty() { GENERIC_ERROR_MESSAGE.to_owned() } else { message.clone() }
            }
        }
    }
}

/// Extract a human-readable message from an error body.
///
/// Prefers a JSON `message` or `error` string, then the raw text.
fn response_message(body: &str) -> Option<String> {
    let trimmed = body.trim();
    if trimmed.is_empty() {
        return None;
    }
    if let Ok(serde_json::Value::Object(map)) = serde_json::from_str::<serde_json::Value>(trimmed) {
        return ["message", "error"]
            .iter()
            .find_map(|key| map.get(*key).and_then(serde_json::Value::as_str).map(str::trim).filter(|msg| !msg.is_empty()))
            .map(str::to_owned);
    }
    Some(trimmed.to_owned())
}

fn request_failed_message(status: u16) -> String {
    format!("request failed: {status}")
}

// =============================================================================
// ENDPOINTS
// =============================================================================

#[cfg(any(test, feature = "hydrate"))]
fn products_endpoint() -> String {
    format!("{API_BASE}/products")
}

#[cfg(any(test, feature = "hydrate"))]
fn product_endpoint(id: &str) -> Result<String, ApiError> {
    Ok(format!("{API_BASE}/products/{}", id_segment(id)?))
}

#[cfg(any(test, feature = "hydrate"))]
fn users_endpoint() -> String {
    format!("{API_BASE}/users")
}

#[cfg(any(test, feature = "hydrate"))]
fn user_endpoint(id: &str) -> Result<String, ApiError> {
    Ok(format!("{API_BASE}/users/{}", id_segment(id)?))
}

/// Percent-encode `id` as exactly one path segment.
///
/// Browsers collapse `.` and `..` segments (escaped or not) before sending,
/// so those and the empty id are rejected instead.
#[cfg(any(test, feature = "hydrate"))]
fn id_segment(id: &str) -> Result<String, ApiError> {
    if id.is_empty() || id == "." || id == ".." {
        return Err(ApiError::Validation { status: 400, message: INVALID_ID_MESSAGE.to_owned() });
    }
    Ok(percent_encoding::utf8_percent_encode(id, ID_SEGMENT).to_string())
}

#[cfg(any(test, feature = "hydrate"))]
fn is_success(status: u16) -> bool {
    (200..300).contains(&status)
}

/// Write responses may be a full product or a bare acknowledgement.
///
/// Only a JSON object carrying an `id` is treated as a product; anything
/// else is an acknowledgement.
#[cfg(any(test, feature = "hydrate"))]
fn decode_written_product(body: &str) -> Result<Option<Product>, serde_json::Error> {
    match serde_json::from_str::<serde_json::Value>(body) {
        Ok(value) if value.get("id").is_some() => serde_json::from_value(value).map(Some),
        _ => Ok(None),
    }
}

// =============================================================================
// OPERATIONS
// =============================================================================

/// Fetch every product via `GET /api/products`.
///
/// # Errors
///
/// Returns an error on transport failure, a non-success status, or an
/// undecodable body.
pub async fn fetch_products() -> Result<Vec<Product>, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let resp = gloo_net::http::Request::get(&products_endpoint()).send().await.map_err(network)?;
        read_json(resp).await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        Err(ApiError::Unavailable)
    }
}

/// Fetch one product via `GET /api/products/{id}`.
///
/// # Errors
///
/// Returns [`ApiError::NotFound`] for unknown ids, otherwise as [`fetch_products`].
#[cfg_attr(not(feature = "hydrate"), allow(unused_variables))]
pub async fn fetch_product(id: &str) -> Result<Product, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let resp = gloo_net::http::Request::get(&product_endpoint(id)?).send().await.map_err(network)?;
        read_json(resp).await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        Err(ApiError::Unavailable)
    }
}

/// Fetch every user via `GET /api/users`.
///
/// # Errors
///
/// Returns an error on transport failure, a non-success status, or an
/// undecodable body.
pub async fn fetch_users() -> Result<Vec<User>, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let resp = gloo_net::http::Request::get(&users_endpoint()).send().await.map_err(network)?;
        read_json(resp).await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        Err(ApiError::Unavailable)
    }
}

/// Fetch one user via `GET /api/users/{id}`.
///
/// # Errors
///
/// Returns [`ApiError::NotFound`] for unknown ids, otherwise as [`fetch_users`].
#[cfg_attr(not(feature = "hydrate"), allow(unused_variables))]
pub async fn fetch_user(id: &str) -> Result<User, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let resp = gloo_net::http::Request::get(&user_endpoint(id)?).send().await.map_err(network)?;
        read_json(resp).await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        Err(ApiError::Unavailable)
    }
}

/// Create a product via `POST /api/products`.
///
/// Returns the created product when the API echoes it back.
///
/// # Errors
///
/// Returns [`ApiError::Validation`] when the API rejects the payload.
#[cfg_attr(not(feature = "hydrate"), allow(unused_variables))]
pub async fn create_product(payload: &ProductPayload) -> Result<Option<Product>, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let resp = gloo_net::http::Request::post(&products_endpoint())
            .json(payload)
            .map_err(network)?
            .send()
            .await
            .map_err(network)?;
        read_written(resp).await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        Err(ApiError::Unavailable)
    }
}

/// Update a product via `PUT /api/products/{id}`.
///
/// # Errors
///
/// Returns [`ApiError::Validation`] or [`ApiError::NotFound`] when the API
/// rejects the update.
#[cfg_attr(not(feature = "hydrate"), allow(unused_variables))]
pub async fn update_product(id: &str, payload: &ProductPayload) -> Result<Option<Product>, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let resp = gloo_net::http::Request::put(&product_endpoint(id)?)
            .json(payload)
            .map_err(network)?
            .send()
            .await
            .map_err(network)?;
        read_written(resp).await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        Err(ApiError::Unavailable)
    }
}

/// Delete a product via `DELETE /api/products/{id}`.
///
/// # Errors
///
/// Returns [`ApiError::NotFound`] for unknown ids.
#[cfg_attr(not(feature = "hydrate"), allow(unused_variables))]
pub async fn delete_product(id: &str) -> Result<(), ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let resp = gloo_net::http::Request::delete(&product_endpoint(id)?).send().await.map_err(network)?;
        let status = resp.status();
        if is_success(status) {
            return Ok(());
        }
        let body = resp.text().await.map_err(network)?;
        Err(ApiError::from_response(status, &body))
    }
    #[cfg(not(feature = "hydrate"))]
    {
        Err(ApiError::Unavailable)
    }
}

#[cfg(feature = "hydrate")]
fn network(err: gloo_net::Error) -> ApiError {
    ApiError::Network(err.to_string())
}

#[cfg(feature = "hydrate")]
async fn read_json<T: serde::de::DeserializeOwned>(resp: gloo_net::http::Response) -> Result<T, ApiError> {
    let status = resp.status();
    let body = resp.text().await.map_err(network)?;
    if !is_success(status) {
        return Err(ApiError::from_response(status, &body));
    }
    serde_json::from_str(&body).map_err(|e| ApiError::Decode(e.to_string()))
}

#[cfg(feature = "hydrate")]
async fn read_written(resp: gloo_net::http::Response) -> Result<Option<Product>, ApiError> {
    let status = resp.status();
    let body = resp.text().await.map_err(network)?;
    if !is_success(status) {
        return Err(ApiError::from_response(status, &body));
    }
    match decode_written_product(&body) {
        Ok(product) => Ok(product),
        Err(err) => {
            // The write already succeeded; only the echo is unusable.
            log::warn!("written product echo not decodable: {err}");
            Ok(None)
        }
    }
}

// =============================================================================
// SERVICE SEAM
// =============================================================================

/// Write operations used by the product form and product card.
///
/// [`HttpCatalog`] is the production implementation; flows take the trait
/// so they can run against a fake.
#[allow(async_fn_in_trait)]
pub trait CatalogService {
    async fn create_product(&self, payload: &ProductPayload) -> Result<Option<Product>, ApiError>;
    async fn update_product(&self, id: &str, payload: &ProductPayload) -> Result<Option<Product>, ApiError>;
    async fn delete_product(&self, id: &str) -> Result<(), ApiError>;
}

/// Service client backed by the free functions in this module.
#[derive(Clone, Copy, Debug, Default)]
pub struct HttpCatalog;

impl CatalogService for HttpCatalog {
    async fn create_product(&self, payload: &ProductPayload) -> Result<Option<Product>, ApiError> {
        create_product(payload).await
    }

    async fn update_product(&self, id: &str, payload: &ProductPayload) -> Result<Option<Product>, ApiError> {
        update_product(id, payload).await
    }

    async fn delete_product(&self, id: &str) -> Result<(), ApiError> {
        delete_product(id).await
    }
}
