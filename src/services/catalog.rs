//! Catalog API client used by the `/api/*` relay.
//!
//! DESIGN
//! ======
//! Bodies are relayed as opaque JSON: the host checks that a success body is
//! JSON and otherwise leaves decoding to the UI crate. Non-success statuses
//! come back as [`CatalogError::Upstream`] with the raw body so the route
//! layer can forward the upstream message.

use std::time::Duration;

use reqwest::{Method, Url};
use serde_json::Value;

use crate::config::CatalogTimeouts;

/// Catalog call failures.
#[derive(Debug, thiserror::Error)]
pub enum CatalogError {
    /// The configured base URL cannot carry path segments.
    #[error("invalid catalog base URL {0:?}")]
    BaseUrl(String),

    /// A route id that cannot be sent as a single path segment.
    #[error("invalid id {0:?}")]
    InvalidId(String),

    /// The request never produced a response.
    #[error("catalog request failed: {0}")]
    Request(String),

    /// The catalog answered with a non-success status.
    #[error("catalog responded with status {status}")]
    Upstream { status: u16, body: String },

    /// A success body was not valid JSON.
    #[error("catalog response parse failed: {0}")]
    Parse(String),

    /// The underlying HTTP client could not be constructed.
    #[error("HTTP client build failed: {0}")]
    HttpClientBuild(String),
}

/// A successful upstream answer.
#[derive(Debug, Clone, PartialEq)]
pub struct Relayed {
    pub status: u16,
    /// `None` for an empty body (e.g. `204 No Content`).
    pub body: Option<Value>,
}

// =============================================================================
// CLIENT
// =============================================================================

pub struct CatalogClient {
    http: reqwest::Client,
    base: Url,
    base_url: String,
}

impl CatalogClient {
    /// # Errors
    ///
    /// Returns [`CatalogError::BaseUrl`] when `base_url` is not an absolute
    /// http(s) URL, or [`CatalogError::HttpClientBuild`] if the TLS backend
    /// cannot be initialized.
    pub fn new(base_url: &str, timeouts: CatalogTimeouts) -> Result<Self, CatalogError> {
        let base_url = base_url.trim().trim_end_matches('/').to_owned();
        let base = Url::parse(&base_url).map_err(|_| CatalogError::BaseUrl(base_url.clone()))?;
        if base.cannot_be_a_base() || !matches!(base.scheme(), "http" | "https") {
            return Err(CatalogError::BaseUrl(base_url));
        }

        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(timeouts.request_secs))
            .connect_timeout(Duration::from_secs(timeouts.connect_secs))
            .build()
            .map_err(|e| CatalogError::HttpClientBuild(e.to_string()))?;
        Ok(Self { http, base, base_url })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub async fn list_products(&self) -> Result<Relayed, CatalogError> {
        self.send(Method::GET, self.resource_url("products", None)?, None).await
    }

    pub async fn get_product(&self, id: &str) -> Result<Relayed, CatalogError> {
        self.send(Method::GET, self.resource_url("products", Some(id))?, None).await
    }

    pub async fn create_product(&self, payload: &Value) -> Result<Relayed, CatalogError> {
        self.send(Method::POST, self.resource_url("products", None)?, Some(payload)).await
    }

    pub async fn update_product(&self, id: &str, payload: &Value) -> Result<Relayed, CatalogError> {
        self.send(Method::PUT, self.resource_url("products", Some(id))?, Some(payload)).await
    }

    pub async fn delete_product(&self, id: &str) -> Result<Relayed, CatalogError> {
        self.send(Method::DELETE, self.resource_url("products", Some(id))?, None).await
    }

    pub async fn list_users(&self) -> Result<Relayed, CatalogError> {
        self.send(Method::GET, self.resource_url("users", None)?, None).await
    }

    pub async fn get_user(&self, id: &str) -> Result<Relayed, CatalogError> {
        self.send(Method::GET, self.resource_url("users", Some(id))?, None).await
    }

    /// `{base}/{collection}` or `{base}/{collection}/{id}`, with `id`
    /// percent-encoded as exactly one path segment.
    ///
    /// # Errors
    ///
    /// Returns [`CatalogError::InvalidId`] for ids rejected by [`check_id`].
    pub fn resource_url(&self, collection: &str, id: Option<&str>) -> Result<Url, CatalogError> {
        let mut url = self.base.clone();
        {
            let mut segments = url.path_segments_mut().map_err(|()| CatalogError::BaseUrl(self.base_url.clone()))?;
            segments.pop_if_empty().push(collection);
            if let Some(id) = id {
                segments.push(check_id(id)?);
            }
        }
        Ok(url)
    }

    async fn send(&self, method: Method, url: Url, payload: Option<&Value>) -> Result<Relayed, CatalogError> {
        let mut request = self.http.request(method.clone(), url.clone());
        if let Some(payload) = payload {
            request = request.json(payload);
        }

        let response = request.send().await.map_err(|e| CatalogError::Request(e.to_string()))?;
        let status = response.status().as_u16();
        let text = response.text().await.map_err(|e| CatalogError::Request(e.to_string()))?;

        tracing::debug!(%method, %url, status, "catalog call");

        if !(200..300).contains(&status) {
            return Err(CatalogError::Upstream { status, body: text });
        }
        Ok(Relayed { status, body: parse_body(&text)? })
    }
}

// =============================================================================
// HELPERS
// =============================================================================

/// Accept an id only if it stays a single, non-relative path segment.
///
/// Empty ids, `.` and `..`, and ids containing `/` or `\` are rejected;
/// everything else is percent-encoded by the URL builder.
///
/// # Errors
///
/// Returns [`CatalogError::InvalidId`] for rejected ids.
pub fn check_id(id: &str) -> Result<&str, CatalogError> {
    if id.is_empty() || id == "." || id == ".." || id.contains(['/', '\\']) {
        return Err(CatalogError::InvalidId(id.to_owned()));
    }
    Ok(id)
}

/// Empty or whitespace bodies are `None`; anything else must be JSON.
pub fn parse_body(text: &str) -> Result<Option<Value>, CatalogError> {
    if text.trim().is_empty() {
        return Ok(None);
    }
    serde_json::from_str(text).map(Some).map_err(|e| CatalogError::Parse(e.to_string()))
}

/// Human-readable message from an upstream error body: JSON `message` or
/// `error` string first, then the raw text.
pub fn upstream_message(body: &str) -> Option<String> {
    let trimmed = body.trim();
    if trimmed.is_empty() {
        return None;
    }
    if let Ok(Value::Object(map)) = serde_json::from_str::<Value>(trimmed) {
        return ["message", "error"]
            .iter()
            .find_map(|key| map.get(*key).and_then(Value::as_str).map(str::trim).filter(|msg| !msg.is_empty()))
            .map(str::to_owned);
    }
    Some(trimmed.to_owned())
}

#[cfg(test)]
#[path = "catalog_test.rs"]
mod tests;
