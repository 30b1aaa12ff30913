//! Shared DTOs for the catalog API boundary.
//!
//! DESIGN
//! ======
//! These types mirror the catalog API's JSON so the host relay and the
//! browser service client decode the same shapes. Decoding is lenient where
//! the API is loose (ids may be strings or numbers, unknown categories are
//! kept verbatim) so a single odd record never blanks a whole page.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use serde::de::Error as _;
use serde::{Deserialize, Deserializer, Serialize};

/// Partial product sent to create/update. Only non-empty keys are present.
pub type ProductPayload = serde_json::Map<String, serde_json::Value>;

// =============================================================================
// PRODUCT
// =============================================================================

/// A catalog product as returned by the API.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Product {
    /// Server-assigned identifier, normalized to a string.
    #[serde(deserialize_with = "deserialize_id")]
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub brand: String,
    pub category: Category,
    #[serde(deserialize_with = "deserialize_f64_from_number")]
    pub price: f64,
    #[serde(deserialize_with = "deserialize_i64_from_number")]
    pub stock: i64,
    #[serde(default)]
    pub status: ProductStatus,
    #[serde(default)]
    pub description: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,
}

impl Product {
    pub fn stock_status(&self) -> StockStatus {
        if self.stock > 0 { StockStatus::InStock } else { StockStatus::OutOfStock }
    }

    /// Price formatted for cards, e.g. `$12.50`.
    pub fn display_price(&self) -> String {
        format!("${:.2}", self.price)
    }

    /// Image URL when one is set and non-blank.
    pub fn image(&self) -> Option<&str> {
        self.image_url.as_deref().filter(|url| !url.trim().is_empty())
    }
}

/// Derived availability shown on product cards.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum StockStatus {
    InStock,
    OutOfStock,
}

impl StockStatus {
    pub fn label(self) -> &'static str {
        match self {
            Self::InStock => "In Stock",
            Self::OutOfStock => "Out of Stock",
        }
    }

    /// BEM modifier used by the stock badge.
    pub fn css_modifier(self) -> &'static str {
        match self {
            Self::InStock => "in-stock",
            Self::OutOfStock => "out-of-stock",
        }
    }
}

/// Product category. Labels outside the known set are preserved as `Other`.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum Category {
    Electronics,
    Clothing,
    Books,
    Home,
    Sports,
    Other(String),
}

impl Category {
    /// Categories offered by the product form, in display order.
    pub const SELECTABLE: [Category; 5] =
        [Category::Electronics, Category::Clothing, Category::Books, Category::Home, Category::Sports];

    pub fn label(&self) -> &str {
        match self {
            Self::Electronics => "Electronics",
            Self::Clothing => "Clothing",
            Self::Books => "Books",
            Self::Home => "Home",
            Self::Sports => "Sports",
            Self::Other(label) => label,
        }
    }
}

impl From<String> for Category {
    fn from(label: String) -> Self {
        match label.as_str() {
            "Electronics" => Self::Electronics,
            "Clothing" => Self::Clothing,
            "Books" => Self::Books,
            "Home" => Self::Home,
            "Sports" => Self::Sports,
            _ => Self::Other(label),
        }
    }
}

impl From<Category> for String {
    fn from(category: Category) -> Self {
        match category {
            Category::Other(label) => label,
            known => known.label().to_owned(),
        }
    }
}

/// Publication status of a product.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ProductStatus {
    #[default]
    Active,
    Inactive,
    Draft,
}

impl ProductStatus {
    pub const ALL: [ProductStatus; 3] = [ProductStatus::Active, ProductStatus::Inactive, ProductStatus::Draft];

    /// Wire value, as submitted by the form.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Active => "active",
            Self::Inactive => "inactive",
            Self::Draft => "draft",
        }
    }

    /// Localized option label.
    pub fn label(self) -> &'static str {
        match self {
            Self::Active => "Aktif",
            Self::Inactive => "Pasif",
            Self::Draft => "Taslak",
        }
    }
}

// =============================================================================
// USER
// =============================================================================

/// A customer record shown in the user modal.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct User {
    #[serde(deserialize_with = "deserialize_id")]
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub phone: String,
    #[serde(default)]
    pub address: Address,
    /// Order records are opaque here; only the count is displayed.
    #[serde(default)]
    pub orders: Vec<serde_json::Value>,
}

/// Postal address of a user.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Address {
    #[serde(default)]
    pub country: String,
    #[serde(default)]
    pub city: String,
    #[serde(default)]
    pub street: String,
    #[serde(default, deserialize_with = "deserialize_id")]
    pub postal_code: String,
}

// =============================================================================
// DESERIALIZERS
// =============================================================================

fn deserialize_id<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    let value = serde_json::Value::deserialize(deserializer)?;
    match value {
        serde_json::Value::String(s) => Ok(s),
        serde_json::Value::Number(number) => Ok(number.to_string()),
        _ => Err(D::Error::custom("expected string or number id")),
    }
}

fn deserialize_f64_from_number<'de, D>(deserializer: D) -> Result<f64, D::Error>
where
    D: Deserializer<'de>,
{
    let value = serde_json::Value::deserialize(deserializer)?;
    match value {
        serde_json::Value::Number(number) => {
            number.as_f64().ok_or_else(|| D::Error::custom("expected finite number"))
        }
        serde_json::Value::String(s) => s
            .trim()
            .parse::<f64>()
            .map_err(|_| D::Error::custom("expected numeric string")),
        _ => Err(D::Error::custom("expected number")),
    }
}

fn deserialize_i64_from_number<'de, D>(deserializer: D) -> Result<i64, D::Error>
where
    D: Deserializer<'de>,
{
    let value = serde_json::Value::deserialize(deserializer)?;
    match value {
        serde_json::Value::Number(number) => {
            if let Some(int) = number.as_i64() {
                return Ok(int);
            }
            #[allow(clippy::cast_precision_loss, clippy::cast_possible_truncation)]
            if let Some(float) = number.as_f64()
                && float.is_finite()
                && float.fract() == 0.0
                && float >= i64::MIN as f64
                && float <= i64::MAX as f64
            {
                return Ok(float as i64);
            }
            Err(D::Error::custom("expected integer-compatible number"))
        }
        serde_json::Value::String(s) => s
            .trim()
            .parse::<i64>()
            .map_err(|_| D::Error::custom("expected integer string")),
        _ => Err(D::Error::custom("expected number")),
    }
}
