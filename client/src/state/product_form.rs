//! Product form model: field values, payload normalization, submit phases.
//!
//! DESIGN
//! ======
//! The form component only collects raw entries and renders
//! [`ProductFormState`]. Everything between "submit clicked" and "service
//! called" lives here so it can be exercised without a browser.
//!
//! The image picker is a placeholder: a chosen file contributes only its
//! name as `image_url`. Nothing is uploaded.

#[cfg(test)]
#[path = "product_form_test.rs"]
mod product_form_test;

use crate::net::api::{ApiError, CatalogService};
use crate::net::types::{Category, Product, ProductPayload, ProductStatus};

/// Name of the file input; never forwarded to the API.
pub const IMAGE_FIELD: &str = "image";
pub const IMAGE_URL_FIELD: &str = "image_url";

// =============================================================================
// FORM ENTRIES
// =============================================================================

/// A file picked in the image input.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SelectedFile {
    pub name: String,
    pub size: u64,
}

/// Raw value of one form control.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum FieldValue {
    Text(String),
    File(Option<SelectedFile>),
}

/// One `(name, value)` pair as serialized from the form.
pub type FormEntry = (String, FieldValue);

/// Local validation failures, reported before any request is made.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum FormError {
    #[error("Fiyat sıfır veya pozitif bir sayı olmalıdır.")]
    InvalidPrice,
    #[error("Stok sıfır veya pozitif bir tam sayı olmalıdır.")]
    InvalidStock,
}

/// Text values bound to the form inputs.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ProductFormFields {
    pub name: String,
    pub brand: String,
    pub category: String,
    pub price: String,
    pub stock: String,
    pub status: String,
    pub description: String,
    pub image_url: String,
}

impl Default for ProductFormFields {
    fn default() -> Self {
        Self {
            name: String::new(),
            brand: String::new(),
            category: String::new(),
            price: String::new(),
            stock: String::new(),
            status: ProductStatus::default().as_str().to_owned(),
            description: String::new(),
            image_url: String::new(),
        }
    }
}

impl ProductFormFields {
    /// Pre-fill from an existing product in edit mode, or blank for create.
    pub fn from_product(product: Option<&Product>) -> Self {
        let Some(product) = product else {
            return Self::default();
        };
        Self {
            name: product.name.clone(),
            brand: product.brand.clone(),
            category: product.category.label().to_owned(),
            price: product.price.to_string(),
            stock: product.stock.to_string(),
            status: product.status.as_str().to_owned(),
            description: product.description.clone(),
            image_url: product.image_url.clone().unwrap_or_default(),
        }
    }

    /// Values offered by the category select. A category outside the fixed
    /// list (edit mode) is appended so the current value stays selectable.
    pub fn category_options(&self) -> Vec<String> {
        let mut options: Vec<String> = Category::SELECTABLE.iter().map(|c| c.label().to_owned()).collect();
        if !self.category.is_empty() && !options.contains(&self.category) {
            options.push(self.category.clone());
        }
        options
    }

    /// Serialize in form order, with the picked image file (if any).
    pub fn entries(&self, image: Option<SelectedFile>) -> Vec<FormEntry> {
        let text = |key: &str, value: &str| (key.to_owned(), FieldValue::Text(value.to_owned()));
        vec![
            text("name", &self.name),
            text("brand", &self.brand),
            text("category", &self.category),
            text("price", &self.price),
            text("stock", &self.stock),
            text("status", &self.status),
            text("description", &self.description),
            (IMAGE_FIELD.to_owned(), FieldValue::File(image)),
            text(IMAGE_URL_FIELD, &self.image_url),
        ]
    }
}

// =============================================================================
// NORMALIZATION
// =============================================================================

/// Turn raw form entries into the write payload.
///
/// `price` becomes a float and `stock` an integer; a non-empty picked file
/// replaces `image_url` with its name; empty values and the file field are
/// dropped.
///
/// # Errors
///
/// Returns [`FormError`] when `price` or `stock` is present but not a
/// non-negative number.
pub fn normalize_form(entries: Vec<FormEntry>) -> Result<ProductPayload, FormError> {
    let mut payload = ProductPayload::new();
    let mut picked_name = None;

    for (key, value) in entries {
        match value {
            FieldValue::File(file) => {
                if key == IMAGE_FIELD {
                    if let Some(file) = file.filter(|f| f.size > 0 && !f.name.is_empty()) {
                        picked_name = Some(file.name);
                    }
                }
            }
            FieldValue::Text(text) => {
                if text.is_empty() {
                    continue;
                }
                let value = match key.as_str() {
                    "price" => serde_json::Value::from(parse_price(&text)?),
                    "stock" => serde_json::Value::from(parse_stock(&text)?),
                    _ => serde_json::Value::String(text),
                };
                payload.insert(key, value);
            }
        }
    }

    if let Some(name) = picked_name {
        payload.insert(IMAGE_URL_FIELD.to_owned(), serde_json::Value::String(name));
    }
    payload.remove(IMAGE_FIELD);
    Ok(payload)
}

fn parse_price(raw: &str) -> Result<f64, FormError> {
    let price = raw.trim().parse::<f64>().map_err(|_| FormError::InvalidPrice)?;
    if price.is_finite() && price >= 0.0 { Ok(price) } else { Err(FormError::InvalidPrice) }
}

/// Integers pass through; decimals are truncated toward zero.
fn parse_stock(raw: &str) -> Result<i64, FormError> {
    let raw = raw.trim();
    let stock = match raw.parse::<i64>() {
        Ok(stock) => stock,
        Err(_) => {
            let float = raw.parse::<f64>().map_err(|_| FormError::InvalidStock)?;
            if !float.is_finite() || float.abs() >= 9.0e15 {
                return Err(FormError::InvalidStock);
            }
            truncate_to_i64(float)
        }
    };
    if stock >= 0 { Ok(stock) } else { Err(FormError::InvalidStock) }
}

#[allow(clippy::cast_possible_truncation)]
fn truncate_to_i64(value: f64) -> i64 {
    value.trunc() as i64
}

// =============================================================================
// SUBMISSION
// =============================================================================

/// Which write the form performs.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SubmitAction {
    Create,
    Update(String),
}

impl SubmitAction {
    /// Update only in edit mode with a known product id; otherwise create.
    pub fn resolve(is_edit: bool, product_id: Option<&str>) -> Self {
        match product_id {
            Some(id) if is_edit && !id.is_empty() => Self::Update(id.to_owned()),
            _ => Self::Create,
        }
    }
}

/// Submit phase shown by the form: `loading` disables the controls and
/// `error` renders the banner.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ProductFormState {
    pub loading: bool,
    pub error: Option<String>,
}

impl ProductFormState {
    pub fn begin(&mut self) {
        self.loading = true;
        self.error = None;
    }

    pub fn finish(&mut self, outcome: &SubmitOutcome) {
        self.loading = false;
        self.error = match outcome {
            SubmitOutcome::Saved(_) => None,
            SubmitOutcome::Failed(message) => Some(message.clone()),
        };
    }

    pub fn submit_label(&self, is_edit: bool) -> &'static str {
        match (self.loading, is_edit) {
            (true, _) => "İşleniyor...",
            (false, true) => "Güncelle",
            (false, false) => "Kaydet",
        }
    }
}

/// Result of one submission attempt.
#[derive(Clone, Debug, PartialEq)]
pub enum SubmitOutcome {
    Saved(Option<Product>),
    Failed(String),
}

/// Send an already normalized payload through the service.
///
/// # Errors
///
/// Propagates the service's [`ApiError`].
pub async fn submit_payload<S: CatalogService>(
    service: &S,
    action: &SubmitAction,
    payload: &ProductPayload,
) -> Result<Option<Product>, ApiError> {
    match action {
        SubmitAction::Create => service.create_product(payload).await,
        SubmitAction::Update(id) => service.update_product(id, payload).await,
    }
}

/// Full submit flow: publish loading, normalize, call the service, publish
/// the final state. The final state always has `loading == false`.
pub async fn submit_product_form<S, F>(
    service: &S,
    action: &SubmitAction,
    entries: Vec<FormEntry>,
    mut publish: F,
) -> SubmitOutcome
where
    S: CatalogService,
    F: FnMut(&ProductFormState),
{
    let mut state = ProductFormState::default();
    state.begin();
    publish(&state);

    let outcome = match normalize_form(entries) {
        Err(err) => SubmitOutcome::Failed(err.to_string()),
        Ok(payload) => match submit_payload(service, action, &payload).await {
            Ok(product) => SubmitOutcome::Saved(product),
            Err(err) => SubmitOutcome::Failed(err.user_message()),
        },
    };

    state.finish(&outcome);
    publish(&state);
    outcome
}
