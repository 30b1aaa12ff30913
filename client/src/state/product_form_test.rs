use super::*;
use crate::net::fake_catalog::{Call, FakeCatalog};
use crate::net::types::Category;
use futures::executor::block_on;

// =============================================================
// Helpers
// =============================================================

fn filled_fields() -> ProductFormFields {
    ProductFormFields {
        name: "Desk Lamp".to_owned(),
        brand: "Lumo".to_owned(),
        category: "Home".to_owned(),
        price: "49.90".to_owned(),
        stock: "12".to_owned(),
        status: "active".to_owned(),
        description: "Warm light".to_owned(),
        image_url: String::new(),
    }
}

fn picked(name: &str, size: u64) -> Option<SelectedFile> {
    Some(SelectedFile { name: name.to_owned(), size })
}

fn sample_product() -> Product {
    Product {
        id: "p-7".to_owned(),
        name: "Novel".to_owned(),
        brand: "Ink".to_owned(),
        category: Category::Books,
        price: 10.0,
        stock: 0,
        status: ProductStatus::Draft,
        description: "Paperback".to_owned(),
        image_url: Some("https://cdn.test/n.jpg".to_owned()),
    }
}

// =============================================================
// Prefill
// =============================================================

#[test]
fn blank_fields_default_status_to_active() {
    let fields = ProductFormFields::from_product(None);
    assert_eq!(fields.status, "active");
    assert!(fields.name.is_empty());
    assert!(fields.price.is_empty());
}

#[test]
fn edit_mode_prefills_every_field() {
    let fields = ProductFormFields::from_product(Some(&sample_product()));
    assert_eq!(fields.name, "Novel");
    assert_eq!(fields.brand, "Ink");
    assert_eq!(fields.category, "Books");
    assert_eq!(fields.price, "10");
    assert_eq!(fields.stock, "0");
    assert_eq!(fields.status, "draft");
    assert_eq!(fields.image_url, "https://cdn.test/n.jpg");
}

// =============================================================
// Normalization
// =============================================================

#[test]
fn numeric_fields_are_coerced() {
    let payload = normalize_form(filled_fields().entries(None)).unwrap();
    assert_eq!(payload["price"], serde_json::json!(49.9));
    assert_eq!(payload["stock"], serde_json::json!(12));
    assert_eq!(payload["name"], "Desk Lamp");
    assert_eq!(payload["status"], "active");
}

#[test]
fn picked_file_name_becomes_image_url_and_file_key_is_dropped() {
    let mut fields = filled_fields();
    fields.image_url = "https://old.test/x.png".to_owned();
    let payload = normalize_form(fields.entries(picked("lamp.webp", 2048))).unwrap();
    assert_eq!(payload["image_url"], "lamp.webp");
    assert!(!payload.contains_key("image"));
}

#[test]
fn empty_file_does_not_override_image_url() {
    let mut fields = filled_fields();
    fields.image_url = "https://cdn.test/lamp.png".to_owned();
    let payload = normalize_form(fields.entries(picked("empty.png", 0))).unwrap();
    assert_eq!(payload["image_url"], "https://cdn.test/lamp.png");
    assert!(!payload.contains_key("image"));
}

#[test]
fn blank_optional_fields_are_omitted() {
    let payload = normalize_form(filled_fields().entries(None)).unwrap();
    assert!(!payload.contains_key("image_url"));
    assert!(!payload.contains_key("image"));

    let mut fields = filled_fields();
    fields.description = String::new();
    fields.price = String::new();
    let payload = normalize_form(fields.entries(None)).unwrap();
    assert!(!payload.contains_key("description"));
    assert!(!payload.contains_key("price"));
}

#[test]
fn text_value_under_file_key_is_still_dropped() {
    let entries = vec![
        ("name".to_owned(), FieldValue::Text("Mug".to_owned())),
        ("image".to_owned(), FieldValue::Text("C:\\fakepath\\mug.png".to_owned())),
    ];
    let payload = normalize_form(entries).unwrap();
    assert_eq!(payload.len(), 1);
    assert_eq!(payload["name"], "Mug");
}

#[test]
fn negative_or_garbage_price_is_rejected() {
    for raw in ["-1", "abc", "NaN", "inf"] {
        let mut fields = filled_fields();
        fields.price = raw.to_owned();
        assert_eq!(normalize_form(fields.entries(None)), Err(FormError::InvalidPrice), "price {raw}");
    }
}

#[test]
fn stock_truncates_decimals_and_rejects_negatives() {
    let mut fields = filled_fields();
    fields.stock = "7.9".to_owned();
    let payload = normalize_form(fields.entries(None)).unwrap();
    assert_eq!(payload["stock"], serde_json::json!(7));

    fields.stock = "-2".to_owned();
    assert_eq!(normalize_form(fields.entries(None)), Err(FormError::InvalidStock));

    fields.stock = "twelve".to_owned();
    assert_eq!(normalize_form(fields.entries(None)), Err(FormError::InvalidStock));
}

#[test]
fn zero_price_and_stock_are_valid() {
    let mut fields = filled_fields();
    fields.price = "0".to_owned();
    fields.stock = "0".to_owned();
    let payload = normalize_form(fields.entries(None)).unwrap();
    assert_eq!(payload["price"], serde_json::json!(0.0));
    assert_eq!(payload["stock"], serde_json::json!(0));
}

// =============================================================
// Submit action
// =============================================================

#[test]
fn create_when_not_editing() {
    assert_eq!(SubmitAction::resolve(false, None), SubmitAction::Create);
    assert_eq!(SubmitAction::resolve(false, Some("p-1")), SubmitAction::Create);
}

#[test]
fn update_when_editing_with_id() {
    assert_eq!(SubmitAction::resolve(true, Some("p-1")), SubmitAction::Update("p-1".to_owned()));
}

#[test]
fn editing_without_id_falls_back_to_create() {
    assert_eq!(SubmitAction::resolve(true, None), SubmitAction::Create);
    assert_eq!(SubmitAction::resolve(true, Some("")), SubmitAction::Create);
}

// =============================================================
// Form state
// =============================================================

#[test]
fn submit_label_reflects_mode_and_loading() {
    let mut state = ProductFormState::default();
    assert_eq!(state.submit_label(false), "Kaydet");
    assert_eq!(state.submit_label(true), "Güncelle");
    state.begin();
    assert_eq!(state.submit_label(true), "İşleniyor...");
}

#[test]
fn begin_clears_previous_error() {
    let mut state = ProductFormState { loading: false, error: Some("old".to_owned()) };
    state.begin();
    assert!(state.loading);
    assert!(state.error.is_none());
}

// =============================================================
// Submit flow
// =============================================================

#[test]
fn create_flow_calls_create_not_update() {
    let service = FakeCatalog::default();
    let action = SubmitAction::resolve(false, None);
    let outcome = block_on(submit_product_form(&service, &action, filled_fields().entries(None), |_| {}));

    assert_eq!(outcome, SubmitOutcome::Saved(None));
    let calls = service.calls();
    assert_eq!(calls.len(), 1);
    assert!(matches!(&calls[0], Call::Create(payload) if payload["name"] == "Desk Lamp"));
}

#[test]
fn edit_flow_calls_update_with_id() {
    let service = FakeCatalog::default();
    let action = SubmitAction::resolve(true, Some("p-42"));
    block_on(submit_product_form(&service, &action, filled_fields().entries(None), |_| {}));

    let calls = service.calls();
    assert_eq!(calls.len(), 1);
    assert!(matches!(&calls[0], Call::Update(id, _) if id == "p-42"));
}

#[test]
fn flow_publishes_loading_then_idle() {
    let service = FakeCatalog::default();
    let mut seen = Vec::new();
    block_on(submit_product_form(&service, &SubmitAction::Create, filled_fields().entries(None), |s| {
        seen.push(s.clone());
    }));
    assert_eq!(seen.len(), 2);
    assert!(seen[0].loading);
    assert_eq!(seen[1], ProductFormState::default());
}

#[test]
fn service_rejection_surfaces_message_and_resets_loading() {
    let service = FakeCatalog::failing(ApiError::Validation { status: 422, message: "name taken".to_owned() });
    let mut last = ProductFormState::default();
    let outcome = block_on(submit_product_form(&service, &SubmitAction::Create, filled_fields().entries(None), |s| {
        last = s.clone();
    }));

    assert_eq!(outcome, SubmitOutcome::Failed("name taken".to_owned()));
    assert!(!last.loading);
    assert_eq!(last.error.as_deref(), Some("name taken"));
}

#[test]
fn blank_rejection_message_uses_localized_fallback() {
    let service = FakeCatalog::failing(ApiError::NotFound(String::new()));
    let outcome = block_on(submit_product_form(&service, &SubmitAction::Update("x".to_owned()), filled_fields().entries(None), |_| {}));
    assert_eq!(outcome, SubmitOutcome::Failed(crate::net::api::GENERIC_ERROR_MESSAGE.to_owned()));
}

#[test]
fn invalid_input_never_reaches_the_service() {
    let service = FakeCatalog::default();
    let mut fields = filled_fields();
    fields.price = "-5".to_owned();
    let outcome = block_on(submit_product_form(&service, &SubmitAction::Create, fields.entries(None), |_| {}));

    assert_eq!(outcome, SubmitOutcome::Failed(FormError::InvalidPrice.to_string()));
    assert!(service.calls().is_empty());
}

#[test]
fn category_options_list_the_fixed_categories() {
    let options = ProductFormFields::default().category_options();
    assert_eq!(options, vec!["Electronics", "Clothing", "Books", "Home", "Sports"]);
}

#[test]
fn category_options_keep_an_unlisted_current_category() {
    let mut fields = filled_fields();
    fields.category = "Garden".to_owned();
    let options = fields.category_options();
    assert_eq!(options.len(), 6);
    assert_eq!(options.last().map(String::as_str), Some("Garden"));

    fields.category = "Books".to_owned();
    assert_eq!(fields.category_options().len(), 5);
}
