use super::*;

// =============================================================
// Helpers
// =============================================================

fn product_with_stock(stock: i64) -> Product {
    Product {
        id: "p-1".to_owned(),
        name: "Kettle".to_owned(),
        brand: "Acme".to_owned(),
        category: Category::Home,
        price: 12.5,
        stock,
        status: ProductStatus::Active,
        description: "Boils water".to_owned(),
        image_url: None,
    }
}

// =============================================================
// Product decoding
// =============================================================

#[test]
fn product_decodes_numeric_id_as_string() {
    let json = serde_json::json!({
        "id": 42,
        "name": "Phone",
        "brand": "Acme",
        "category": "Electronics",
        "price": 199.99,
        "stock": 3,
        "status": "draft",
        "description": "A phone"
    });
    let product: Product = serde_json::from_value(json).unwrap();
    assert_eq!(product.id, "42");
    assert_eq!(product.category, Category::Electronics);
    assert_eq!(product.status, ProductStatus::Draft);
    assert_eq!(product.stock, 3);
    assert!(product.image_url.is_none());
}

#[test]
fn product_defaults_missing_optional_fields() {
    let json = serde_json::json!({
        "id": "a1",
        "name": "Novel",
        "category": "Books",
        "price": 10,
        "stock": 0
    });
    let product: Product = serde_json::from_value(json).unwrap();
    assert_eq!(product.status, ProductStatus::Active);
    assert!(product.brand.is_empty());
    assert!(product.description.is_empty());
    assert!((product.price - 10.0).abs() < f64::EPSILON);
}

#[test]
fn product_accepts_numeric_strings() {
    let json = serde_json::json!({
        "id": "a1",
        "name": "Novel",
        "category": "Books",
        "price": "7.25",
        "stock": "4"
    });
    let product: Product = serde_json::from_value(json).unwrap();
    assert!((product.price - 7.25).abs() < f64::EPSILON);
    assert_eq!(product.stock, 4);
}

#[test]
fn product_rejects_fractional_stock() {
    let json = serde_json::json!({
        "id": "a1",
        "name": "Novel",
        "category": "Books",
        "price": 1,
        "stock": 1.5
    });
    assert!(serde_json::from_value::<Product>(json).is_err());
}

#[test]
fn unknown_category_is_preserved() {
    let json = serde_json::json!({
        "id": 1,
        "name": "Tent",
        "category": "Outdoor",
        "price": 80,
        "stock": 2
    });
    let product: Product = serde_json::from_value(json).unwrap();
    assert_eq!(product.category, Category::Other("Outdoor".to_owned()));
    assert_eq!(product.category.label(), "Outdoor");
    let back = serde_json::to_value(&product).unwrap();
    assert_eq!(back["category"], "Outdoor");
}

#[test]
fn product_serializes_status_lowercase_and_skips_missing_image() {
    let value = serde_json::to_value(product_with_stock(1)).unwrap();
    assert_eq!(value["status"], "active");
    assert_eq!(value["category"], "Home");
    assert!(value.get("image_url").is_none());
}

// =============================================================
// Derived display rules
// =============================================================

#[test]
fn stock_zero_or_negative_is_out_of_stock() {
    assert_eq!(product_with_stock(0).stock_status(), StockStatus::OutOfStock);
    assert_eq!(product_with_stock(-3).stock_status(), StockStatus::OutOfStock);
    assert_eq!(StockStatus::OutOfStock.label(), "Out of Stock");
}

#[test]
fn positive_stock_is_in_stock() {
    assert_eq!(product_with_stock(1).stock_status(), StockStatus::InStock);
    assert_eq!(product_with_stock(500).stock_status(), StockStatus::InStock);
    assert_eq!(StockStatus::InStock.label(), "In Stock");
}

#[test]
fn display_price_uses_two_decimals() {
    assert_eq!(product_with_stock(1).display_price(), "$12.50");
}

#[test]
fn blank_image_url_is_treated_as_missing() {
    let mut product = product_with_stock(1);
    product.image_url = Some("  ".to_owned());
    assert!(product.image().is_none());
    product.image_url = Some("https://cdn.test/k.png".to_owned());
    assert_eq!(product.image(), Some("https://cdn.test/k.png"));
}

// =============================================================
// User decoding
// =============================================================

#[test]
fn user_decodes_nested_address_and_orders() {
    let json = serde_json::json!({
        "id": 7,
        "name": "Ayşe Yılmaz",
        "email": "ayse@example.com",
        "phone": "+90 555 000 00 00",
        "address": {
            "country": "Türkiye",
            "city": "İzmir",
            "street": "Kordon 1",
            "postal_code": 35210
        },
        "orders": [{"id": 1}, {"id": 2}]
    });
    let user: User = serde_json::from_value(json).unwrap();
    assert_eq!(user.id, "7");
    assert_eq!(user.address.postal_code, "35210");
    assert_eq!(user.orders.len(), 2);
}

#[test]
fn user_tolerates_missing_address_and_orders() {
    let json = serde_json::json!({ "id": "u1", "name": "Can" });
    let user: User = serde_json::from_value(json).unwrap();
    assert_eq!(user.address, Address::default());
    assert!(user.orders.is_empty());
}
