use super::*;
use crate::net::types::Address;

fn sample_user() -> User {
    User {
        id: "u-1".to_owned(),
        name: "Deniz Kaya".to_owned(),
        email: "deniz@example.com".to_owned(),
        phone: "555-0101".to_owned(),
        address: Address {
            country: "Türkiye".to_owned(),
            city: "Ankara".to_owned(),
            street: "Atatürk Blv. 10".to_owned(),
            postal_code: "06420".to_owned(),
        },
        orders: vec![serde_json::json!({"id": 1}), serde_json::json!({"id": 2}), serde_json::json!({"id": 3})],
    }
}

#[test]
fn rows_follow_fixed_label_order() {
    let labels: Vec<&str> = user_detail_rows(&sample_user()).iter().map(|r| r.label).collect();
    assert_eq!(labels, vec!["Email", "Telefon", "Ülke", "Şehir", "Adres", "Posta Kodu", "Sipariş Sayısı"]);
}

#[test]
fn rows_carry_user_values_and_order_count() {
    let rows = user_detail_rows(&sample_user());
    assert_eq!(rows[0].value, "deniz@example.com");
    assert_eq!(rows[2].value, "Türkiye");
    assert_eq!(rows[5].value, "06420");
    assert_eq!(rows[6].value, "3");
}

#[test]
fn user_without_orders_shows_zero() {
    let mut user = sample_user();
    user.orders.clear();
    assert_eq!(user_detail_rows(&user)[6].value, "0");
}
