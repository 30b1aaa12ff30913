//! User detail presentation for the user modal.

#[cfg(test)]
#[path = "users_test.rs"]
mod users_test;

use crate::net::types::User;

/// One label/value line of the user modal.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DetailRow {
    pub label: &'static str,
    pub value: String,
}

/// Fixed, ordered rows shown under the user's name.
pub fn user_detail_rows(user: &User) -> Vec<DetailRow> {
    let row = |label, value: &str| DetailRow { label, value: value.to_owned() };
    vec![
        row("Email", &user.email),
        row("Telefon", &user.phone),
        row("Ülke", &user.address.country),
        row("Şehir", &user.address.city),
        row("Adres", &user.address.street),
        row("Posta Kodu", &user.address.postal_code),
        DetailRow { label: "Sipariş Sayısı", value: user.orders.len().to_string() },
    ]
}

/// Messages for the modal's non-success states.
pub const USER_LOADING_MESSAGE: &str = "Yükleniyor...";
pub const USER_NOT_FOUND_MESSAGE: &str = "Kullanıcı bulunamadı.";
