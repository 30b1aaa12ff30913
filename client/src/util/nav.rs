//! Navigation sections and route paths.

#[cfg(test)]
#[path = "nav_test.rs"]
mod nav_test;

pub const DASHBOARD_PATH: &str = "/";
pub const PRODUCTS_PATH: &str = "/product-cart";
pub const PRODUCT_CREATE_PATH: &str = "/products/create";
pub const USERS_PATH: &str = "/users";

pub fn product_edit_path(id: &str) -> String {
    format!("/products/edit/{id}")
}

pub fn user_detail_path(id: &str) -> String {
    format!("{USERS_PATH}/{id}")
}

/// One navbar entry.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct NavSection {
    pub label: &'static str,
    pub path: &'static str,
    pub glyph: &'static str,
}

pub const SECTIONS: [NavSection; 4] = [
    NavSection { label: "Ana Sayfa", path: DASHBOARD_PATH, glyph: "◔" },
    NavSection { label: "Ürünler", path: PRODUCTS_PATH, glyph: "▦" },
    NavSection { label: "Ürün Ekle", path: PRODUCT_CREATE_PATH, glyph: "+" },
    NavSection { label: "Kullanıcılar", path: USERS_PATH, glyph: "☺" },
];

/// Whether `section` should be highlighted for `current_path`.
///
/// The root matches only itself; other sections match their path and any
/// sub-path on a segment boundary.
pub fn is_active(section: &NavSection, current_path: &str) -> bool {
    if section.path == DASHBOARD_PATH {
        return current_path == DASHBOARD_PATH || current_path.is_empty();
    }
    current_path
        .strip_prefix(section.path)
        .is_some_and(|rest| rest.is_empty() || rest.starts_with('/'))
}
