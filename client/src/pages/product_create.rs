//! New product page (`/products/create`).

use leptos::prelude::*;

use crate::components::product_form::ProductForm;

#[component]
pub fn ProductCreatePage() -> impl IntoView {
    view! { <ProductForm/> }
}
