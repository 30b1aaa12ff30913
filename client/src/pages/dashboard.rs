//! Landing page: catalog overview with the category distribution chart.

use leptos::prelude::*;

use crate::components::category_container::CategoryContainer;
use crate::util::nav::{PRODUCT_CREATE_PATH, PRODUCTS_PATH};

#[component]
pub fn DashboardPage() -> impl IntoView {
    view! {
        <div class="dashboard-page">
            <header class="page-header">
                <h1>"Ana Sayfa"</h1>
                <div class="page-header__actions">
                    <a class="btn" href=PRODUCTS_PATH>"Ürünleri Gör"</a>
                    <a class="btn btn--primary" href=PRODUCT_CREATE_PATH>"Ürün Ekle"</a>
                </div>
            </header>
            <CategoryContainer/>
        </div>
    }
}
