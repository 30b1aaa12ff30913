//! Product listing page (`/product-cart`).
//!
//! SYSTEM CONTEXT
//! ==============
//! Owns the fetched product collection. Each card gets a reload callback so a
//! successful delete re-fetches the whole list.

use leptos::prelude::*;

use crate::components::product_card::ProductCard;
use crate::state::catalog::ProductsState;
use crate::util::nav::PRODUCT_CREATE_PATH;

/// Re-fetch every product into `products`. Browser only.
#[cfg_attr(not(feature = "hydrate"), allow(unused_variables))]
fn load_products(products: RwSignal<ProductsState>) {
    #[cfg(feature = "hydrate")]
    leptos::task::spawn_local(async move {
        products.update(ProductsState::begin_load);
        let result = crate::net::api::fetch_products().await;
        if let Err(err) = &result {
            log::warn!("product list load failed: {err}");
        }
        products.update(|p| p.finish_load(result));
    });
}

#[component]
pub fn ProductsPage() -> impl IntoView {
    let products = RwSignal::new(ProductsState { loading: true, ..ProductsState::default() });
    load_products(products);

    let reload = Callback::new(move |()| load_products(products));

    view! {
        <div class="products-page">
            <header class="page-header">
                <h1>"Ürünler"</h1>
                <div class="page-header__actions">
                    <a class="btn btn--primary" href=PRODUCT_CREATE_PATH>"Ürün Ekle"</a>
                </div>
            </header>
            {move || {
                let state = products.get();
                if state.loading && state.items.is_empty() {
                    view! { <p class="products-page__status">"Yükleniyor..."</p> }.into_any()
                } else if let Some(message) = state.error {
                    view! { <p class="products-page__error" role="alert">{message}</p> }.into_any()
                } else if state.items.is_empty() {
                    view! { <p class="products-page__status">"Henüz ürün yok."</p> }.into_any()
                } else {
                    view! {
                        <div class="products-page__grid">
                            {state
                                .items
                                .into_iter()
                                .map(|product| view! { <ProductCard product=product on_deleted=reload/> })
                                .collect_view()}
                        </div>
                    }
                    .into_any()
                }
            }}
        </div>
    }
}
