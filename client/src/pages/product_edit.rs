//! Edit product page (`/products/edit/:id`).
//!
//! Loads the product by route id, then mounts the form pre-filled in edit
//! mode. The form is only mounted once the record is known so its fields
//! start from the stored values.

use leptos::prelude::*;
use leptos_router::hooks::use_params_map;

use crate::components::product_form::ProductForm;
use crate::net::types::Product;
use crate::state::catalog::Lookup;
use crate::util::nav::PRODUCTS_PATH;

#[component]
pub fn ProductEditPage() -> impl IntoView {
    let params = use_params_map();
    let product = RwSignal::new(Lookup::<Product>::Loading);

    Effect::new(move || {
        #[cfg_attr(not(feature = "hydrate"), allow(unused_variables))]
        let Some(id) = params.get().get("id") else {
            product.set(Lookup::NotFound);
            return;
        };
        product.set(Lookup::Loading);
        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            let result = crate::net::api::fetch_product(&id).await;
            if let Err(err) = &result {
                log::warn!("product {id} load failed: {err}");
            }
            product.set(Lookup::from_result(result));
        });
    });

    view! {
        {move || match product.get() {
            Lookup::Loading => view! { <p class="product-form-page__status">"Yükleniyor..."</p> }.into_any(),
            Lookup::NotFound => {
                view! {
                    <div class="product-form-page__status">
                        <p>"Ürün bulunamadı."</p>
                        <a class="btn" href=PRODUCTS_PATH>"Ürünlere dön"</a>
                    </div>
                }
                .into_any()
            }
            Lookup::Failed(message) => {
                view! { <p class="product-form-page__error" role="alert">{message}</p> }.into_any()
            }
            Lookup::Found(found) => {
                let id = found.id.clone();
                view! { <ProductForm product=found is_edit=true product_id=id/> }.into_any()
            }
        }}
    }
}
