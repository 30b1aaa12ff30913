//! Create/edit form for a product.
//!
//! SYSTEM CONTEXT
//! ==============
//! Inputs are bound to a `ProductFormFields` signal so values survive a
//! failed submit. On submit the fields are serialized to entries and handed
//! to `state::product_form::submit_product_form`, which owns normalization,
//! create/update dispatch and the loading/error phases.

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use crate::net::api::HttpCatalog;
use crate::net::types::{Product, ProductStatus};
use crate::state::product_form::{
    ProductFormFields, ProductFormState, SubmitAction, SubmitOutcome, submit_product_form,
};
use crate::util::browser::history_back;
use crate::util::nav::PRODUCTS_PATH;

/// Product form. In edit mode `product` pre-fills the inputs and submit
/// updates `product_id`; otherwise submit creates.
#[component]
pub fn ProductForm(
    #[prop(optional)] product: Option<Product>,
    #[prop(optional)] is_edit: bool,
    #[prop(optional)] product_id: Option<String>,
) -> impl IntoView {
    let fields = RwSignal::new(ProductFormFields::from_product(product.as_ref()));
    let state = RwSignal::new(ProductFormState::default());
    let image_ref = NodeRef::<leptos::html::Input>::new();
    let action = SubmitAction::resolve(is_edit, product_id.as_deref());
    let navigate = use_navigate();

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if state.get_untracked().loading {
            return;
        }

        #[cfg(feature = "hydrate")]
        let image = image_ref.get_untracked().and_then(|input| crate::util::browser::picked_file(&input));
        #[cfg(not(feature = "hydrate"))]
        let image = None;

        let entries = fields.get_untracked().entries(image);
        let action = action.clone();
        let navigate = navigate.clone();
        leptos::task::spawn_local(async move {
            let outcome = submit_product_form(&HttpCatalog, &action, entries, |s| state.set(s.clone())).await;
            #[cfg(feature = "hydrate")]
            if let SubmitOutcome::Failed(message) = &outcome {
                log::warn!("product form submission failed: {message}");
            }
            if matches!(outcome, SubmitOutcome::Saved(_)) {
                navigate(PRODUCTS_PATH, NavigateOptions::default());
            }
        });
    };

    let loading = move || state.with(|s| s.loading);

    view! {
        <div class="product-form-page">
            <header class="page-header">
                <h1>{if is_edit { "Ürünü Düzenle" } else { "Yeni Ürün Ekle" }}</h1>
            </header>

            <div class="product-form-page__body">
                <form class="product-form" on:submit=on_submit>
                    <Show when=move || state.with(|s| s.error.is_some())>
                        <div class="product-form__error" role="alert">
                            <p>{move || state.with(|s| s.error.clone().unwrap_or_default())}</p>
                        </div>
                    </Show>

                    <div class="product-form__grid">
                        <div class="product-form__field">
                            <label for="name">"İsim"</label>
                            <input
                                id="name"
                                name="name"
                                type="text"
                                required
                                placeholder="Ürün adını girin"
                                prop:value=move || fields.with(|f| f.name.clone())
                                on:input=move |ev| fields.update(|f| f.name = event_target_value(&ev))
                            />
                        </div>

                        <div class="product-form__field">
                            <label for="brand">"Marka"</label>
                            <input
                                id="brand"
                                name="brand"
                                type="text"
                                required
                                placeholder="Marka adını girin"
                                prop:value=move || fields.with(|f| f.brand.clone())
                                on:input=move |ev| fields.update(|f| f.brand = event_target_value(&ev))
                            />
                        </div>

                        <div class="product-form__field">
                            <label for="category">"Kategori"</label>
                            <select
                                id="category"
                                name="category"
                                required
                                on:change=move |ev| fields.update(|f| f.category = event_target_value(&ev))
                            >
                                <option value="" selected=move || fields.with(|f| f.category.is_empty())>
                                    "Kategori seçin"
                                </option>
                                {fields
                                    .with_untracked(ProductFormFields::category_options)
                                    .into_iter()
                                    .map(|label| {
                                        let value = label.clone();
                                        let selected_label = label.clone();
                                        view! {
                                            <option
                                                value=value
                                                selected=move || fields.with(|f| f.category == selected_label)
                                            >
                                                {label}
                                            </option>
                                        }
                                    })
                                    .collect::<Vec<_>>()}
                            </select>
                        </div>

                        <div class="product-form__field">
                            <label for="price">"Fiyat"</label>
                            <div class="product-form__currency">
                                <span class="product-form__currency-symbol" aria-hidden="true">"₺"</span>
                                <input
                                    id="price"
                                    name="price"
                                    type="number"
                                    step="0.01"
                                    min="0"
                                    required
                                    placeholder="0.00"
                                    prop:value=move || fields.with(|f| f.price.clone())
                                    on:input=move |ev| fields.update(|f| f.price = event_target_value(&ev))
                                />
                            </div>
                        </div>

                        <div class="product-form__field">
                            <label for="stock">"Stok"</label>
                            <input
                                id="stock"
                                name="stock"
                                type="number"
                                min="0"
                                required
                                placeholder="Stok miktarı"
                                prop:value=move || fields.with(|f| f.stock.clone())
                                on:input=move |ev| fields.update(|f| f.stock = event_target_value(&ev))
                            />
                        </div>

                        <div class="product-form__field">
                            <label for="status">"Durum"</label>
                            <select
                                id="status"
                                name="status"
                                on:change=move |ev| fields.update(|f| f.status = event_target_value(&ev))
                            >
                                {ProductStatus::ALL
                                    .iter()
                                    .map(|status| {
                                        let value = status.as_str();
                                        view! {
                                            <option
                                                value=value
                                                selected=move || fields.with(|f| f.status == value)
                                            >
                                                {status.label()}
                                            </option>
                                        }
                                    })
                                    .collect::<Vec<_>>()}
                            </select>
                        </div>
                    </div>

                    <div class="product-form__field">
                        <label for="description">"Açıklama"</label>
                        <textarea
                            id="description"
                            name="description"
                            rows="4"
                            required
                            placeholder="Ürün açıklamasını girin"
                            prop:value=move || fields.with(|f| f.description.clone())
                            on:input=move |ev| fields.update(|f| f.description = event_target_value(&ev))
                        ></textarea>
                    </div>

                    <div class="product-form__field">
                        <span class="product-form__label">"Ürün Görseli"</span>
                        <label for="image" class="product-form__dropzone">
                            <span class="product-form__dropzone-title">
                                <strong>"Tıklayarak yükle"</strong>
                                " veya sürükleyip bırakın"
                            </span>
                            <span class="product-form__dropzone-hint">"PNG, JPG, WEBP (MAX. 10MB)"</span>
                            <input
                                id="image"
                                name="image"
                                type="file"
                                accept="image/*"
                                class="product-form__file"
                                node_ref=image_ref
                            />
                        </label>
                    </div>

                    <div class="product-form__field">
                        <label for="photoUrl">"Fotoğraf URL"</label>
                        <input
                            id="photoUrl"
                            name="image_url"
                            type="url"
                            placeholder="https://example.com/photo.jpg"
                            prop:value=move || fields.with(|f| f.image_url.clone())
                            on:input=move |ev| fields.update(|f| f.image_url = event_target_value(&ev))
                        />
                    </div>

                    <div class="product-form__actions">
                        <button class="btn" type="button" on:click=move |_| history_back() disabled=loading>
                            "Geri"
                        </button>
                        <button class="btn btn--primary" type="submit" disabled=loading>
                            {move || state.with(|s| s.submit_label(is_edit))}
                        </button>
                    </div>
                </form>
            </div>
        </div>
    }
}
