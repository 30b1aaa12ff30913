//! Product summary card with edit link and delete affordance.

use leptos::prelude::*;

use crate::components::toasts::notify;
use crate::net::api::HttpCatalog;
use crate::net::types::Product;
use crate::state::notifications::NotificationsState;
use crate::state::product_card::{DELETE_CONFIRMATION, delete_button_label, run_delete};
use crate::util::browser::confirm;
use crate::util::nav::product_edit_path;

/// One product in the listing grid.
///
/// `on_deleted` runs after a successful delete so the hosting page can
/// re-fetch; on failure the card stays as it was.
#[component]
pub fn ProductCard(product: Product, #[prop(optional)] on_deleted: Option<Callback<()>>) -> impl IntoView {
    let notifications = expect_context::<RwSignal<NotificationsState>>();
    let deleting = RwSignal::new(false);

    let stock_status = product.stock_status();
    let price = product.display_price();
    let image = product.image().map(str::to_owned);
    let edit_href = product_edit_path(&product.id);
    let product_id = product.id.clone();
    let Product { name, description, category, stock, .. } = product;
    let alt = name.clone();

    let on_delete = move |_| {
        if deleting.get_untracked() {
            return;
        }
        let product_id = product_id.clone();
        leptos::task::spawn_local(async move {
            let outcome =
                run_delete(&HttpCatalog, &product_id, || confirm(DELETE_CONFIRMATION), |busy| deleting.set(busy))
                    .await;
            #[cfg(feature = "hydrate")]
            if let crate::state::product_card::DeleteOutcome::Failed(err) = &outcome {
                log::warn!("delete product {product_id} failed: {err}");
            }
            if let Some((kind, message)) = outcome.toast() {
                notify(notifications, kind, message);
            }
            if outcome.should_refresh() {
                if let Some(on_deleted) = on_deleted {
                    on_deleted.run(());
                }
            }
        });
    };

    view! {
        <article class="product-card">
            {image.map(|src| view! { <img class="product-card__image" src=src alt=alt/> })}
            <h3 class="product-card__name">{name}</h3>
            <p class="product-card__description">{description}</p>
            <div class="product-card__row">
                <span class="product-card__price">{price}</span>
                <span class="product-card__category">{category.label().to_owned()}</span>
            </div>
            <div class="product-card__row product-card__row--meta">
                <span>{format!("Stock: {stock}")}</span>
                <span class=format!("product-card__stock product-card__stock--{}", stock_status.css_modifier())>
                    {stock_status.label()}
                </span>
            </div>
            <div class="product-card__actions">
                <a class="btn btn--primary product-card__edit" href=edit_href>
                    "Edit"
                </a>
                <button
                    class="btn btn--danger product-card__delete"
                    on:click=on_delete
                    disabled=move || deleting.get()
                >
                    {move || delete_button_label(deleting.get())}
                </button>
            </div>
        </article>
    }
}
