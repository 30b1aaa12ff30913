//! Overlay showing one user's contact and order details.
//!
//! SYSTEM CONTEXT
//! ==============
//! Mounted in the users page outlet by the `/users/:id` child route. The
//! modal fetches the user itself. Closing it navigates back to `/users`,
//! which swaps the outlet to its empty child and leaves the listing intact.

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use crate::net::types::User;
use crate::state::catalog::Lookup;
use crate::state::users::{USER_LOADING_MESSAGE, USER_NOT_FOUND_MESSAGE, user_detail_rows};
use crate::util::nav::USERS_PATH;

#[component]
pub fn UserModal(user_id: String) -> impl IntoView {
    let user = RwSignal::new(Lookup::<User>::Loading);
    let navigate = use_navigate();

    #[cfg(feature = "hydrate")]
    {
        let user_id = user_id.clone();
        leptos::task::spawn_local(async move {
            let result = crate::net::api::fetch_user(&user_id).await;
            if let Err(err) = &result {
                if !err.is_not_found() {
                    log::warn!("user {user_id} load failed: {err}");
                }
            }
            user.set(Lookup::from_result(result));
        });
    }

    let close = move || navigate(USERS_PATH, NavigateOptions::default());
    let close_on_escape = close.clone();
    let close_on_button = close.clone();
    let on_keydown = move |ev: leptos::ev::KeyboardEvent| {
        if ev.key() == "Escape" {
            ev.prevent_default();
            close_on_escape();
        }
    };

    view! {
        <div class="user-modal__backdrop" on:click=move |_| close()>
            <div
                class="user-modal"
                role="dialog"
                aria-modal="true"
                tabindex="0"
                data-user-id=user_id
                on:click=move |ev| ev.stop_propagation()
                on:keydown=on_keydown
            >
                <button class="user-modal__close" type="button" title="Kapat" on:click=move |_| close_on_button()>
                    "✕"
                </button>
                {move || match user.get() {
                    Lookup::Loading => {
                        view! { <p class="user-modal__status">{USER_LOADING_MESSAGE}</p> }.into_any()
                    }
                    Lookup::NotFound => {
                        view! { <p class="user-modal__status">{USER_NOT_FOUND_MESSAGE}</p> }.into_any()
                    }
                    Lookup::Failed(message) => {
                        view! { <p class="user-modal__error" role="alert">{message}</p> }.into_any()
                    }
                    Lookup::Found(user) => {
                        let rows = user_detail_rows(&user)
                            .into_iter()
                            .map(|row| {
                                view! {
                                    <div class="user-modal__row">
                                        <dt>{row.label}</dt>
                                        <dd>{row.value}</dd>
                                    </div>
                                }
                            })
                            .collect_view();
                        view! {
                            <h2 class="user-modal__name">{user.name}</h2>
                            <dl class="user-modal__details">{rows}</dl>
                        }
                        .into_any()
                    }
                }}
            </div>
        </div>
    }
}
