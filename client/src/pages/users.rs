//! User listing page (`/users`), with the detail modal at `/users/:id`.
//!
//! SYSTEM CONTEXT
//! ==============
//! `/users` is a parent route. The listing stays mounted (and keeps its
//! loaded rows) while the child route swaps the `UserModal` in and out of
//! its outlet.

use leptos::prelude::*;
use leptos_router::components::Outlet;
use leptos_router::hooks::use_params_map;

use crate::components::user_modal::UserModal;
use crate::state::catalog::UsersState;
use crate::util::nav::user_detail_path;

#[component]
pub fn UsersPage() -> impl IntoView {
    let users = RwSignal::new(UsersState { loading: true, ..UsersState::default() });

    #[cfg(feature = "hydrate")]
    leptos::task::spawn_local(async move {
        users.update(UsersState::begin_load);
        let result = crate::net::api::fetch_users().await;
        if let Err(err) = &result {
            log::warn!("user list load failed: {err}");
        }
        users.update(|u| u.finish_load(result));
    });

    view! {
        <div class="users-page">
            <header class="page-header">
                <h1>"Kullanıcılar"</h1>
            </header>
            {move || {
                let state = users.get();
                if state.loading {
                    view! { <p class="users-page__status">"Yükleniyor..."</p> }.into_any()
                } else if let Some(message) = state.error {
                    view! { <p class="users-page__error" role="alert">{message}</p> }.into_any()
                } else if state.items.is_empty() {
                    view! { <p class="users-page__status">"Kullanıcı yok."</p> }.into_any()
                } else {
                    view! {
                        <table class="users-page__table">
                            <thead>
                                <tr>
                                    <th>"İsim"</th>
                                    <th>"Email"</th>
                                    <th>"Telefon"</th>
                                    <th>"Şehir"</th>
                                </tr>
                            </thead>
                            <tbody>
                                {state
                                    .items
                                    .into_iter()
                                    .map(|user| {
                                        view! {
                                            <tr>
                                                <td>
                                                    <a href=user_detail_path(&user.id)>{user.name}</a>
                                                </td>
                                                <td>{user.email}</td>
                                                <td>{user.phone}</td>
                                                <td>{user.address.city}</td>
                                            </tr>
                                        }
                                    })
                                    .collect_view()}
                            </tbody>
                        </table>
                    }
                    .into_any()
                }
            }}
            <Outlet/>
        </div>
    }
}

/// Child route `/users/:id`: the detail modal over the listing.
#[component]
pub fn UserDetail() -> impl IntoView {
    let params = use_params_map();
    let user_id = Memo::new(move |_| params.with(|p| p.get("id")));

    move || user_id.get().map(|user_id| view! { <UserModal user_id=user_id/> })
}
