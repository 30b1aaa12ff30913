//! Toast stack rendered once at the app root.

use leptos::prelude::*;

use crate::state::notifications::{NotificationsState, ToastKind};

/// Push a toast and, in the browser, schedule its dismissal.
pub fn notify(notifications: RwSignal<NotificationsState>, kind: ToastKind, message: &str) {
    let mut id = String::new();
    notifications.update(|n| id = n.push(kind, message));

    #[cfg(feature = "hydrate")]
    leptos::task::spawn_local(async move {
        let lifetime = u64::from(crate::state::notifications::TOAST_LIFETIME_MS);
        gloo_timers::future::sleep(std::time::Duration::from_millis(lifetime)).await;
        notifications.update(|n| n.dismiss(&id));
    });
}

/// Fixed-position stack of transient notifications. Click to dismiss.
#[component]
pub fn Toasts() -> impl IntoView {
    let notifications = expect_context::<RwSignal<NotificationsState>>();

    view! {
        <div class="toasts" aria-live="polite">
            {move || {
                notifications
                    .get()
                    .toasts
                    .into_iter()
                    .map(|toast| {
                        let id = toast.id;
                        view! {
                            <div
                                class=format!("toast toast--{}", toast.kind.css_modifier())
                                role="status"
                                on:click=move |_| notifications.update(|n| n.dismiss(&id))
                            >
                                {toast.message}
                            </div>
                        }
                    })
                    .collect::<Vec<_>>()
            }}
        </div>
    }
}
