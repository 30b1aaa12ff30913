//! Root application component with routing and context providers.

use leptos::prelude::*;
use leptos_meta::{MetaTags, Stylesheet, Title, provide_meta_context};
use leptos_router::{
    ParamSegment, StaticSegment,
    components::{ParentRoute, Route, Router, Routes},
};

use crate::components::navbar::Navbar;
use crate::components::toasts::Toasts;
use crate::pages::{
    dashboard::DashboardPage, product_create::ProductCreatePage, product_edit::ProductEditPage,
    products::ProductsPage,
    users::{UserDetail, UsersPage},
};
use crate::state::notifications::NotificationsState;

/// HTML shell rendered on the server for SSR + hydration.
pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="tr">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <AutoReload options=options.clone()/>
                <HydrationScripts options/>
                <MetaTags/>
            </head>
            <body>
                <App/>
            </body>
        </html>
    }
}

/// Root application component.
///
/// Provides the toast stack context and sets up client-side routing.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let notifications = RwSignal::new(NotificationsState::default());
    provide_context(notifications);

    view! {
        <Stylesheet id="leptos" href="/pkg/catalog-admin.css"/>
        <Title text="Katalog Yönetimi"/>

        <Router>
            <div class="layout">
                <Navbar/>
                <main class="layout__main">
                    <Routes fallback=|| "Sayfa bulunamadı.".into_view()>
                        <Route path=StaticSegment("") view=DashboardPage/>
                        <Route path=StaticSegment("product-cart") view=ProductsPage/>
                        <Route path=(StaticSegment("products"), StaticSegment("create")) view=ProductCreatePage/>
                        <Route
                            path=(StaticSegment("products"), StaticSegment("edit"), ParamSegment("id"))
                            view=ProductEditPage
                        />
                        <ParentRoute path=StaticSegment("users") view=UsersPage>
                            <Route path=ParamSegment("id") view=UserDetail/>
                            <Route path=StaticSegment("") view=|| ()/>
                        </ParentRoute>
                    </Routes>
                </main>
            </div>
            <Toasts/>
        </Router>
    }
}
