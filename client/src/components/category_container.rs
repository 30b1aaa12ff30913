//! Dashboard panel showing how products are spread across categories.
//!
//! SYSTEM CONTEXT
//! ==============
//! Fetches the full product list once after hydration and aggregates it
//! client-side. During SSR the panel renders in its loading state.

use leptos::prelude::*;

use crate::components::doughnut_chart::DoughnutChart;
use crate::state::categories::CategoryChartState;

#[component]
pub fn CategoryContainer() -> impl IntoView {
    let chart = RwSignal::new(CategoryChartState { loading: true, ..CategoryChartState::default() });

    #[cfg(feature = "hydrate")]
    leptos::task::spawn_local(async move {
        chart.update(CategoryChartState::begin_load);
        let result = crate::net::api::fetch_products().await;
        if let Err(err) = &result {
            log::warn!("category chart load failed: {err}");
        }
        chart.update(|c| c.finish_load(result));
    });

    view! {
        <section class="category-container">
            <h2 class="category-container__title">"Kategori Dağılımı"</h2>
            {move || {
                let state = chart.get();
                if state.loading {
                    view! { <p class="category-container__status">"Yükleniyor..."</p> }.into_any()
                } else if let Some(message) = state.error {
                    view! { <p class="category-container__error" role="alert">{message}</p> }.into_any()
                } else {
                    let total = state.breakdown.total();
                    view! {
                        <DoughnutChart labels=state.breakdown.labels values=state.breakdown.values/>
                        <p class="category-container__total">{format!("Toplam ürün: {total}")}</p>
                    }
                    .into_any()
                }
            }}
        </section>
    }
}
