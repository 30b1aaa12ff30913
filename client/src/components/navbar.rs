//! Side navigation with a checkbox-driven collapse toggle.

use leptos::prelude::*;
use leptos_router::hooks::use_location;

use crate::util::nav::{SECTIONS, is_active};

/// Static section list; no data dependency.
#[component]
pub fn Navbar() -> impl IntoView {
    let expanded = RwSignal::new(false);
    let location = use_location();

    view! {
        <nav class="navbar" class:navbar--expanded=move || expanded.get()>
            <div class="navbar__inner">
                <label class="navbar__toggle" for="navbar-menu" title="Menü">
                    <input
                        id="navbar-menu"
                        class="navbar__toggle-input"
                        type="checkbox"
                        prop:checked=move || expanded.get()
                        on:change=move |_| expanded.update(|open| *open = !*open)
                    />
                    <span class="navbar__toggle-glyph" aria-hidden="true">"☰"</span>
                </label>
                <ul class="navbar__sections">
                    {SECTIONS
                        .iter()
                        .copied()
                        .map(|section| {
                            view! {
                                <li>
                                    <a
                                        class="navbar__link"
                                        class:navbar__link--active=move || {
                                            location.pathname.with(|path| is_active(&section, path))
                                        }
                                        href=section.path
                                        title=section.label
                                    >
                                        <span class="navbar__glyph" aria-hidden="true">{section.glyph}</span>
                                        <span class="navbar__label">{section.label}</span>
                                    </a>
                                </li>
                            }
                        })
                        .collect::<Vec<_>>()}
                </ul>
            </div>
        </nav>
    }
}
