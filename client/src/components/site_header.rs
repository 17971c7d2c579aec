//! Top bar with brand, section navigation and support contact.

use leptos::prelude::*;

use crate::state::catalog::ViewTab;

#[derive(Clone, Copy)]
struct NavDef {
    glyph: &'static str,
    label: &'static str,
    tab: Option<ViewTab>,
}

const NAV_ITEMS: &[NavDef] = &[
    NavDef { glyph: "🗺️", label: "Карта", tab: Some(ViewTab::Map) },
    NavDef { glyph: "🛒", label: "Заказы", tab: None },
    NavDef { glyph: "♡", label: "Избранное", tab: None },
    NavDef { glyph: "👤", label: "Профиль", tab: None },
];

pub const SUPPORT_PHONE: &str = "+7 (999) 123-45-67";

#[component]
pub fn SiteHeader(on_tab: Callback<ViewTab>) -> impl IntoView {
    view! {
        <header class="site-header">
            <a class="site-header__brand" href="/">
                <span class="site-header__logo" aria-hidden="true">"🏗️"</span>
                <span class="site-header__name">"СпецТехника"</span>
            </a>
            <nav class="site-header__nav">
                {NAV_ITEMS
                    .iter()
                    .map(|item| {
                        let item = *item;
                        view! {
                            <a
                                class="site-header__link"
                                href="#equipment"
                                on:click=move |_| {
                                    if let Some(tab) = item.tab {
                                        on_tab.run(tab);
                                    }
                                }
                            >
                                <span class="site-header__glyph" aria-hidden="true">{item.glyph}</span>
                                {item.label}
                            </a>
                        }
                    })
                    .collect_view()}
            </nav>
            <a class="btn btn--primary site-header__support" href=format!("tel:{}", SUPPORT_PHONE.replace([' ', '(', ')', '-'], ""))>
                "☎ Поддержка"
            </a>
        </header>
    }
}
