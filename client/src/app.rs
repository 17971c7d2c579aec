//! Application shell and root component.
//!
//! SYSTEM CONTEXT
//! ==============
//! `shell` is the SSR document; the host calls it with `MapSettings` already
//! in context. `App` provides the page state signals and the router.

use leptos::prelude::*;
use leptos_meta::{MetaTags, Stylesheet, Title, provide_meta_context};
use leptos_router::{
    StaticSegment,
    components::{Route, Router, Routes},
};

use crate::components::toaster::Toaster;
use crate::pages::home::HomePage;
use crate::state::catalog::CatalogState;
use crate::state::order::OrderDialog;
use crate::state::toast::ToastState;
use crate::util::map_settings;

/// HTML document rendered by the server around `App`.
pub fn shell(options: LeptosOptions) -> impl IntoView {
    let settings_json = map_settings::encode(&map_settings::current());
    view! {
        <!DOCTYPE html>
        <html lang="ru">
            <head>
                <meta charset="utf-8" />
                <meta name="viewport" content="width=device-width, initial-scale=1" />
                <meta name=map_settings::META_NAME content=settings_json />
                <AutoReload options=options.clone() />
                <HydrationScripts options />
                <MetaTags />
            </head>
            <body>
                <App />
            </body>
        </html>
    }
}

/// Root component: context providers, head tags and routes.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();
    provide_context(map_settings::current());
    provide_context(RwSignal::new(CatalogState::default()));
    provide_context(RwSignal::new(OrderDialog::default()));
    provide_context(RwSignal::new(ToastState::default()));

    view! {
        <Stylesheet id="leptos" href="/pkg/spectech.css" />
        <Title text="СпецТехника: аренда спецтехники" />
        <Router>
            <main class="app">
                <Routes fallback=|| view! { <p class="app__not-found">"Страница не найдена"</p> }>
                    <Route path=StaticSegment("") view=HomePage />
                </Routes>
            </main>
            <Toaster />
        </Router>
    }
}
