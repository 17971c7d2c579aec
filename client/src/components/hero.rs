//! Landing banner with shortcuts into the catalog and the map.

use leptos::prelude::*;

use crate::state::catalog::ViewTab;

#[component]
pub fn Hero(on_tab: Callback<ViewTab>) -> impl IntoView {
    view! {
        <section class="hero">
            <div class="hero__content">
                <h1 class="hero__title">"Аренда спецтехники в один клик"</h1>
                <p class="hero__lead">
                    "Найдите нужную технику на карте, оформите заказ онлайн и оплатите удобным способом"
                </p>
                <div class="hero__actions">
                    <a class="btn btn--primary btn--lg" href="#equipment" on:click=move |_| on_tab.run(ViewTab::Catalog)>
                        "Смотреть каталог"
                    </a>
                    <a class="btn btn--outline btn--lg" href="#equipment" on:click=move |_| on_tab.run(ViewTab::Map)>
                        "Открыть карту"
                    </a>
                </div>
            </div>
        </section>
    }
}
