//! Rental landing page: catalog and map of construction equipment.
//!
//! SYSTEM CONTEXT
//! ==============
//! This page is the catalog/map view controller. It owns the wiring between
//! the filter bar, the two presentations and the order dialog. Cards, strip
//! cards and map markers all report an `EquipmentId` to the same select
//! callback, which resolves it against the canonical catalog.

use fleet::{Catalog, CategoryFilter, EquipmentId, EquipmentRecord};
use leptos::prelude::*;

use crate::components::catalog_grid::CatalogGrid;
use crate::components::category_filter::CategoryFilterBar;
use crate::components::hero::Hero;
use crate::components::map_view::MapView;
use crate::components::order_dialog::OrderDialogModal;
use crate::components::site_footer::SiteFooter;
use crate::components::site_header::SiteHeader;
use crate::state::catalog::{CatalogState, ViewTab, select_equipment};
use crate::state::order::{OrderDialog, error_notice};
use crate::state::toast::ToastState;

#[component]
pub fn HomePage() -> impl IntoView {
    let catalog_state = expect_context::<RwSignal<CatalogState>>();
    let dialog = expect_context::<RwSignal<OrderDialog>>();
    let toasts = expect_context::<RwSignal<ToastState>>();

    // Memos keep selection changes from re-rendering the presentations.
    let tab = Memo::new(move |_| catalog_state.with(|s| s.tab));
    let filter = Memo::new(move |_| catalog_state.with(|s| s.filter));
    let visible = Memo::new(move |_| {
        catalog_state.with(|s| s.visible(Catalog::standard().records()).into_iter().cloned().collect::<Vec<EquipmentRecord>>())
    });
    let counts = Signal::derive(|| CatalogState::counts(Catalog::standard().records()));

    let on_tab = Callback::new(move |next: ViewTab| catalog_state.update(|s| s.set_active_tab(next)));
    let on_filter = Callback::new(move |next: CategoryFilter| catalog_state.update(|s| s.set_category_filter(next)));

    let on_select = Callback::new(move |id: EquipmentId| {
        let mut state = catalog_state.get_untracked();
        let mut order = dialog.get_untracked();
        match select_equipment(&mut state, &mut order, Catalog::standard(), id) {
            Ok(()) => {
                catalog_state.set(state);
                dialog.set(order);
            }
            Err(err) => {
                #[cfg(feature = "hydrate")]
                log::debug!("selection rejected: {err}");
                toasts.update(|t| {
                    t.error(error_notice(&err));
                });
            }
        }
    });

    view! {
        <div class="home-page">
            <SiteHeader on_tab=on_tab />
            <Hero on_tab=on_tab />
            <section class="equipment" id="equipment">
                <div class="equipment__header">
                    <h2 class="equipment__title">{move || tab.get().heading()}</h2>
                    <TabToggle active=tab on_change=on_tab />
                </div>
                <CategoryFilterBar active=filter counts=counts on_change=on_filter />
                {move || match tab.get() {
                    ViewTab::Catalog => view! { <CatalogGrid records=visible on_select=on_select /> }.into_any(),
                    ViewTab::Map => view! { <MapView records=visible on_select=on_select /> }.into_any(),
                }}
            </section>
            <SiteFooter />
            <Show when=move || dialog.with(OrderDialog::is_open)>
                <OrderDialogModal />
            </Show>
        </div>
    }
}

#[derive(Clone, Copy)]
struct TabDef {
    tab: ViewTab,
    glyph: &'static str,
    title: &'static str,
}

const TABS: &[TabDef] = &[
    TabDef { tab: ViewTab::Catalog, glyph: "▦", title: "Каталог" },
    TabDef { tab: ViewTab::Map, glyph: "🗺️", title: "Карта" },
];

/// Two-button switch between the grid and the map.
#[component]
fn TabToggle(#[prop(into)] active: Signal<ViewTab>, on_change: Callback<ViewTab>) -> impl IntoView {
    view! {
        <div class="tab-toggle" role="tablist">
            {TABS
                .iter()
                .map(|def| {
                    let def = *def;
                    view! {
                        <button
                            class="tab-toggle__btn"
                            class:tab-toggle__btn--active=move || active.get() == def.tab
                            role="tab"
                            title=def.title
                            on:click=move |_| on_change.run(def.tab)
                        >
                            {def.glyph}
                        </button>
                    }
                })
                .collect_view()}
        </div>
    }
}
