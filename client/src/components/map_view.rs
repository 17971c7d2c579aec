//! Map presentation of the catalog, backed by the external map widget.
//!
//! SYSTEM CONTEXT
//! ==============
//! One component serves every map variant: `MapSettings` decides whether the
//! tracking banner and live drift run and whether the local filter bar shows.
//! The canonical catalog is never written; markers come from the
//! `MapViewState` display copy.
//!
//! DESIGN
//! ======
//! Widget lifecycle and the tracking timer are hydrate-only. Both live in
//! `StoredValue` slots owned by this component and are released in
//! `on_cleanup`, so unmounting the view (tab switch, route change) always
//! cancels the timer and tears the map down. A widget failure leaves the
//! overlays working over a degraded map region; there is no fallback map.

use fleet::{EquipmentId, EquipmentRecord};
use leptos::prelude::*;

use super::category_filter::CategoryFilterBar;
use super::fleet_strip::FleetStrip;
use crate::state::map::{MapViewState, WidgetStatus};
use crate::util::{live_timer, map_settings};

#[component]
pub fn MapView(#[prop(into)] records: Signal<Vec<EquipmentRecord>>, on_select: Callback<EquipmentId>) -> impl IntoView {
    let settings = map_settings::current();
    let live_tracking = settings.live_tracking;
    let local_filter = settings.local_filter;

    let state = RwSignal::new(MapViewState::new(&records.get_untracked(), live_timer::entropy_seed()));
    let container = NodeRef::<leptos::html::Div>::new();

    // Upstream filter changes replace the display copy.
    let _ = Effect::watch(
        move || records.get(),
        move |list: &Vec<EquipmentRecord>, _, _| state.update(|s| s.reset(list)),
        false,
    );

    let on_pick = Callback::new(move |id: EquipmentId| {
        state.update(|s| s.mark_selected(id));
        on_select.run(id);
    });

    #[cfg(feature = "hydrate")]
    {
        use crate::util::live_timer::LiveTimer;
        use crate::util::ymaps::{self, MapWidget};

        let widget = StoredValue::new_local(None::<MapWidget>);

        Effect::new(move || {
            let Some(element) = container.get() else {
                return;
            };
            if widget.with_value(Option::is_some) {
                return;
            }
            let map_settings = settings.clone();
            ymaps::ensure_loaded(
                &settings,
                move || match MapWidget::create(&element, &map_settings) {
                    Ok(created) => {
                        if let Some(Some(orphan)) = widget.try_set_value(Some(created)) {
                            orphan.destroy();
                            return;
                        }
                        state.try_update(MapViewState::widget_ready);
                    }
                    Err(reason) => {
                        log::warn!("map widget init failed: {reason}");
                        state.try_update(|s| s.widget_failed(reason));
                    }
                },
                move |reason| {
                    log::warn!("map widget unavailable: {reason}");
                    state.try_update(|s| s.widget_failed(reason));
                },
            );
        });

        let markers = Memo::new(move |_| {
            state.with(|s| (s.widget == WidgetStatus::Ready).then(|| s.visible_markers(local_filter)))
        });
        Effect::new(move || {
            let Some(markers) = markers.get() else {
                return;
            };
            widget.update_value(|slot| {
                if let Some(map) = slot {
                    map.set_markers(&markers, move |id| on_pick.run(id));
                }
            });
        });

        if live_tracking {
            let timer = LiveTimer::start(fleet::tracking::TRACKING_PERIOD, move || {
                state.try_update(MapViewState::tick);
            });
            let slot = StoredValue::new_local(Some(timer));
            on_cleanup(move || slot.set_value(None));
        }

        on_cleanup(move || {
            widget.update_value(|slot| {
                if let Some(map) = slot.take() {
                    map.destroy();
                }
            });
        });
    }

    let local_active = Signal::derive(move || state.with(|s| s.local_filter));
    let local_counts = Signal::derive(move || state.with(MapViewState::counts));
    let on_local_filter = Callback::new(move |filter| state.update(|s| s.set_local_filter(filter)));
    let strip = Signal::derive(move || state.with(|s| s.strip(local_filter).into_iter().cloned().collect::<Vec<_>>()));
    let selected = Signal::derive(move || state.with(|s| s.selected_marker));

    view! {
        <div class="map-view">
            <div class="map-view__canvas" node_ref=container></div>
            {move || match state.with(|s| s.widget.clone()) {
                WidgetStatus::Loading => view! { <div class="map-view__status">"Загрузка карты…"</div> }.into_any(),
                WidgetStatus::Ready => ().into_any(),
                WidgetStatus::Failed(_) => {
                    view! {
                        <div class="map-view__status map-view__status--failed">
                            <div class="map-view__status-glyph" aria-hidden="true">"🗺️"</div>
                            <h3>"Карта недоступна"</h3>
                            <p>"Не удалось загрузить интерактивную карту. Техника доступна в списке ниже."</p>
                        </div>
                    }
                        .into_any()
                }
            }}
            <div class="map-view__overlay">
                <Show when=move || live_tracking>
                    <div class="map-view__tracking">
                        <div>
                            <h3 class="map-view__tracking-title">"Отслеживание ГЛОНАСС"</h3>
                            <p class="map-view__tracking-note">"Автообновление каждые 30 секунд"</p>
                        </div>
                        <span class="badge badge--success">"📡 Online"</span>
                    </div>
                </Show>
                <Show when=move || local_filter>
                    <CategoryFilterBar active=local_active counts=local_counts on_change=on_local_filter compact=true />
                </Show>
            </div>
            <FleetStrip records=strip selected=selected on_select=on_pick />
        </div>
    }
}
