//! Horizontal strip of orderable records under the map.

use fleet::format::{format_rubles, short_location};
use fleet::{EquipmentId, EquipmentRecord};
use leptos::prelude::*;

/// One compact card per record. The card matching `selected` is highlighted.
#[component]
pub fn FleetStrip(
    #[prop(into)] records: Signal<Vec<EquipmentRecord>>,
    #[prop(into)] selected: Signal<Option<EquipmentId>>,
    on_select: Callback<EquipmentId>,
) -> impl IntoView {
    view! {
        <div class="fleet-strip">
            {move || {
                records
                    .get()
                    .into_iter()
                    .map(|record| {
                        let id = record.id;
                        view! {
                            <div
                                class="fleet-strip__card"
                                class:fleet-strip__card--selected=move || selected.get() == Some(id)
                                on:click=move |_| on_select.run(id)
                            >
                                <span class="fleet-strip__glyph" aria-hidden="true">{record.image.clone()}</span>
                                <div class="fleet-strip__info">
                                    <div class="fleet-strip__name">{record.name.clone()}</div>
                                    <div class="fleet-strip__location">
                                        "📍 " {short_location(&record.location).to_owned()}
                                    </div>
                                </div>
                                <div class="fleet-strip__price">{format_rubles(record.price)}</div>
                                <button
                                    class="btn btn--primary btn--sm"
                                    on:click=move |ev: leptos::ev::MouseEvent| {
                                        ev.stop_propagation();
                                        on_select.run(id);
                                    }
                                >
                                    "Заказать"
                                </button>
                            </div>
                        }
                    })
                    .collect::<Vec<_>>()
            }}
        </div>
    }
}
