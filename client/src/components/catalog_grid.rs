//! Grid presentation of the catalog controller's visible records.

use fleet::{EquipmentId, EquipmentRecord};
use leptos::prelude::*;

use super::equipment_card::EquipmentCard;

#[component]
pub fn CatalogGrid(#[prop(into)] records: Signal<Vec<EquipmentRecord>>, on_select: Callback<EquipmentId>) -> impl IntoView {
    view! {
        <Show
            when=move || records.with(|r| !r.is_empty())
            fallback=|| view! { <p class="catalog-grid__empty">"Нет техники в этой категории"</p> }
        >
            <div class="catalog-grid">
                {move || {
                    records
                        .get()
                        .into_iter()
                        .enumerate()
                        .map(|(index, record)| view! { <EquipmentCard record=record on_select=on_select index=index /> })
                        .collect::<Vec<_>>()
                }}
            </div>
        </Show>
    }
}
