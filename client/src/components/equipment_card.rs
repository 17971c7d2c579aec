//! Catalog card for one equipment record.

use fleet::format::format_rubles;
use fleet::marker::availability_label;
use fleet::{EquipmentId, EquipmentRecord};
use leptos::prelude::*;

/// Card with glyph, availability badge, details and an order button.
/// Clicking anywhere on the card selects the record; the button is disabled
/// for busy records.
#[component]
pub fn EquipmentCard(record: EquipmentRecord, on_select: Callback<EquipmentId>, #[prop(optional)] index: usize) -> impl IntoView {
    let id = record.id;
    let available = record.available;
    let style = format!("animation-delay: {}ms", index * 100);

    view! {
        <article
            class="equipment-card"
            class:equipment-card--busy=!available
            style=style
            on:click=move |_| on_select.run(id)
        >
            <div class="equipment-card__media" attr:data-accent=record.category.accent()>
                <span class="equipment-card__glyph" aria-hidden="true">{record.image.clone()}</span>
                <span
                    class="badge equipment-card__badge"
                    class:badge--success=available
                    class:badge--danger=!available
                >
                    {availability_label(available)}
                </span>
            </div>
            <div class="equipment-card__body">
                <h3 class="equipment-card__title">{record.name.clone()}</h3>
                <p class="equipment-card__location">"📍 " {record.location.clone()}</p>
                <p class="equipment-card__description">{record.description.clone()}</p>
                <div class="equipment-card__footer">
                    <div class="equipment-card__price">
                        <span class="equipment-card__amount">{format_rubles(record.price)}</span>
                        <span class="equipment-card__unit">"за смену"</span>
                    </div>
                    <button
                        class="btn btn--primary equipment-card__order"
                        disabled=!available
                        on:click=move |ev: leptos::ev::MouseEvent| {
                            ev.stop_propagation();
                            on_select.run(id);
                        }
                    >
                        "Заказать"
                    </button>
                </div>
            </div>
        </article>
    }
}
