//! Modal order form for the selected equipment.
//!
//! DESIGN
//! ======
//! All transitions go through `OrderDialog`: edits update the draft, cancel
//! (button, backdrop click or `Escape`) drops it, and submit either closes the
//! dialog with a success toast or leaves it open with an error toast.

use fleet::OrderField;
use fleet::format::format_rubles;
use leptos::prelude::*;

use crate::state::order::{OrderDialog, error_notice, is_cancel_key, total_label};
use crate::state::toast::ToastState;

#[derive(Clone, Copy)]
struct FieldDef {
    field: OrderField,
    input_type: &'static str,
    placeholder: &'static str,
}

const FIELDS: &[FieldDef] = &[
    FieldDef { field: OrderField::RenterName, input_type: "text", placeholder: "Иван Иванов" },
    FieldDef { field: OrderField::Phone, input_type: "tel", placeholder: "+7 (999) 123-45-67" },
    FieldDef { field: OrderField::StartDate, input_type: "date", placeholder: "" },
    FieldDef { field: OrderField::Duration, input_type: "number", placeholder: "1" },
];

#[component]
pub fn OrderDialogModal() -> impl IntoView {
    let dialog = expect_context::<RwSignal<OrderDialog>>();
    let toasts = expect_context::<RwSignal<ToastState>>();

    let cancel = Callback::new(move |()| dialog.update(OrderDialog::cancel));
    let submit = Callback::new(move |()| {
        let mut next = dialog.get_untracked();
        match next.submit() {
            Ok(confirmation) => {
                #[cfg(feature = "hydrate")]
                log::info!(
                    "order confirmed: {} for {} shift(s), total {}",
                    confirmation.equipment_name,
                    confirmation.request.shifts,
                    confirmation.total
                );
                dialog.set(next);
                toasts.update(|t| {
                    t.success(confirmation.message());
                });
            }
            Err(err) => {
                #[cfg(feature = "hydrate")]
                log::debug!("order rejected: {err}");
                toasts.update(|t| {
                    t.error(error_notice(&err));
                });
            }
        }
    });

    // Focus the dialog on mount so Escape reaches it before any input is touched.
    let panel = NodeRef::<leptos::html::Div>::new();
    #[cfg(feature = "hydrate")]
    Effect::new(move || {
        if let Some(el) = panel.get() {
            let _ = el.focus();
        }
    });

    let equipment_name = move || dialog.with(|d| d.equipment().map(|r| r.name.clone()).unwrap_or_default());
    let price_per_shift = move || dialog.with(|d| d.quote().map(|q| format_rubles(q.price_per_shift)).unwrap_or_default());
    let shifts = move || dialog.with(|d| d.quote().map_or(0, |q| q.shifts));
    let total = move || dialog.with(|d| total_label(d.quote()));

    view! {
        <div class="dialog-backdrop" on:click=move |_| cancel.run(())>
            <div
                class="dialog order-dialog"
                role="dialog"
                aria-modal="true"
                tabindex="-1"
                node_ref=panel
                on:click=move |ev| ev.stop_propagation()
                on:keydown=move |ev: leptos::ev::KeyboardEvent| {
                    if is_cancel_key(&ev.key()) {
                        ev.prevent_default();
                        cancel.run(());
                    }
                }
            >
                <h2 class="order-dialog__title">"Оформление заказа"</h2>
                <p class="order-dialog__subtitle">{equipment_name}</p>
                <form
                    class="order-dialog__form"
                    on:submit=move |ev: leptos::ev::SubmitEvent| {
                        ev.prevent_default();
                        submit.run(());
                    }
                >
                    {FIELDS
                        .iter()
                        .map(|def| {
                            let field = def.field;
                            view! {
                                <label class="dialog__label">
                                    {field.label()}
                                    <input
                                        class="dialog__input"
                                        name=field.as_str()
                                        type=def.input_type
                                        placeholder=def.placeholder
                                        min=(field == OrderField::Duration).then_some("1")
                                        prop:value=move || dialog.with(|d| d.field(field))
                                        on:input=move |ev| {
                                            let value = event_target_value(&ev);
                                            dialog.update(|d| d.edit(field, value));
                                        }
                                    />
                                </label>
                            }
                        })
                        .collect_view()}
                    <div class="order-dialog__summary">
                        <div class="order-dialog__row">
                            <span>"Цена за смену:"</span>
                            <span>{price_per_shift}</span>
                        </div>
                        <div class="order-dialog__row">
                            <span>"Количество смен:"</span>
                            <span>{shifts}</span>
                        </div>
                        <div class="order-dialog__row order-dialog__row--total">
                            <span>"Итого:"</span>
                            <span class="order-dialog__total">{total}</span>
                        </div>
                    </div>
                    <div class="dialog__actions">
                        <button class="btn" type="button" on:click=move |_| cancel.run(())>
                            "Отмена"
                        </button>
                        <button class="btn btn--primary" type="submit">
                            "Оплатить"
                        </button>
                    </div>
                </form>
            </div>
        </div>
    }
}
