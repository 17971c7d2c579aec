//! Stack of transient notifications.

use leptos::prelude::*;

use crate::state::toast::{ToastKind, ToastState};

/// Renders queued toasts. Each one dismisses on click or after
/// `TOAST_LIFETIME_MS` in the browser.
#[component]
pub fn Toaster() -> impl IntoView {
    let toasts = expect_context::<RwSignal<ToastState>>();

    #[cfg(feature = "hydrate")]
    {
        use crate::state::toast::TOAST_LIFETIME_MS;
        use gloo_timers::callback::Timeout;

        // Ids are increasing, so the highest one scheduled marks the boundary.
        let scheduled = StoredValue::new(0_u64);
        Effect::new(move || {
            let fresh: Vec<u64> = toasts.with(|t| t.items.iter().map(|toast| toast.id).filter(|id| *id > scheduled.get_value()).collect());
            for id in fresh {
                scheduled.set_value(id);
                Timeout::new(TOAST_LIFETIME_MS, move || {
                    toasts.try_update(|t| t.dismiss(id));
                })
                .forget();
            }
        });
    }

    view! {
        <div class="toaster" aria-live="polite">
            {move || {
                toasts
                    .get()
                    .items
                    .into_iter()
                    .map(|toast| {
                        let id = toast.id;
                        view! {
                            <div
                                class="toast"
                                class:toast--success=toast.kind == ToastKind::Success
                                class:toast--error=toast.kind == ToastKind::Error
                                role="status"
                                on:click=move |_| toasts.update(|t| t.dismiss(id))
                            >
                                {toast.message}
                            </div>
                        }
                    })
                    .collect::<Vec<_>>()
            }}
        </div>
    }
}
