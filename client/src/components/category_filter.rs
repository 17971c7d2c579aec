//! Row of category filter buttons with available-count badges.
//!
//! Used twice: by the catalog controller for the main filter and by the map
//! view for its local filter. The bar owns no state; callers pass the active
//! filter and the counts and get changes back through `on_change`.

use fleet::CategoryFilter;
use leptos::prelude::*;

#[component]
pub fn CategoryFilterBar(
    #[prop(into)] active: Signal<CategoryFilter>,
    #[prop(into)] counts: Signal<[(CategoryFilter, usize); 4]>,
    on_change: Callback<CategoryFilter>,
    #[prop(optional)] compact: bool,
) -> impl IntoView {
    view! {
        <div class="category-filter" class:category-filter--compact=compact role="group">
            {CategoryFilter::ALL
                .into_iter()
                .enumerate()
                .map(|(slot, filter)| {
                    let count = move || counts.get()[slot].1;
                    view! {
                        <button
                            class="category-filter__btn"
                            class:category-filter__btn--active=move || active.get() == filter
                            attr:data-accent=filter.accent()
                            on:click=move |_| on_change.run(filter)
                        >
                            <span class="category-filter__glyph" aria-hidden="true">{filter.glyph()}</span>
                            <span class="category-filter__label">{filter.label()}</span>
                            <span class="category-filter__count">{count}</span>
                        </button>
                    }
                })
                .collect_view()}
        </div>
    }
}
