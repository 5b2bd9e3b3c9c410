//! Collapsible location/category filter panel.
//!
//! The panel only renders and emits events; `LostItemsPage` owns the
//! selection and decides whether a change needs a refetch.

use leptos::prelude::*;

use crate::constants::{CATEGORIES, LOCATIONS};
use crate::state::lost_items::FilterSelection;

#[component]
pub fn FilterPanel(
    #[prop(into)] open: Signal<bool>,
    #[prop(into)] selection: Signal<FilterSelection>,
    on_toggle_open: Callback<()>,
    on_toggle_location: Callback<String>,
    on_toggle_category: Callback<String>,
    on_set_locations: Callback<Vec<String>>,
    on_set_categories: Callback<Vec<String>>,
    on_clear: Callback<()>,
) -> impl IntoView {
    let locations = Signal::derive(move || selection.with(|s| s.locations.clone()));
    let categories = Signal::derive(move || selection.with(|s| s.categories.clone()));
    let selected_count = move || selection.with(|s| s.locations.len() + s.categories.len());

    view! {
        <section class="filter-panel">
            <button
                class="filter-panel__toggle"
                aria-label="toggle filters"
                aria-expanded=move || open.get().to_string()
                on:click=move |_| on_toggle_open.run(())
            >
                <span class="filter-panel__icon" aria-hidden="true">"⚲"</span>
                " Filters"
                {move || {
                    let n = selected_count();
                    (n > 0).then(|| view! { <span class="filter-panel__badge">{n}</span> })
                }}
                <span class="filter-panel__chevron" aria-hidden="true">
                    {move || if open.get() { "▴" } else { "▾" }}
                </span>
            </button>
            <Show when=move || open.get()>
                <div class="filter-panel__groups">
                    <FilterChips
                        label="Filter by Location"
                        options=LOCATIONS
                        selected=locations
                        on_toggle=on_toggle_location
                        on_set=on_set_locations
                    />
                    <FilterChips
                        label="Filter by Category"
                        options=CATEGORIES
                        selected=categories
                        on_toggle=on_toggle_category
                        on_set=on_set_categories
                    />
                    <button
                        class="btn filter-panel__clear"
                        disabled=move || selected_count() == 0
                        on:click=move |_| on_clear.run(())
                    >
                        "Clear filters"
                    </button>
                </div>
            </Show>
        </section>
    }
}

#[component]
fn FilterChips(
    label: &'static str,
    options: &'static [&'static str],
    #[prop(into)] selected: Signal<Vec<String>>,
    on_toggle: Callback<String>,
    on_set: Callback<Vec<String>>,
) -> impl IntoView {
    let all_selected = move || selected.with(|s| s.len() == options.len());
    let none_selected = move || selected.with(Vec::is_empty);

    view! {
        <fieldset class="filter-panel__group">
            <legend>{label}</legend>
            <div class="filter-panel__bulk">
                <button
                    type="button"
                    class="filter-panel__bulk-action"
                    disabled=all_selected
                    on:click=move |_| on_set.run(options.iter().map(|&o| o.to_owned()).collect())
                >
                    "All"
                </button>
                <button
                    type="button"
                    class="filter-panel__bulk-action"
                    disabled=none_selected
                    on:click=move |_| on_set.run(Vec::new())
                >
                    "None"
                </button>
            </div>
            {options
                .iter()
                .map(|&option| {
                    let is_selected = move || selected.with(|s| s.iter().any(|v| v == option));
                    view! {
                        <button
                            type="button"
                            class="filter-chip"
                            class:filter-chip--selected=is_selected
                            aria-pressed=move || is_selected().to_string()
                            on:click=move |_| on_toggle.run(option.to_owned())
                        >
                            {option}
                        </button>
                    }
                })
                .collect::<Vec<_>>()}
        </fieldset>
    }
}
