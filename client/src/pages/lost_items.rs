//! Lost-items browsing page: filters, card grid and pagination.
//!
//! SYSTEM CONTEXT
//! ==============
//! The page owns a `LostItemsState` signal. UI events call its transitions;
//! any transition that yields a `FetchTicket` is handed to `run_fetch`, which
//! queries the injected `ItemService` and feeds the outcome back. Outcomes
//! from superseded tickets are dropped by the state itself.

use std::sync::Arc;

use leptos::prelude::*;
use leptos_router::hooks::use_navigate;

use crate::components::filter_panel::FilterPanel;
use crate::components::item_card::ItemCard;
use crate::components::pagination::Pagination;
use crate::net::service::ItemService;
use crate::state::lost_items::{EMPTY_MESSAGE, FetchTicket, Listing, LostItemsState};
use crate::util::auth::install_session_expired_redirect;

#[component]
pub fn LostItemsPage(service: Arc<dyn ItemService>) -> impl IntoView {
    // The mount fetch starts before the first render so SSR and hydration
    // both begin in the loading phase.
    let mut initial = LostItemsState::default();
    let mount_ticket = initial.begin_fetch();
    let state = RwSignal::new(initial);

    let expired = RwSignal::new(false);
    install_session_expired_redirect(expired, use_navigate());

    let run_fetch = Callback::new(move |ticket: FetchTicket| {
        #[cfg(feature = "hydrate")]
        {
            let service = service.clone();
            leptos::task::spawn_local(async move {
                let outcome = crate::state::lost_items::load_items(service.as_ref(), ticket).await;
                let session_gone = match &outcome.result {
                    Ok(_) => false,
                    Err(e) => {
                        leptos::logging::warn!("lost items fetch failed: {e}");
                        crate::util::auth::is_session_expired(e)
                    }
                };
                let generation = outcome.generation;
                let applied = state.try_update(|s| s.finish_fetch(outcome)).unwrap_or(false);
                if !applied {
                    leptos::logging::log!("discarded stale lost items response (generation {generation})");
                } else if session_gone {
                    expired.try_set(true);
                }
            });
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (&service, ticket, expired);
        }
    });

    run_fetch.run(mount_ticket);

    let dispatch = move |ticket: Option<Option<FetchTicket>>| {
        if let Some(ticket) = ticket.flatten() {
            run_fetch.run(ticket);
        }
    };

    let on_toggle_open = Callback::new(move |()| state.update(LostItemsState::toggle_filters));
    let on_toggle_location =
        Callback::new(move |value: String| dispatch(state.try_update(|s| s.toggle_location(&value))));
    let on_toggle_category =
        Callback::new(move |value: String| dispatch(state.try_update(|s| s.toggle_category(&value))));
    let on_set_locations =
        Callback::new(move |values: Vec<String>| dispatch(state.try_update(|s| s.set_locations(values))));
    let on_set_categories =
        Callback::new(move |values: Vec<String>| dispatch(state.try_update(|s| s.set_categories(values))));
    let on_clear = Callback::new(move |()| dispatch(state.try_update(LostItemsState::clear_filters)));
    let on_page = Callback::new(move |page: u32| dispatch(state.try_update(|s| s.set_page(page))));

    let filters_open = Signal::derive(move || state.with(|s| s.filters_open));
    let selection = Signal::derive(move || state.with(|s| s.filters.clone()));
    let page = Signal::derive(move || state.with(|s| s.page));
    let total_pages = Signal::derive(move || state.with(|s| s.total_pages));
    let loading = move || state.with(|s| s.loading);

    view! {
        <div class="lost-items-page">
            <h1 class="lost-items-page__title">"Lost Items"</h1>
            <p class="lost-items-page__intro">
                "Browse through items that have been reported as lost. Use the filters to narrow down the list by location or category, and find what you're looking for more efficiently."
            </p>

            <FilterPanel
                open=filters_open
                selection=selection
                on_toggle_open=on_toggle_open
                on_toggle_location=on_toggle_location
                on_toggle_category=on_toggle_category
                on_set_locations=on_set_locations
                on_set_categories=on_set_categories
                on_clear=on_clear
            />

            {move || state.with(LostItemsState::summary).map(|text| view! { <p class="lost-items-page__summary">{text}</p> })}

            {move || match state.with(LostItemsState::listing) {
                Listing::Loading => {
                    view! {
                        <div class="lost-items-page__loading">
                            <span class="spinner" role="progressbar" aria-label="loading"></span>
                        </div>
                    }
                        .into_any()
                }
                Listing::Failed(message) => {
                    view! {
                        <div class="alert alert--error" role="alert">
                            "Could not load items: "
                            {message}
                        </div>
                    }
                        .into_any()
                }
                Listing::Empty => view! { <div class="alert alert--info">{EMPTY_MESSAGE}</div> }.into_any(),
                Listing::Items => {
                    view! {
                        <div class="lost-items-page__grid">
                            {state
                                .with(|s| s.items.clone())
                                .into_iter()
                                .map(|item| view! { <ItemCard item=item/> })
                                .collect::<Vec<_>>()}
                        </div>
                    }
                        .into_any()
                }
            }}

            <Show when=move || !loading()>
                <Pagination page=page total_pages=total_pages on_change=on_page/>
            </Show>
        </div>
    }
}
