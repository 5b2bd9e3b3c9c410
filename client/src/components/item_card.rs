//! Card for a single lost item in the listing grid.

#[cfg(test)]
#[path = "item_card_test.rs"]
mod item_card_test;

use leptos::prelude::*;

use crate::net::types::Item;

/// Calendar date portion of an ISO-8601 timestamp.
fn display_date(raw: &str) -> &str {
    raw.split_once('T').map_or(raw, |(date, _)| date)
}

/// Title to show, falling back to the category for untitled reports.
fn display_title(item: &Item) -> String {
    if item.title.trim().is_empty() { format!("Lost {}", item.category.to_lowercase()) } else { item.title.clone() }
}

#[component]
pub fn ItemCard(item: Item) -> impl IntoView {
    let title = display_title(&item);
    let alt = title.clone();
    let Item { description, category, location, date, image_url, .. } = item;
    let date = date.map(|d| display_date(&d).to_owned());

    view! {
        <article class="item-card">
            {image_url.map(|src| view! { <img class="item-card__image" src=src alt=alt loading="lazy"/> })}
            <div class="item-card__body">
                <h3 class="item-card__title">{title}</h3>
                <p class="item-card__meta">
                    <span class="item-card__category">{category}</span>
                    " · "
                    <span class="item-card__location">{location}</span>
                </p>
                {date.map(|d| view! { <p class="item-card__date">"Lost on " {d}</p> })}
                {(!description.is_empty()).then(|| view! { <p class="item-card__description">{description}</p> })}
            </div>
        </article>
    }
}
