//! Page selector shown above and below the lost-items grid.

#[cfg(test)]
#[path = "pagination_test.rs"]
mod pagination_test;

use leptos::prelude::*;

/// One slot in the page selector.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PageSlot {
    Page(u32),
    Gap,
}

/// First, last, and current ±1, with a gap marker wherever pages are skipped.
/// A gap that would hide a single page shows that page instead.
#[must_use]
pub fn page_window(current: u32, total: u32) -> Vec<PageSlot> {
    if total == 0 {
        return Vec::new();
    }
    let current = current.clamp(1, total);
    let mut pages = vec![1, current.saturating_sub(1).max(1), current, (current + 1).min(total), total];
    pages.sort_unstable();
    pages.dedup();

    let mut slots = Vec::with_capacity(pages.len() + 2);
    let mut prev: Option<u32> = None;
    for page in pages {
        if let Some(prev) = prev {
            match page - prev {
                1 => {}
                2 => slots.push(PageSlot::Page(prev + 1)),
                _ => slots.push(PageSlot::Gap),
            }
        }
        slots.push(PageSlot::Page(page));
        prev = Some(page);
    }
    slots
}

#[component]
pub fn Pagination(
    #[prop(into)] page: Signal<u32>,
    #[prop(into)] total_pages: Signal<u32>,
    on_change: Callback<u32>,
) -> impl IntoView {
    view! {
        <nav class="pagination" aria-label="pagination">
            <button
                class="pagination__step"
                aria-label="previous page"
                disabled=move || page.get() <= 1
                on:click=move |_| on_change.run(page.get_untracked().saturating_sub(1))
            >
                "‹"
            </button>
            {move || {
                page_window(page.get(), total_pages.get())
                    .into_iter()
                    .map(|slot| match slot {
                        PageSlot::Page(n) => {
                            view! {
                                <button
                                    class="pagination__page"
                                    class:pagination__page--active=move || page.get() == n
                                    on:click=move |_| on_change.run(n)
                                >
                                    {n}
                                </button>
                            }
                                .into_any()
                        }
                        PageSlot::Gap => view! { <span class="pagination__gap">"…"</span> }.into_any(),
                    })
                    .collect::<Vec<_>>()
            }}
            <button
                class="pagination__step"
                aria-label="next page"
                disabled=move || page.get() >= total_pages.get()
                on:click=move |_| on_change.run(page.get_untracked() + 1)
            >
                "›"
            </button>
        </nav>
    }
}
