//! Filter/pagination/fetch state machine behind the lost-items page.
//!
//! DESIGN
//! ======
//! Every user action is an explicit transition on `LostItemsState`. Actions
//! that change the `(locations, categories, page)` tuple return a
//! `FetchTicket` carrying a snapshot of that tuple plus a request generation.
//! The page runs the ticket through the item service and hands the outcome
//! back to `finish_fetch`, which drops any outcome whose generation is no
//! longer current. That keeps the grid consistent with the latest selection
//! even when responses resolve out of order.
//!
//! Filter changes reset the page to 1 so a narrowed result set is never
//! requested at a page index from the previous, wider one.

#[cfg(test)]
#[path = "lost_items_test.rs"]
mod lost_items_test;

use crate::constants::{CATEGORIES, LOCATIONS};
use crate::net::error::ApiError;
use crate::net::service::ItemService;
use crate::net::types::{Item, ItemPage, ItemQuery};

pub const FIRST_PAGE: u32 = 1;

pub const EMPTY_MESSAGE: &str =
    "No items found. Try adjusting the filters or check back later for new listings.";

/// Selected filter values, in selection order, without duplicates.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct FilterSelection {
    pub locations: Vec<String>,
    pub categories: Vec<String>,
}

impl FilterSelection {
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.locations.is_empty() && self.categories.is_empty()
    }
}

/// A fetch the page must run: the query snapshot and its generation.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FetchTicket {
    pub generation: u64,
    pub query: ItemQuery,
}

/// Result of running a `FetchTicket` against the item service.
#[derive(Clone, Debug, PartialEq)]
pub struct FetchOutcome {
    pub generation: u64,
    pub result: Result<ItemPage, ApiError>,
}

/// What the item area should render.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Listing {
    Loading,
    Failed(String),
    Empty,
    Items,
}

#[derive(Clone, Debug, PartialEq)]
pub struct LostItemsState {
    pub items: Vec<Item>,
    pub loading: bool,
    pub page: u32,
    pub total_pages: u32,
    pub filters: FilterSelection,
    pub filters_open: bool,
    pub error: Option<String>,
    generation: u64,
}

impl Default for LostItemsState {
    fn default() -> Self {
        Self {
            items: Vec::new(),
            loading: false,
            page: FIRST_PAGE,
            total_pages: 1,
            filters: FilterSelection::default(),
            filters_open: false,
            error: None,
            generation: 0,
        }
    }
}

impl LostItemsState {
    /// Current `(locations, categories, page)` tuple.
    #[must_use]
    pub fn query(&self) -> ItemQuery {
        ItemQuery {
            locations: self.filters.locations.clone(),
            categories: self.filters.categories.clone(),
            page: self.page,
        }
    }

    #[must_use]
    pub fn generation(&self) -> u64 {
        self.generation
    }

    /// Start a fetch for the current tuple. Supersedes any fetch in flight.
    pub fn begin_fetch(&mut self) -> FetchTicket {
        self.generation += 1;
        self.loading = true;
        self.error = None;
        FetchTicket { generation: self.generation, query: self.query() }
    }

    /// Apply a fetch outcome. Returns `false` if it was stale and ignored.
    pub fn finish_fetch(&mut self, outcome: FetchOutcome) -> bool {
        if outcome.generation != self.generation {
            return false;
        }
        match outcome.result {
            Ok(page) => {
                self.items = page.items;
                self.total_pages = page.total_pages;
                self.error = None;
            }
            Err(err) => {
                self.items.clear();
                self.error = Some(err.to_string());
            }
        }
        self.loading = false;
        true
    }

    /// Add or remove a location. `None` if the value is not a known location.
    pub fn toggle_location(&mut self, value: &str) -> Option<FetchTicket> {
        if !LOCATIONS.contains(&value) {
            return None;
        }
        toggle_value(&mut self.filters.locations, value);
        Some(self.restart_from_first_page())
    }

    /// Add or remove a category. `None` if the value is not a known category.
    pub fn toggle_category(&mut self, value: &str) -> Option<FetchTicket> {
        if !CATEGORIES.contains(&value) {
            return None;
        }
        toggle_value(&mut self.filters.categories, value);
        Some(self.restart_from_first_page())
    }

    /// Replace the location selection wholesale. Unknown values are dropped.
    pub fn set_locations(&mut self, values: Vec<String>) -> Option<FetchTicket> {
        let next = normalize(values, LOCATIONS);
        if next == self.filters.locations {
            return None;
        }
        self.filters.locations = next;
        Some(self.restart_from_first_page())
    }

    /// Replace the category selection wholesale. Unknown values are dropped.
    pub fn set_categories(&mut self, values: Vec<String>) -> Option<FetchTicket> {
        let next = normalize(values, CATEGORIES);
        if next == self.filters.categories {
            return None;
        }
        self.filters.categories = next;
        Some(self.restart_from_first_page())
    }

    /// Drop every selected filter.
    pub fn clear_filters(&mut self) -> Option<FetchTicket> {
        if self.filters.is_empty() {
            return None;
        }
        self.filters = FilterSelection::default();
        Some(self.restart_from_first_page())
    }

    /// Move to `page`. The upper bound is the server's concern.
    pub fn set_page(&mut self, page: u32) -> Option<FetchTicket> {
        if page < FIRST_PAGE || page == self.page {
            return None;
        }
        self.page = page;
        Some(self.begin_fetch())
    }

    pub fn toggle_filters(&mut self) {
        self.filters_open = !self.filters_open;
    }

    #[must_use]
    pub fn listing(&self) -> Listing {
        if self.loading {
            Listing::Loading
        } else if let Some(message) = &self.error {
            Listing::Failed(message.clone())
        } else if self.items.is_empty() {
            Listing::Empty
        } else {
            Listing::Items
        }
    }

    /// Count line shown above the grid; hidden while loading or after a failure.
    #[must_use]
    pub fn summary(&self) -> Option<String> {
        if self.loading || self.error.is_some() {
            return None;
        }
        let count = self.items.len();
        if self.total_pages > 1 {
            Some(format!("Showing {count} items on page {} of {}", self.page, self.total_pages))
        } else {
            Some(format!("Showing {count} items"))
        }
    }

    fn restart_from_first_page(&mut self) -> FetchTicket {
        self.page = FIRST_PAGE;
        self.begin_fetch()
    }
}

/// Run `ticket` against `service`, tagging the result with its generation.
pub async fn load_items(service: &dyn ItemService, ticket: FetchTicket) -> FetchOutcome {
    let FetchTicket { generation, query } = ticket;
    let result = service.fetch_items(query).await;
    FetchOutcome { generation, result }
}

fn toggle_value(values: &mut Vec<String>, value: &str) {
    if let Some(pos) = values.iter().position(|v| v == value) {
        values.remove(pos);
    } else {
        values.push(value.to_owned());
    }
}

fn normalize(values: Vec<String>, options: &[&str]) -> Vec<String> {
    let mut out: Vec<String> = Vec::with_capacity(values.len());
    for value in values {
        if options.contains(&value.as_str()) && !out.contains(&value) {
            out.push(value);
        }
    }
    out
}
