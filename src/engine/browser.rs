//! # Browser
//!
//! Filter, sort, and page state of one browsing session. Every filter or sort
//! change sends the session back to page 1; the listing collection itself is
//! never held here.
//!
//! Copyright (c) 2025 Dominic Rodemer. All rights reserved.
//! Licensed under the MIT License.

use super::{apply, View};
use crate::{
    clock::Clock,
    constants::ITEMS_PER_PAGE,
    filter::{DateRange, FilterState, PriceRange, SortBy},
    product::Product,
};

/// Stateful controller around [`apply`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Browser {
    state: FilterState,
    current_page: usize,
    per_page: usize,
}

impl Default for Browser {
    fn default() -> Self {
        Self::new()
    }
}

impl Browser {
    /// Creates a session with default filters and 12 listings per page
    pub fn new() -> Self {
        Self::with_per_page(ITEMS_PER_PAGE)
    }

    /// Creates a session with a custom page size (at least 1)
    pub fn with_per_page(per_page: usize) -> Self {
        Self {
            state: FilterState::default(),
            current_page: 1,
            per_page: per_page.max(1),
        }
    }

    /// Returns the current filter state
    pub const fn state(&self) -> &FilterState {
        &self.state
    }

    /// Returns the current page (1-based)
    pub const fn current_page(&self) -> usize {
        self.current_page
    }

    /// Returns the page size
    pub const fn per_page(&self) -> usize {
        self.per_page
    }

    /// Returns true if any filter dimension is active
    pub fn has_active_filters(&self) -> bool {
        self.state.has_active_filters()
    }

    // =========================================================================
    // Filter Changes (each change resets to page 1)
    // =========================================================================

    pub fn set_search_term(&mut self, term: impl Into<String>) {
        let changed = replace_if_changed(&mut self.state.search_term, term.into());
        self.reset_page_if(changed);
    }

    pub fn set_category(&mut self, category: impl Into<String>) {
        let changed = replace_if_changed(&mut self.state.category, category.into());
        self.reset_page_if(changed);
    }

    pub fn set_price_range(&mut self, range: PriceRange) {
        let changed = replace_if_changed(&mut self.state.price_range, range);
        self.reset_page_if(changed);
    }

    pub fn set_price_min(&mut self, min: impl Into<String>) {
        let changed = replace_if_changed(&mut self.state.price_range.min, min.into());
        self.reset_page_if(changed);
    }

    pub fn set_price_max(&mut self, max: impl Into<String>) {
        let changed = replace_if_changed(&mut self.state.price_range.max, max.into());
        self.reset_page_if(changed);
    }

    pub fn set_rating(&mut self, rating: impl Into<String>) {
        let changed = replace_if_changed(&mut self.state.rating, rating.into());
        self.reset_page_if(changed);
    }

    pub fn set_location(&mut self, location: impl Into<String>) {
        let changed = replace_if_changed(&mut self.state.location, location.into());
        self.reset_page_if(changed);
    }

    pub fn set_date_range(&mut self, range: DateRange) {
        let changed = replace_if_changed(&mut self.state.date_range, range);
        self.reset_page_if(changed);
    }

    pub fn set_sort_by(&mut self, sort: SortBy) {
        let changed = replace_if_changed(&mut self.state.sort_by, sort);
        self.reset_page_if(changed);
    }

    /// Replaces the whole filter state at once
    pub fn replace_state(&mut self, state: FilterState) {
        let changed = replace_if_changed(&mut self.state, state);
        self.reset_page_if(changed);
    }

    /// Resets every filter and the sort order to defaults.
    pub fn clear_filters(&mut self) {
        self.replace_state(FilterState::default());
    }

    fn reset_page_if(&mut self, changed: bool) {
        if changed {
            self.current_page = 1;
        }
    }

    // =========================================================================
    // Page Navigation
    // =========================================================================

    /// Jumps to `page` as given; out-of-range pages render empty
    pub fn go_to_page(&mut self, page: usize) {
        self.current_page = page;
    }

    /// Advances one page unless already on the last page
    pub fn next_page(&mut self, total_pages: usize) {
        if self.current_page < total_pages {
            self.current_page += 1;
        }
    }

    /// Goes back one page unless already on the first page
    pub fn prev_page(&mut self) {
        if self.current_page > 1 {
            self.current_page -= 1;
        }
    }

    // =========================================================================
    // Rendering
    // =========================================================================

    /// Computes the view of `products` for the current state.
    pub fn view<'a>(&self, products: Option<&'a [Product]>, clock: &dyn Clock) -> View<'a> {
        apply(
            products,
            &self.state,
            self.current_page,
            self.per_page,
            clock.now(),
        )
    }
}

/// Stores `value` in `slot`, returning whether it differed from the old value.
fn replace_if_changed<T: PartialEq>(slot: &mut T, value: T) -> bool {
    if *slot == value {
        return false;
    }
    *slot = value;
    true
}
