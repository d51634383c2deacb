//! # Engine
//!
//! Filters, sorts, and paginates a listing collection. [`apply`] is a pure
//! function of its inputs; [`Browser`] wraps it with the filter state of one
//! browsing session and enforces the page-reset rule.
//!
//! Copyright (c) 2025 Dominic Rodemer. All rights reserved.
//! Licensed under the MIT License.

pub mod browser;

use std::collections::HashMap;

use chrono::{DateTime, Utc};
use serde::Serialize;

pub use self::browser::Browser;
use crate::{
    filter::{sort_products, Criteria, FilterState},
    pagination::{page_numbers, page_slice, total_pages, PageInfo},
    product::Product,
};

/// Filtered, sorted, and paginated view over a listing collection.
///
/// Listings are borrowed from the input collection, never copied or modified.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct View<'a> {
    /// Number of listings that passed the filters
    pub total: usize,
    pub current_page: usize,
    pub total_pages: usize,
    /// Page window for page-jump controls
    pub page_numbers: Vec<usize>,
    pub has_active_filters: bool,
    /// Listings on the current page
    pub paginated: Vec<&'a Product>,
    /// Every listing that passed the filters, in sort order
    pub filtered: Vec<&'a Product>,
}

impl View<'_> {
    /// Returns pagination metadata for the view
    pub fn page_info(&self) -> PageInfo {
        PageInfo {
            current_page: self.current_page,
            total_pages: self.total_pages,
            page_numbers: self.page_numbers.clone(),
            has_prev: self.current_page > 1,
            has_next: self.current_page < self.total_pages,
        }
    }

    /// Returns the 1-based positions `(first, last)` of the current page
    /// within the filtered result, or `None` when the page is empty.
    pub fn shown_range(&self, per_page: usize) -> Option<(usize, usize)> {
        if self.paginated.is_empty() {
            return None;
        }
        let first = (self.current_page - 1) * per_page + 1;
        Some((first, first + self.paginated.len() - 1))
    }
}

/// Applies filters, sort order, and pagination to a listing collection.
///
/// A missing collection is treated as empty. `current_page` is used as given:
/// a page past the end produces an empty `paginated` slice.
pub fn apply<'a>(
    products: Option<&'a [Product]>,
    state: &FilterState,
    current_page: usize,
    per_page: usize,
    now: DateTime<Utc>,
) -> View<'a> {
    let products = products.unwrap_or_default();
    let criteria = Criteria::compile(state, now);

    let mut filtered: Vec<&Product> = products
        .iter()
        .filter(|product| criteria.matches(product))
        .collect();

    tracing::trace!(kept = filtered.len(), ?criteria, "filtered listings");

    sort_products(&mut filtered, &state.sort_by);

    let total = filtered.len();
    let total_pages = total_pages(total, per_page);
    let paginated = page_slice(&filtered, current_page, per_page).to_vec();

    tracing::debug!(
        input = products.len(),
        filtered = total,
        page = current_page,
        total_pages,
        sort = %state.sort_by,
        "applied listing filters"
    );

    View {
        total,
        current_page,
        total_pages,
        page_numbers: page_numbers(current_page, total_pages),
        has_active_filters: state.has_active_filters(),
        paginated,
        filtered,
    }
}

/// Counts listings per category.
///
/// Sorted by count (descending), then by name; uncategorized listings
/// (`None`) sort after named categories with the same count.
pub fn category_counts(products: &[Product]) -> Vec<(Option<String>, usize)> {
    let mut counts: HashMap<Option<&str>, usize> = HashMap::new();
    for product in products {
        *counts.entry(product.category()).or_insert(0) += 1;
    }

    let mut categories: Vec<(Option<String>, usize)> = counts
        .into_iter()
        .map(|(category, count)| (category.map(String::from), count))
        .collect();

    categories.sort_by(|a, b| {
        b.1.cmp(&a.1).then_with(|| match (&a.0, &b.0) {
            (None, None) => std::cmp::Ordering::Equal,
            (None, Some(_)) => std::cmp::Ordering::Greater,
            (Some(_), None) => std::cmp::Ordering::Less,
            (Some(a), Some(b)) => a.cmp(b),
        })
    });

    categories
}
