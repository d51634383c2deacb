//! # Filter Predicates
//!
//! Listing filtering logic. [`Criteria`] is compiled once from a
//! [`FilterState`] and a reference time, then applied to every listing.
//! The individual predicates are public so callers can test or reuse a
//! single dimension.
//!
//! Copyright (c) 2025 Dominic Rodemer. All rights reserved.
//! Licensed under the MIT License.

use chrono::{DateTime, Utc};

use super::FilterState;
use crate::{constants::FILTER_ALL, product::Product};

// =============================================================================
// Compiled Criteria
// =============================================================================

/// Filter criteria resolved against a point in time.
///
/// `None` fields are inactive. Price bounds are always applied; the default
/// range is `[0, +inf]`.
#[derive(Debug, Clone, PartialEq)]
pub struct Criteria {
    /// Lower-cased, trimmed search term
    pub search: Option<String>,
    /// Exact category
    pub category: Option<String>,
    /// Inclusive lower price bound
    pub price_min: f64,
    /// Inclusive upper price bound
    pub price_max: f64,
    /// Inclusive minimum rating
    pub min_rating: Option<f64>,
    /// Lower-cased, trimmed location term
    pub location: Option<String>,
    /// Earliest admitted listing date
    pub listed_since: Option<DateTime<Utc>>,
}

impl Criteria {
    /// Compiles filter state into criteria, resolving date ranges against `now`.
    pub fn compile(state: &FilterState, now: DateTime<Utc>) -> Self {
        let (price_min, price_max) = state.price_range.bounds();

        Self {
            search: normalized_term(&state.search_term),
            category: (state.category != FILTER_ALL).then(|| state.category.clone()),
            price_min,
            price_max,
            min_rating: state.rating_threshold(),
            location: normalized_term(&state.location),
            listed_since: state.date_range.cutoff(now),
        }
    }

    /// Returns true if the listing passes every active predicate.
    pub fn matches(&self, product: &Product) -> bool {
        matches_filter(product, self)
    }
}

/// Trims and lower-cases a free-text term; blank terms are inactive.
fn normalized_term(term: &str) -> Option<String> {
    let trimmed = term.trim();
    (!trimmed.is_empty()).then(|| trimmed.to_lowercase())
}

// =============================================================================
// Filter Matching
// =============================================================================

/// Checks if a listing matches all active criteria (logical AND).
pub fn matches_filter(product: &Product, criteria: &Criteria) -> bool {
    // Search filter
    if let Some(ref query) = criteria.search {
        if !matches_search_text(product, query) {
            return false;
        }
    }

    // Category filter (exact, case-sensitive)
    if let Some(ref category) = criteria.category {
        if !matches_category(product, category) {
            return false;
        }
    }

    if !matches_price(product, criteria.price_min, criteria.price_max) {
        return false;
    }

    if let Some(threshold) = criteria.min_rating {
        if !matches_min_rating(product, threshold) {
            return false;
        }
    }

    if let Some(ref location) = criteria.location {
        if !matches_location(product, location) {
            return false;
        }
    }

    if let Some(cutoff) = criteria.listed_since {
        if !matches_listed_since(product, cutoff) {
            return false;
        }
    }

    true
}

// =============================================================================
// Individual Predicates
// =============================================================================

/// Checks if name, description, or breed contain the query (case-insensitive).
///
/// Absent fields never match.
pub fn matches_search_text(product: &Product, query: &str) -> bool {
    let query_lower = query.to_lowercase();

    [product.name.as_deref(), product.description(), product.breed()]
        .into_iter()
        .flatten()
        .any(|field| field.to_lowercase().contains(&query_lower))
}

/// Checks if the listing's category equals `category` exactly.
pub fn matches_category(product: &Product, category: &str) -> bool {
    product.category() == Some(category)
}

/// Checks if the coerced price lies within `[min, max]`.
pub fn matches_price(product: &Product, min: f64, max: f64) -> bool {
    let price = product.price();
    min <= price && price <= max
}

/// Checks if the coerced rating is at least `threshold`.
pub fn matches_min_rating(product: &Product, threshold: f64) -> bool {
    product.rating() >= threshold
}

/// Checks if the location contains the query (case-insensitive).
pub fn matches_location(product: &Product, query: &str) -> bool {
    product
        .location()
        .is_some_and(|location| location.to_lowercase().contains(&query.to_lowercase()))
}

/// Checks if the listing date is at or after `cutoff`.
///
/// Listings without a valid date fail.
pub fn matches_listed_since(product: &Product, cutoff: DateTime<Utc>) -> bool {
    product.listed_at().is_some_and(|listed| listed >= cutoff)
}
