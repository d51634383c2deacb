//! # Sorting
//!
//! Orders filtered listings. Sorting is stable: listings that compare equal
//! keep their relative order from the filtered sequence.
//!
//! Copyright (c) 2025 Dominic Rodemer. All rights reserved.
//! Licensed under the MIT License.

use std::cmp::Ordering;

use super::SortBy;
use crate::product::Product;

/// Sorts listings in place by the given sort order.
///
/// Unrecognized sort orders fall back to newest first.
pub fn sort_products(items: &mut [&Product], sort: &SortBy) {
    match sort {
        SortBy::PriceLow => items.sort_by(|a, b| compare_numbers(a.price(), b.price())),
        SortBy::PriceHigh => items.sort_by(|a, b| compare_numbers(b.price(), a.price())),
        SortBy::Rating => items.sort_by(|a, b| compare_numbers(b.rating(), a.rating())),
        SortBy::Name => items.sort_by(|a, b| compare_names(a.name(), b.name())),
        // Undated listings (None) order before every dated one
        SortBy::Oldest => items.sort_by_key(|item| item.listed_at()),
        SortBy::Newest | SortBy::Unrecognized(_) => {
            items.sort_by(|a, b| b.listed_at().cmp(&a.listed_at()));
        }
    }
}

/// Total order over coerced numbers in which `-0.0` and `0.0` tie.
fn compare_numbers(a: f64, b: f64) -> Ordering {
    (a + 0.0).total_cmp(&(b + 0.0))
}

/// Compares names the way a human-facing collation would.
///
/// Case-insensitive first, then lower case before upper case at the first
/// differing letter, then code point order.
pub fn compare_names(a: &str, b: &str) -> Ordering {
    a.to_lowercase()
        .cmp(&b.to_lowercase())
        .then_with(|| {
            a.chars()
                .map(char::is_uppercase)
                .cmp(b.chars().map(char::is_uppercase))
        })
        .then_with(|| a.cmp(b))
}
