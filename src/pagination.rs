//! # Pagination
//!
//! Page slicing and the sliding page-number window used by page-jump controls.
//! Pages are 1-based. Nothing here clamps the current page; an out-of-range
//! page simply yields an empty slice.
//!
//! Copyright (c) 2025 Dominic Rodemer. All rights reserved.
//! Licensed under the MIT License.

use serde::Serialize;

use crate::constants::{PAGE_WINDOW_LEAD, PAGE_WINDOW_SIZE};

/// Returns the number of pages needed for `count` items (`0` when empty).
pub const fn total_pages(count: usize, per_page: usize) -> usize {
    if count == 0 || per_page == 0 {
        0
    } else {
        count.div_ceil(per_page)
    }
}

/// Returns the slice of `items` shown on `page`.
///
/// Empty when `page` is `0` or past the last page.
pub fn page_slice<T>(items: &[T], page: usize, per_page: usize) -> &[T] {
    let Some(first) = page.checked_sub(1) else {
        return &[];
    };

    let start = first.saturating_mul(per_page).min(items.len());
    let end = start.saturating_add(per_page).min(items.len());
    &items[start..end]
}

/// Returns the page numbers to render around `current_page`.
///
/// With five or fewer pages every page is listed. Otherwise the window starts
/// two pages before the current page (never before page 1) and spans up to
/// five pages, cut short at the last page without shifting back.
pub fn page_numbers(current_page: usize, total_pages: usize) -> Vec<usize> {
    if total_pages <= PAGE_WINDOW_SIZE {
        return (1..=total_pages).collect();
    }

    let start = current_page.saturating_sub(PAGE_WINDOW_LEAD).max(1);
    let end = total_pages.min(start.saturating_add(PAGE_WINDOW_SIZE - 1));
    (start..=end).collect()
}

/// Pagination metadata for next/prev/jump controls.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PageInfo {
    pub current_page: usize,
    pub total_pages: usize,
    pub page_numbers: Vec<usize>,
    pub has_prev: bool,
    pub has_next: bool,
}

impl PageInfo {
    /// Computes pagination metadata for `count` items.
    pub fn new(current_page: usize, count: usize, per_page: usize) -> Self {
        let total_pages = total_pages(count, per_page);

        Self {
            current_page,
            total_pages,
            page_numbers: page_numbers(current_page, total_pages),
            has_prev: current_page > 1,
            has_next: current_page < total_pages,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_total_pages() {
        assert_eq!(total_pages(0, 12), 0);
        assert_eq!(total_pages(1, 12), 1);
        assert_eq!(total_pages(12, 12), 1);
        assert_eq!(total_pages(13, 12), 2);
        assert_eq!(total_pages(145, 20), 8);
    }

    #[test]
    fn test_page_slice() {
        let items: Vec<usize> = (0..13).collect();
        assert_eq!(page_slice(&items, 1, 12).len(), 12);
        assert_eq!(page_slice(&items, 2, 12), &[12]);
        assert!(page_slice(&items, 3, 12).is_empty());
        assert!(page_slice(&items, 0, 12).is_empty());
        assert!(page_slice(&items, usize::MAX, 12).is_empty());
    }

    #[test]
    fn test_page_numbers_small_totals() {
        assert!(page_numbers(1, 0).is_empty());
        assert_eq!(page_numbers(1, 1), [1]);
        assert_eq!(page_numbers(4, 5), [1, 2, 3, 4, 5]);
    }

    #[test]
    fn test_page_numbers_window() {
        assert_eq!(page_numbers(1, 10), [1, 2, 3, 4, 5]);
        assert_eq!(page_numbers(2, 10), [1, 2, 3, 4, 5]);
        assert_eq!(page_numbers(5, 10), [3, 4, 5, 6, 7]);
        assert_eq!(page_numbers(8, 10), [6, 7, 8, 9, 10]);
    }

    #[test]
    fn test_page_numbers_clipped_at_end() {
        // The window is not shifted back when it runs past the last page
        assert_eq!(page_numbers(9, 10), [7, 8, 9, 10]);
        assert_eq!(page_numbers(10, 10), [8, 9, 10]);
        assert_eq!(page_numbers(6, 6), [4, 5, 6]);
    }

    #[test]
    fn test_page_info() {
        let info = PageInfo::new(2, 30, 12);
        assert_eq!(info.total_pages, 3);
        assert!(info.has_prev);
        assert!(info.has_next);

        let info = PageInfo::new(1, 0, 12);
        assert_eq!(info.total_pages, 0);
        assert!(!info.has_prev);
        assert!(!info.has_next);
        assert!(info.page_numbers.is_empty());
    }
}
