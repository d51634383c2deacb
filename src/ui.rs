//! # UI Utilities
//!
//! Table formatting, pagination bar, and color handling for terminal output.
//!
//! Copyright (c) 2025 Dominic Rodemer. All rights reserved.
//! Licensed under the MIT License.

use std::io::IsTerminal;

use chrono::{DateTime, Utc};
use owo_colors::OwoColorize;
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

use crate::{
    constants::{UI_CATEGORY_TRUNCATE_LEN, UI_LOCATION_TRUNCATE_LEN, UI_NAME_TRUNCATE_LEN},
    engine::View,
    product::Product,
};

// =============================================================================
// Color
// =============================================================================

/// Applies terminal colors when enabled.
#[derive(Debug, Clone, Copy)]
pub struct Palette {
    enabled: bool,
}

impl Palette {
    /// Creates a palette; colors are used only when `enabled` and stdout is a terminal.
    pub fn new(enabled: bool) -> Self {
        Self {
            enabled: enabled && std::io::stdout().is_terminal(),
        }
    }

    /// A palette that never colors
    pub const fn plain() -> Self {
        Self { enabled: false }
    }

    pub fn bold(self, text: &str) -> String {
        if self.enabled {
            text.bold().to_string()
        } else {
            text.to_string()
        }
    }

    pub fn dimmed(self, text: &str) -> String {
        if self.enabled {
            text.dimmed().to_string()
        } else {
            text.to_string()
        }
    }

    pub fn accent(self, text: &str) -> String {
        if self.enabled {
            text.cyan().to_string()
        } else {
            text.to_string()
        }
    }
}

// =============================================================================
// Listing Table
// =============================================================================

/// Column header for the listing table.
pub fn table_header() -> String {
    format!(
        "{}  {}  {:>9}  {:>6}  {}  {}",
        pad("NAME", UI_NAME_TRUNCATE_LEN),
        pad("CATEGORY", UI_CATEGORY_TRUNCATE_LEN),
        "PRICE",
        "RATING",
        pad("LOCATION", UI_LOCATION_TRUNCATE_LEN),
        "LISTED"
    )
}

/// Formats a listing as one table row.
///
/// Columns: Name | Category | Price | Rating | Location | Listed
pub fn listing_row(product: &Product) -> String {
    let name = truncate(product.name(), UI_NAME_TRUNCATE_LEN);
    let category = truncate(product.category().unwrap_or("-"), UI_CATEGORY_TRUNCATE_LEN);
    let location = truncate(product.location().unwrap_or("-"), UI_LOCATION_TRUNCATE_LEN);
    let rating = format!("{:.1}", product.rating());

    format!(
        "{}  {}  {:>9}  {:>6}  {}  {}",
        pad(&name, UI_NAME_TRUNCATE_LEN),
        pad(&category, UI_CATEGORY_TRUNCATE_LEN),
        format_price(product.price()),
        rating,
        pad(&location, UI_LOCATION_TRUNCATE_LEN),
        format_date(product.listed_at()),
    )
}

/// Formats a price; zero reads as "free".
pub fn format_price(price: f64) -> String {
    if price.abs() < f64::EPSILON {
        "free".to_string()
    } else {
        format!("{price:.2}")
    }
}

/// Formats a listing date as `YYYY-MM-DD`, or `-` when unknown.
pub fn format_date(date: Option<DateTime<Utc>>) -> String {
    date.map_or_else(|| "-".to_string(), |d| d.format("%Y-%m-%d").to_string())
}

// =============================================================================
// Pagination Footer
// =============================================================================

/// Summary line, e.g. `Showing 13–24 of 40 listings`.
pub fn summary_line(view: &View<'_>, per_page: usize) -> String {
    let noun = if view.total == 1 { "listing" } else { "listings" };
    view.shown_range(per_page).map_or_else(
        || format!("Showing 0 of {} {noun}", view.total),
        |(first, last)| format!("Showing {first}–{last} of {} {noun}", view.total),
    )
}

/// Page bar, e.g. `Page 9 of 10  7 8 [9] 10`.
pub fn page_bar(view: &View<'_>) -> String {
    let pages: Vec<String> = view
        .page_numbers
        .iter()
        .map(|&page| {
            if page == view.current_page {
                format!("[{page}]")
            } else {
                page.to_string()
            }
        })
        .collect();

    format!(
        "Page {} of {}  {}",
        view.current_page,
        view.total_pages,
        pages.join(" ")
    )
    .trim_end()
    .to_string()
}

// =============================================================================
// String Utilities
// =============================================================================

/// Truncates a string to a display width, adding an ellipsis if truncated.
pub fn truncate(s: &str, max: usize) -> String {
    if s.width() <= max {
        return s.to_string();
    }

    let mut out = String::new();
    let mut width = 0;
    for c in s.chars() {
        let w = c.width().unwrap_or(0);
        if width + w > max.saturating_sub(1) {
            break;
        }
        out.push(c);
        width += w;
    }
    out.push('…');
    out
}

/// Pads a string with spaces to a display width.
pub fn pad(s: &str, width: usize) -> String {
    let fill = width.saturating_sub(s.width());
    format!("{s}{}", " ".repeat(fill))
}

#[cfg(test)]
mod tests {
    use chrono::TimeZone;
    use serde_json::json;

    use super::*;
    use crate::{engine::apply, filter::FilterState};

    #[test]
    fn test_truncate_by_display_width() {
        assert_eq!(truncate("Bella", 10), "Bella");
        assert_eq!(truncate("Golden Retriever", 8), "Golden …");
        assert_eq!(truncate("柴犬の子犬です", 6), "柴犬…");
    }

    #[test]
    fn test_pad() {
        assert_eq!(pad("ab", 4), "ab  ");
        assert_eq!(pad("abcdef", 4), "abcdef");
    }

    #[test]
    fn test_format_price_and_date() {
        assert_eq!(format_price(0.0), "free");
        assert_eq!(format_price(19.5), "19.50");
        assert_eq!(format_date(None), "-");
        let date = Utc.with_ymd_and_hms(2024, 6, 1, 10, 0, 0).unwrap();
        assert_eq!(format_date(Some(date)), "2024-06-01");
    }

    #[test]
    fn test_listing_row_columns() {
        let product = Product {
            name: Some("Max".into()),
            category: Some("Pet Food".into()),
            price: Some(json!("20")),
            rating: Some(json!(3)),
            location: Some("LA".into()),
            created_at: Some(json!("2024-06-01")),
            ..Product::default()
        };
        let row = listing_row(&product);
        assert!(row.starts_with("Max "));
        assert!(row.contains("Pet Food"));
        assert!(row.contains("20.00"));
        assert!(row.contains("3.0"));
        assert!(row.ends_with("2024-06-01"));
    }

    #[test]
    fn test_footer_lines() {
        let products: Vec<Product> = (0..120)
            .map(|i| Product {
                name: Some(format!("Pet {i}")),
                ..Product::default()
            })
            .collect();
        let now = Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap();
        let view = apply(Some(&products), &FilterState::default(), 9, 12, now);

        assert_eq!(summary_line(&view, 12), "Showing 97–108 of 120 listings");
        assert_eq!(page_bar(&view), "Page 9 of 10  7 8 [9] 10");
    }

    #[test]
    fn test_footer_for_empty_view() {
        let now = Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap();
        let view = apply(None, &FilterState::default(), 1, 12, now);
        assert_eq!(summary_line(&view, 12), "Showing 0 of 0 listings");
        assert_eq!(page_bar(&view), "Page 1 of 0");
    }
}
