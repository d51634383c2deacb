//! # Browse Command
//!
//! Loads listings, applies filters, sort order, and pagination, and prints
//! the current page as a table or as JSON.
//!
//! Copyright (c) 2025 Dominic Rodemer. All rights reserved.
//! Licensed under the MIT License.

use std::path::PathBuf;

use anyhow::{Context, Result};

use crate::{
    clock::SystemClock,
    config::Config,
    engine::{Browser, View},
    filter::{FilterState, SortBy},
    storage,
    ui::{self, Palette},
};

/// Arguments for the browse command
#[derive(Debug, Clone)]
pub struct BrowseArgs {
    /// Listings file or directory (overrides config)
    pub listings: Option<PathBuf>,
    /// Filter selection; its sort order is replaced by `sort`
    pub filters: FilterState,
    /// Sort order (config default when not given)
    pub sort: Option<SortBy>,
    /// Page to show (1-based)
    pub page: usize,
    /// Print the view as JSON
    pub json: bool,
    /// Include the full filtered result in JSON output
    pub all: bool,
}

impl Default for BrowseArgs {
    fn default() -> Self {
        Self {
            listings: None,
            filters: FilterState::default(),
            sort: None,
            page: 1,
            json: false,
            all: false,
        }
    }
}

/// Executes the browse command.
pub fn execute(args: &BrowseArgs) -> Result<()> {
    let config = Config::load()?;
    let path = config.listings_path(args.listings.as_deref())?;

    let products = storage::load_listings(&path)
        .with_context(|| format!("Failed to load listings from {}", path.display()))?;

    let mut browser = Browser::with_per_page(config.items_per_page());
    browser.replace_state(args.filters.clone());
    browser.set_sort_by(args.sort.clone().unwrap_or_else(|| config.default_sort()));
    // Page is applied last; any filter change above resets it to 1
    browser.go_to_page(args.page);

    let view = browser.view(Some(&products), &SystemClock);

    if args.json {
        println!("{}", view_json(&view, args.all)?);
        return Ok(());
    }

    print!(
        "{}",
        render_table(&view, browser.per_page(), Palette::new(config.color()))
    );
    Ok(())
}

/// Serializes a view, dropping the full filtered list unless `include_filtered`.
pub fn view_json(view: &View<'_>, include_filtered: bool) -> Result<String> {
    let mut value = serde_json::to_value(view).context("Failed to serialize view")?;
    if !include_filtered {
        if let Some(object) = value.as_object_mut() {
            object.remove("filtered");
        }
    }
    serde_json::to_string_pretty(&value).context("Failed to serialize view")
}

/// Renders the current page as a table with a pagination footer.
pub fn render_table(view: &View<'_>, per_page: usize, palette: Palette) -> String {
    let mut out = String::new();

    if view.paginated.is_empty() {
        out.push_str(&palette.dimmed("No listings found."));
        out.push('\n');
        if view.total > 0 {
            // Page past the end of a non-empty result
            out.push_str(&ui::summary_line(view, per_page));
            out.push('\n');
        }
        if view.has_active_filters {
            out.push_str(&palette.dimmed(
                "(filters active: run pawm browse without filters to clear)",
            ));
            out.push('\n');
        }
        return out;
    }

    out.push_str(&palette.bold(&ui::table_header()));
    out.push('\n');
    for product in &view.paginated {
        out.push_str(&ui::listing_row(product));
        out.push('\n');
    }

    out.push('\n');
    out.push_str(&ui::summary_line(view, per_page));
    if view.has_active_filters {
        out.push_str(&palette.dimmed(" (filtered)"));
    }
    out.push('\n');
    out.push_str(&palette.accent(&ui::page_bar(view)));
    out.push('\n');

    out
}
