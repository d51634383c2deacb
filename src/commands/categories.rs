//! # Categories Command
//!
//! Lists the categories present in the listings with their counts.
//!
//! Copyright (c) 2025 Dominic Rodemer. All rights reserved.
//! Licensed under the MIT License.

use std::path::PathBuf;

use anyhow::{Context, Result};

use crate::{
    config::Config,
    engine::category_counts,
    storage,
    ui::Palette,
};

/// Label printed for listings without a category
const UNCATEGORIZED: &str = "(uncategorized)";

/// Arguments for the categories command
#[derive(Debug, Clone, Default)]
pub struct CategoriesArgs {
    /// Listings file or directory (overrides config)
    pub listings: Option<PathBuf>,
}

/// Executes the categories command.
pub fn execute(args: &CategoriesArgs) -> Result<()> {
    let config = Config::load()?;
    let path = config.listings_path(args.listings.as_deref())?;

    let products = storage::load_listings(&path)
        .with_context(|| format!("Failed to load listings from {}", path.display()))?;

    let counts = category_counts(&products);
    if counts.is_empty() {
        println!("{}", Palette::new(config.color()).dimmed("No listings found."));
        return Ok(());
    }

    for line in format_counts(&counts) {
        println!("{line}");
    }

    Ok(())
}

/// Formats category counts one per line: `name (count)`.
pub fn format_counts(counts: &[(Option<String>, usize)]) -> Vec<String> {
    counts
        .iter()
        .map(|(category, count)| {
            let name = category.as_deref().unwrap_or(UNCATEGORIZED);
            format!("{name} ({count})")
        })
        .collect()
}
