//! # Global Configuration
//!
//! Handles the global user configuration stored at `~/.config/pawmarket/config`.
//!
//! Copyright (c) 2025 Dominic Rodemer. All rights reserved.
//! Licensed under the MIT License.

use std::{cell::RefCell, fs, path::PathBuf};

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

use crate::constants::{GLOBAL_CONFIG_DIR, GLOBAL_CONFIG_FILENAME, ITEMS_PER_PAGE};

thread_local! {
    /// Thread-local override for the home directory path.
    /// Used by integration tests to redirect config to a temp directory
    /// without modifying environment variables.
    static HOME_OVERRIDE: RefCell<Option<PathBuf>> = const { RefCell::new(None) };
}

/// Sets a thread-local override for the home directory.
/// This is used by tests to redirect global config without modifying env vars.
pub fn set_home_override(path: Option<PathBuf>) {
    HOME_OVERRIDE.with(|cell| {
        *cell.borrow_mut() = path;
    });
}

/// Gets the current home directory override, if set.
fn get_home_override() -> Option<PathBuf> {
    HOME_OVERRIDE.with(|cell| cell.borrow().clone())
}

/// Global configuration stored at ~/.config/pawmarket/config
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GlobalConfig {
    /// Default listings file or directory
    #[serde(default)]
    pub listings: Option<String>,

    /// Listings shown per page
    #[serde(default = "default_items_per_page")]
    pub items_per_page: usize,

    /// Sort order used when none is given
    #[serde(default = "default_sort")]
    pub default_sort: String,

    /// Whether to colorize terminal output
    #[serde(default = "default_true")]
    pub color: bool,
}

impl Default for GlobalConfig {
    fn default() -> Self {
        Self {
            listings: None,
            items_per_page: ITEMS_PER_PAGE,
            default_sort: default_sort(),
            color: true,
        }
    }
}

#[allow(clippy::missing_const_for_fn)] // serde default functions can't be const
fn default_true() -> bool {
    true
}

#[allow(clippy::missing_const_for_fn)]
fn default_items_per_page() -> usize {
    ITEMS_PER_PAGE
}

fn default_sort() -> String {
    "newest".to_string()
}

impl GlobalConfig {
    /// Returns the path to the global config file (~/.config/pawmarket/config)
    ///
    /// Checks for a thread-local home override first (used by tests),
    /// then falls back to $HOME/.config (XDG Base Directory).
    pub fn path() -> Option<PathBuf> {
        Self::dir().map(|dir| dir.join(GLOBAL_CONFIG_FILENAME))
    }

    /// Returns the path to the global config directory (~/.config/pawmarket)
    pub fn dir() -> Option<PathBuf> {
        if let Some(home) = get_home_override() {
            return Some(home.join(".config").join(GLOBAL_CONFIG_DIR));
        }
        dirs::home_dir().map(|home| home.join(".config").join(GLOBAL_CONFIG_DIR))
    }

    /// Loads the global config. A missing file yields the defaults.
    pub fn load() -> Result<Self> {
        let Some(path) = Self::path() else {
            return Ok(Self::default());
        };

        if !path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(&path)
            .with_context(|| format!("Failed to read global config: {}", path.display()))?;

        let config: Self = toml::from_str(&content)
            .with_context(|| format!("Failed to parse global config: {}", path.display()))?;

        if config.items_per_page == 0 {
            anyhow::bail!(
                "Invalid items_per_page in {}: must be at least 1",
                path.display()
            );
        }

        Ok(config)
    }

    /// Creates the global config with default values and comments.
    /// Used by `pawm setup`. Returns true if created, false if already exists.
    pub fn create_default_if_missing() -> Result<bool> {
        let Some(path) = Self::path() else {
            anyhow::bail!("Could not determine config directory");
        };

        if path.exists() {
            return Ok(false);
        }

        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).with_context(|| {
                format!("Failed to create config directory: {}", parent.display())
            })?;
        }

        Self::save_with_comments(&path, &Self::default())?;
        Ok(true)
    }

    /// Saves config with comments for all options.
    ///
    /// `listings` is shown as a commented example when not set.
    fn save_with_comments(path: &PathBuf, config: &Self) -> Result<()> {
        let listings_line = config.listings.as_ref().map_or_else(
            || "# listings = \"~/pets/listings.json\"".to_string(),
            |v| format!("listings = \"{v}\""),
        );

        let content = format!(
            r#"# pawmarket Global Configuration
# Location: ~/.config/pawmarket/config

# Default listings source: a .json/.yaml file or a directory of them.
# Overridden by a project .pawmarket file and by --listings.
{listings_line}

# Listings shown per page when browsing.
# Default: {default_per_page}
items_per_page = {items_per_page}

# Sort order used when --sort is not given.
# One of: newest, oldest, price-low, price-high, rating, name
# Default: "newest"
default_sort = "{default_sort}"

# Whether to colorize terminal output.
# Default: true
color = {color}
"#,
            default_per_page = ITEMS_PER_PAGE,
            items_per_page = config.items_per_page,
            default_sort = config.default_sort,
            color = config.color,
        );

        fs::write(path, content)
            .with_context(|| format!("Failed to write global config: {}", path.display()))
    }
}
