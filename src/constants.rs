//! # Constants
//!
//! Centralized constants for magic values used throughout pawmarket.
//!
//! Copyright (c) 2025 Dominic Rodemer. All rights reserved.
//! Licensed under the MIT License.

// =============================================================================
// Filter Sentinels
// =============================================================================

/// Sentinel meaning "this filter dimension is inactive" (category, rating, date range).
pub const FILTER_ALL: &str = "All";

// =============================================================================
// Pagination
// =============================================================================

/// Default number of listings per page.
pub const ITEMS_PER_PAGE: usize = 12;

/// Number of page buttons shown in the page window.
pub const PAGE_WINDOW_SIZE: usize = 5;

/// Pages shown before the current page when the window is centered.
pub const PAGE_WINDOW_LEAD: usize = 2;

// =============================================================================
// Date Range Offsets
// =============================================================================

/// Days covered by the "week" date range.
pub const DATE_RANGE_WEEK_DAYS: i64 = 7;

/// Calendar months covered by the "month" date range.
pub const DATE_RANGE_MONTH_MONTHS: u32 = 1;

/// Calendar months covered by the "3months" date range.
pub const DATE_RANGE_QUARTER_MONTHS: u32 = 3;

// =============================================================================
// UI Display
// =============================================================================

/// Maximum display width for listing names in the table.
pub const UI_NAME_TRUNCATE_LEN: usize = 28;

/// Maximum display width for categories in the table.
pub const UI_CATEGORY_TRUNCATE_LEN: usize = 14;

/// Maximum display width for locations in the table.
pub const UI_LOCATION_TRUNCATE_LEN: usize = 16;

// =============================================================================
// File System
// =============================================================================

/// Listing file extensions accepted by the listings provider.
pub const LISTING_FILE_EXTENSIONS: &[&str] = &["json", "yaml", "yml"];

/// Maximum directory depth walked when loading a listings directory.
pub const LISTING_WALK_MAX_DEPTH: usize = 3;

/// Object keys that may wrap a listings array.
pub const LISTING_WRAPPER_KEYS: &[&str] = &["products", "listings", "data"];

/// Global configuration directory name (inside `~/.config`).
pub const GLOBAL_CONFIG_DIR: &str = "pawmarket";

/// Global configuration file name (inside `GLOBAL_CONFIG_DIR`).
pub const GLOBAL_CONFIG_FILENAME: &str = "config";

/// Project configuration file name.
pub const PROJECT_CONFIG_FILE: &str = ".pawmarket";

// =============================================================================
// Logging
// =============================================================================

/// Environment variable holding the tracing filter directive.
pub const LOG_ENV_VAR: &str = "PAWM_LOG";

/// Filter directive used when `LOG_ENV_VAR` is unset.
pub const DEFAULT_LOG_FILTER: &str = "warn";
