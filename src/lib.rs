//! # pawmarket
//!
//! Filter, sort, and paginate engine for pet marketplace listings.
//!
//! Listings are loosely-typed JSON or YAML records. The engine coerces their
//! fields leniently, applies a conjunctive set of filters, sorts the result,
//! and slices it into pages with a compact page-jump window.
//!
//! ## Features
//!
//! - **Lenient Records**: Prices, ratings, and dates may be numbers or strings
//! - **Conjunctive Filters**: Search, category, price, rating, location, date range
//! - **Stable Sorting**: Newest, oldest, price, rating, and name orders
//! - **Pagination**: Page slices plus a five-wide page window
//!
//! Copyright (c) 2025 Dominic Rodemer. All rights reserved.
//! Licensed under the MIT License.

pub mod clock;
pub mod commands;
pub mod config;
pub mod constants;
pub mod engine;
pub mod filter;
pub mod pagination;
pub mod product;
pub mod storage;
pub mod ui;

pub use clock::{Clock, FixedClock, SystemClock};
pub use config::{set_home_override, Config};
pub use engine::{apply, category_counts, Browser, View};
pub use filter::{DateRange, FilterState, PriceRange, SortBy};
pub use pagination::PageInfo;
pub use product::Product;
