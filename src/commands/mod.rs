//! # Commands
//!
//! CLI command implementations for pawm.
//!
//! Copyright (c) 2025 Dominic Rodemer. All rights reserved.
//! Licensed under the MIT License.

pub mod browse;
pub mod categories;
pub mod completions;
pub mod setup;

pub use self::{
    browse::{execute as browse, BrowseArgs},
    categories::{execute as categories, CategoriesArgs},
    completions::execute as completions,
    setup::execute as setup,
};
