//! # Configuration
//!
//! Merged configuration system combining global (~/.config/pawmarket/config)
//! and project (.pawmarket) settings.
//!
//! Copyright (c) 2025 Dominic Rodemer. All rights reserved.
//! Licensed under the MIT License.

pub mod global;
pub mod project;

use std::path::{Path, PathBuf};

use anyhow::Result;

pub use self::{
    global::{set_home_override, GlobalConfig},
    project::ProjectConfig,
};
use crate::filter::SortBy;

/// Merged configuration with project settings overriding global
#[derive(Debug, Clone)]
pub struct Config {
    /// Global configuration
    pub global: GlobalConfig,

    /// Project configuration (defaults when outside a project)
    pub project: ProjectConfig,

    /// Resolved project root path, if inside a project
    pub project_root: Option<PathBuf>,
}

impl Config {
    /// Loads configuration from both global and project sources
    pub fn load() -> Result<Self> {
        let global = GlobalConfig::load()?;

        let cwd = std::env::current_dir()
            .map_err(|e| anyhow::anyhow!("Cannot get current directory: {e}"))?;
        let project_root = ProjectConfig::find_project_root(&cwd);

        let project = match project_root {
            Some(ref root) => ProjectConfig::load(root)?,
            None => ProjectConfig::default(),
        };

        Ok(Self {
            global,
            project,
            project_root,
        })
    }

    /// Resolves the listings source.
    ///
    /// Precedence: explicit path > project config > global config.
    pub fn listings_path(&self, explicit: Option<&Path>) -> Result<PathBuf> {
        if let Some(path) = explicit {
            return Ok(path.to_path_buf());
        }

        if let Some(path) = self
            .project_root
            .as_deref()
            .and_then(|root| self.project.listings_path(root))
        {
            return Ok(path);
        }

        if let Some(ref listings) = self.global.listings {
            return Ok(expand_home(listings));
        }

        anyhow::bail!(
            "No listings source configured. Pass --listings, or set listings in .pawmarket or ~/.config/pawmarket/config"
        )
    }

    /// Returns the effective page size (project overrides global)
    pub fn items_per_page(&self) -> usize {
        self.project
            .items_per_page
            .unwrap_or(self.global.items_per_page)
    }

    /// Returns the configured default sort order
    pub fn default_sort(&self) -> SortBy {
        SortBy::from(self.global.default_sort.clone())
    }

    /// Whether to colorize output
    pub const fn color(&self) -> bool {
        self.global.color
    }
}

/// Expands a leading `~/` to the home directory.
fn expand_home(path: &str) -> PathBuf {
    match (path.strip_prefix("~/"), dirs::home_dir()) {
        (Some(rest), Some(home)) => home.join(rest),
        _ => PathBuf::from(path),
    }
}
