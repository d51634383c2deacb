//! # Project Configuration
//!
//! Handles the project-level configuration stored at `.pawmarket` in the project root.
//!
//! Copyright (c) 2025 Dominic Rodemer. All rights reserved.
//! Licensed under the MIT License.

use std::{
    fs,
    path::{Path, PathBuf},
};

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

use crate::constants::PROJECT_CONFIG_FILE;

/// Project configuration stored at .pawmarket in the project root.
///
/// Every field is optional and overrides the global value when set.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProjectConfig {
    /// Listings file or directory, relative to the project root
    #[serde(default)]
    pub listings: Option<String>,

    /// Listings shown per page
    #[serde(default)]
    pub items_per_page: Option<usize>,
}

impl ProjectConfig {
    /// Finds the project root by searching for .pawmarket upward from `start`
    pub fn find_project_root(start: &Path) -> Option<PathBuf> {
        start
            .ancestors()
            .find(|dir| dir.join(PROJECT_CONFIG_FILE).is_file())
            .map(Path::to_path_buf)
    }

    /// Returns the path to the project config file
    pub fn path(project_root: &Path) -> PathBuf {
        project_root.join(PROJECT_CONFIG_FILE)
    }

    /// Loads the project config from .pawmarket in the given directory
    pub fn load(project_root: &Path) -> Result<Self> {
        let path = Self::path(project_root);

        if !path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(&path)
            .with_context(|| format!("Failed to read project config: {}", path.display()))?;

        let config: Self = toml::from_str(&content)
            .with_context(|| format!("Failed to parse project config: {}", path.display()))?;

        if config.items_per_page == Some(0) {
            anyhow::bail!(
                "Invalid items_per_page in {}: must be at least 1",
                path.display()
            );
        }

        Ok(config)
    }

    /// Returns the listings path resolved against the project root
    pub fn listings_path(&self, project_root: &Path) -> Option<PathBuf> {
        self.listings
            .as_ref()
            .map(|listings| project_root.join(listings))
    }
}
