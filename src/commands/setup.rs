//! # Setup Command
//!
//! Creates the global configuration file with documented defaults.
//!
//! Copyright (c) 2025 Dominic Rodemer. All rights reserved.
//! Licensed under the MIT License.

use anyhow::Result;
use owo_colors::OwoColorize;

use crate::config::GlobalConfig;

/// Executes the setup command.
pub fn execute() -> Result<()> {
    let path = GlobalConfig::path()
        .ok_or_else(|| anyhow::anyhow!("Could not determine config directory"))?;

    if GlobalConfig::create_default_if_missing()? {
        println!("{} Created global config: {}", "✓".green(), path.display());
        tracing::info!(path = %path.display(), "created global config");
    } else {
        println!("Global config already exists: {}", path.display());
    }

    Ok(())
}
