//! # Storage
//!
//! Listings provider backed by the file system. Reads listing records from a
//! JSON or YAML file, or from every such file below a directory.
//!
//! Copyright (c) 2025 Dominic Rodemer. All rights reserved.
//! Licensed under the MIT License.

use std::{
    fs, io,
    path::{Path, PathBuf},
};

use serde_json::Value;
use thiserror::Error;
use walkdir::WalkDir;

use crate::{
    constants::{LISTING_FILE_EXTENSIONS, LISTING_WALK_MAX_DEPTH, LISTING_WRAPPER_KEYS},
    product::Product,
};

/// Errors raised while loading listings.
#[derive(Debug, Error)]
pub enum ListingsError {
    #[error("Listings not found: {}", .0.display())]
    NotFound(PathBuf),

    #[error("Failed to read listings: {}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("Failed to parse JSON listings: {}", path.display())]
    Json {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("Failed to parse YAML listings: {}", path.display())]
    Yaml {
        path: PathBuf,
        #[source]
        source: serde_yml::Error,
    },

    #[error("Unsupported listings format: {} (expected .json, .yaml, or .yml)", path.display())]
    UnsupportedFormat { path: PathBuf },

    #[error("Listings in {} must be an array or an object with a products, listings, or data array", path.display())]
    InvalidShape { path: PathBuf },
}

/// On-disk listing file format.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ListingFormat {
    Json,
    Yaml,
}

impl ListingFormat {
    /// Detects the format from a file extension
    pub fn from_path(path: &Path) -> Option<Self> {
        match path.extension()?.to_str()?.to_ascii_lowercase().as_str() {
            "json" => Some(Self::Json),
            "yaml" | "yml" => Some(Self::Yaml),
            _ => None,
        }
    }
}

/// Loads listings from a file or directory.
///
/// Inside a directory, files that fail to load are skipped with a warning.
/// A file named directly must load cleanly.
pub fn load_listings(path: &Path) -> Result<Vec<Product>, ListingsError> {
    if !path.exists() {
        return Err(ListingsError::NotFound(path.to_path_buf()));
    }

    if !path.is_dir() {
        return load_file(path);
    }

    let mut products = Vec::new();
    for file in walk_listing_files(path) {
        match load_file(&file) {
            Ok(mut loaded) => products.append(&mut loaded),
            Err(err) => tracing::warn!(error = %err, "skipping listings file"),
        }
    }

    tracing::debug!(
        dir = %path.display(),
        count = products.len(),
        "loaded listings directory"
    );
    Ok(products)
}

/// Walks all listing files below a directory, in path order.
pub fn walk_listing_files(dir: &Path) -> impl Iterator<Item = PathBuf> {
    WalkDir::new(dir)
        .min_depth(1)
        .max_depth(LISTING_WALK_MAX_DEPTH)
        .sort_by_file_name()
        .into_iter()
        .filter_map(Result::ok)
        .filter(|e| e.file_type().is_file())
        .filter(|e| {
            e.path()
                .extension()
                .and_then(|ext| ext.to_str())
                .is_some_and(|ext| {
                    LISTING_FILE_EXTENSIONS
                        .iter()
                        .any(|known| ext.eq_ignore_ascii_case(known))
                })
        })
        .map(walkdir::DirEntry::into_path)
}

/// Loads listings from a single file.
pub fn load_file(path: &Path) -> Result<Vec<Product>, ListingsError> {
    let format =
        ListingFormat::from_path(path).ok_or_else(|| ListingsError::UnsupportedFormat {
            path: path.to_path_buf(),
        })?;

    let content = fs::read_to_string(path).map_err(|source| ListingsError::Read {
        path: path.to_path_buf(),
        source,
    })?;

    let products = parse_listings(&content, format, path)?;
    tracing::debug!(file = %path.display(), count = products.len(), "loaded listings file");
    Ok(products)
}

/// Parses listing records from file content.
///
/// Accepts a top-level array, `null` (no listings), or an object wrapping the
/// array under `products`, `listings`, or `data`. Array elements that are not
/// records are skipped.
pub fn parse_listings(
    content: &str,
    format: ListingFormat,
    path: &Path,
) -> Result<Vec<Product>, ListingsError> {
    let document: Value = match format {
        ListingFormat::Json => {
            serde_json::from_str(content).map_err(|source| ListingsError::Json {
                path: path.to_path_buf(),
                source,
            })?
        }
        ListingFormat::Yaml if content.trim().is_empty() => Value::Null,
        ListingFormat::Yaml => {
            serde_yml::from_str(content).map_err(|source| ListingsError::Yaml {
                path: path.to_path_buf(),
                source,
            })?
        }
    };

    let records = match document {
        Value::Null => return Ok(Vec::new()),
        Value::Array(records) => records,
        Value::Object(mut wrapper) => LISTING_WRAPPER_KEYS
            .iter()
            .find_map(|key| match wrapper.remove(*key) {
                Some(Value::Array(records)) => Some(records),
                _ => None,
            })
            .ok_or_else(|| ListingsError::InvalidShape {
                path: path.to_path_buf(),
            })?,
        _ => {
            return Err(ListingsError::InvalidShape {
                path: path.to_path_buf(),
            })
        }
    };

    Ok(records
        .into_iter()
        .enumerate()
        .filter_map(|(index, record)| match serde_json::from_value(record) {
            Ok(product) => Some(product),
            Err(err) => {
                tracing::warn!(file = %path.display(), index, error = %err, "skipping malformed listing");
                None
            }
        })
        .collect())
}
