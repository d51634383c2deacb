//! # Test Harness
//!
//! Provides utilities for integration testing pawmarket without affecting user configuration.
//! Uses thread-local storage instead of environment variables to avoid any interference
//! with the user's shell environment.
//!
//! Copyright (c) 2025 Dominic Rodemer. All rights reserved.
//! Licensed under the MIT License.

#![allow(dead_code)]

use std::{
    env, fs,
    path::{Path, PathBuf},
    sync::Mutex,
};

use assert_cmd::Command;
use serde_json::{json, Map, Value};
use tempfile::TempDir;

// Re-export from library - this is the mechanism for test isolation
use pawmarket::{set_home_override, Product};

/// Global lock to ensure tests run sequentially.
/// This prevents races when tests change the current directory.
static TEST_LOCK: Mutex<()> = Mutex::new(());

/// Test environment that manages temporary directories for both
/// the "home" directory (for global config) and the project directory.
pub struct TestEnv {
    /// Temporary directory simulating user's home (for ~/.config/pawmarket/config)
    pub home_dir: TempDir,
    /// Temporary directory for the project
    pub project_dir: TempDir,
    /// Original current directory to restore on drop
    original_cwd: PathBuf,
    /// Guard for the test lock
    test_guard: std::sync::MutexGuard<'static, ()>,
}

impl TestEnv {
    /// Creates a new test environment with temporary directories.
    ///
    /// Uses thread-local storage to redirect global config (no env var modification).
    /// Changes to the project directory for the duration of the test.
    pub fn new() -> Self {
        // Recover from poisoned mutex (if a previous test panicked while holding the lock)
        let test_guard = TEST_LOCK.lock().unwrap_or_else(|e| e.into_inner());

        let home_dir = TempDir::new().expect("Failed to create temp home dir");
        let project_dir = TempDir::new().expect("Failed to create temp project dir");

        let original_cwd = env::current_dir().expect("Failed to get current dir");

        set_home_override(Some(home_dir.path().to_path_buf()));
        env::set_current_dir(project_dir.path()).expect("Failed to change to project dir");

        Self {
            home_dir,
            project_dir,
            original_cwd,
            test_guard,
        }
    }

    /// Returns the path to the project directory.
    pub fn project_path(&self) -> &Path {
        self.project_dir.path()
    }

    /// Returns the path where global config would be stored.
    pub fn global_config_path(&self) -> PathBuf {
        self.home_dir
            .path()
            .join(".config")
            .join("pawmarket")
            .join("config")
    }

    /// Returns the path where project config would be stored.
    pub fn project_config_path(&self) -> PathBuf {
        self.project_dir.path().join(".pawmarket")
    }

    /// Creates a global config file with the given content.
    pub fn write_global_config(&self, content: &str) {
        let path = self.global_config_path();
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).expect("Failed to create global config directory");
        }
        fs::write(path, content).expect("Failed to write global config");
    }

    /// Creates a project config file with the given content.
    pub fn write_project_config(&self, content: &str) {
        fs::write(self.project_config_path(), content).expect("Failed to write project config");
    }

    /// Reads the global config file content.
    pub fn read_global_config(&self) -> String {
        fs::read_to_string(self.global_config_path()).unwrap_or_default()
    }

    /// Writes a file relative to the project directory, creating parents.
    pub fn write_file(&self, relative: &str, content: &str) -> PathBuf {
        let path = self.project_dir.path().join(relative);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).expect("Failed to create parent directory");
        }
        fs::write(&path, content).expect("Failed to write file");
        path
    }

    /// Writes listings as a JSON array relative to the project directory.
    pub fn write_listings(&self, relative: &str, listings: &[Value]) -> PathBuf {
        let content = serde_json::to_string_pretty(listings).expect("Failed to serialize listings");
        self.write_file(relative, &content)
    }

    /// Creates a pawm command configured to run in the test environment.
    pub fn pawm(&self) -> Command {
        let mut cmd = Command::cargo_bin("pawm").expect("pawm binary");
        cmd.current_dir(self.project_dir.path());
        cmd.env("HOME", self.home_dir.path());
        cmd.env_remove("PAWM_LOG");
        cmd
    }
}

impl Drop for TestEnv {
    fn drop(&mut self) {
        // Restore original working directory first
        let _ = env::set_current_dir(&self.original_cwd);

        // Clear the thread-local home override
        set_home_override(None);
    }
}

// =============================================================================
// Listing Helpers
// =============================================================================

/// Builder for listing records as they appear in listing files.
///
/// Fields are kept as JSON values so tests can use strings or numbers freely.
#[derive(Debug, Clone)]
pub struct ListingBuilder {
    fields: Map<String, Value>,
}

impl ListingBuilder {
    pub fn new(name: &str) -> Self {
        let mut fields = Map::new();
        fields.insert("name".into(), json!(name));
        Self { fields }
    }

    pub fn field(mut self, key: &str, value: Value) -> Self {
        self.fields.insert(key.into(), value);
        self
    }

    pub fn id(self, id: u64) -> Self {
        self.field("id", json!(id))
    }

    pub fn category(self, category: &str) -> Self {
        self.field("category", json!(category))
    }

    pub fn description(self, description: &str) -> Self {
        self.field("description", json!(description))
    }

    pub fn breed(self, breed: &str) -> Self {
        self.field("breed", json!(breed))
    }

    pub fn price(self, price: Value) -> Self {
        self.field("price", price)
    }

    pub fn rating(self, rating: Value) -> Self {
        self.field("rating", rating)
    }

    pub fn location(self, location: &str) -> Self {
        self.field("location", json!(location))
    }

    pub fn created_at(self, created_at: Value) -> Self {
        self.field("createdAt", created_at)
    }

    pub fn date(self, date: Value) -> Self {
        self.field("date", date)
    }

    /// Returns the raw JSON record.
    pub fn json(&self) -> Value {
        Value::Object(self.fields.clone())
    }

    /// Returns the record parsed as a [`Product`].
    pub fn build(&self) -> Product {
        serde_json::from_value(self.json()).expect("valid listing")
    }
}

/// The two listings used throughout the engine scenarios.
pub fn bella_and_max() -> Vec<ListingBuilder> {
    vec![
        ListingBuilder::new("Bella")
            .category("Pets")
            .price(json!("0"))
            .rating(json!("4.5"))
            .location("NY")
            .created_at(json!("2024-01-01")),
        ListingBuilder::new("Max")
            .category("Pet Food")
            .price(json!("20"))
            .rating(json!("3"))
            .location("LA")
            .created_at(json!("2024-06-01")),
    ]
}

/// Creates `count` listings named `Pet 00`, `Pet 01`, ... one day apart.
pub fn numbered_listings(count: usize) -> Vec<ListingBuilder> {
    (0..count)
        .map(|i| {
            ListingBuilder::new(&format!("Pet {i:02}"))
                .id(i as u64)
                .price(json!(i * 10))
                .created_at(json!(format!("2024-01-{:02}T12:00:00Z", i % 28 + 1)))
        })
        .collect()
}

/// Converts builders into JSON records.
pub fn to_json(listings: &[ListingBuilder]) -> Vec<Value> {
    listings.iter().map(ListingBuilder::json).collect()
}

/// Converts builders into products.
pub fn to_products(listings: &[ListingBuilder]) -> Vec<Product> {
    listings.iter().map(ListingBuilder::build).collect()
}

/// Extracts listing names in order.
pub fn names(products: &[&Product]) -> Vec<String> {
    products.iter().map(|p| p.name().to_string()).collect()
}

// =============================================================================
// Config Builder Helpers
// =============================================================================

/// Helper to build TOML config lines from optional values.
struct ConfigLines(Vec<String>);

impl ConfigLines {
    fn new() -> Self {
        Self(Vec::new())
    }

    fn add_string(&mut self, key: &str, value: Option<&str>) {
        if let Some(v) = value {
            self.0.push(format!("{key} = \"{v}\""));
        }
    }

    fn add_number(&mut self, key: &str, value: Option<usize>) {
        if let Some(v) = value {
            self.0.push(format!("{key} = {v}"));
        }
    }

    fn add_bool(&mut self, key: &str, value: Option<bool>) {
        if let Some(v) = value {
            self.0.push(format!("{key} = {v}"));
        }
    }

    fn build(self) -> String {
        self.0.join("\n")
    }
}

/// Builder for creating test global configurations.
#[derive(Default)]
pub struct GlobalConfigBuilder {
    listings: Option<String>,
    items_per_page: Option<usize>,
    default_sort: Option<String>,
    color: Option<bool>,
}

impl GlobalConfigBuilder {
    pub fn new() -> Self {
        Self {
            color: Some(false),
            ..Self::default()
        }
    }

    pub fn listings(mut self, listings: impl Into<String>) -> Self {
        self.listings = Some(listings.into());
        self
    }

    pub fn items_per_page(mut self, n: usize) -> Self {
        self.items_per_page = Some(n);
        self
    }

    pub fn default_sort(mut self, sort: impl Into<String>) -> Self {
        self.default_sort = Some(sort.into());
        self
    }

    pub fn build(&self) -> String {
        let mut lines = ConfigLines::new();
        lines.add_string("listings", self.listings.as_deref());
        lines.add_number("items_per_page", self.items_per_page);
        lines.add_string("default_sort", self.default_sort.as_deref());
        lines.add_bool("color", self.color);
        lines.build()
    }
}

/// Builder for creating project configurations.
///
/// All fields are optional - project config values override global config.
#[derive(Default)]
pub struct ProjectConfigBuilder {
    listings: Option<String>,
    items_per_page: Option<usize>,
}

impl ProjectConfigBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn listings(mut self, listings: impl Into<String>) -> Self {
        self.listings = Some(listings.into());
        self
    }

    pub fn items_per_page(mut self, n: usize) -> Self {
        self.items_per_page = Some(n);
        self
    }

    pub fn build(&self) -> String {
        let mut lines = ConfigLines::new();
        lines.add_string("listings", self.listings.as_deref());
        lines.add_number("items_per_page", self.items_per_page);
        lines.build()
    }
}
