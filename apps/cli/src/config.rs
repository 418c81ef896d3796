//! # CLI Configuration
//!
//! ## Configuration Sources (Priority Order)
//! 1. Environment variables (`SHOPFRONT_*`)
//! 2. Defaults (this file)
//!
//! Configuration is read once at startup and never changes afterwards.

use std::path::PathBuf;

/// Store name used when `SHOPFRONT_STORE_NAME` is unset.
pub const DEFAULT_STORE_NAME: &str = "Best Buy";

/// Runtime configuration for the text menu.
#[derive(Debug, Clone, PartialEq)]
pub struct CliConfig {
    /// Banner shown above the menu.
    pub store_name: String,

    /// Catalog document to load. `None` uses the bundled sample catalog.
    pub catalog_path: Option<PathBuf>,
}

impl Default for CliConfig {
    fn default() -> Self {
        CliConfig {
            store_name: DEFAULT_STORE_NAME.to_string(),
            catalog_path: None,
        }
    }
}

impl CliConfig {
    /// Creates a config from environment variables and defaults.
    ///
    /// ## Environment Variables
    /// - `SHOPFRONT_STORE_NAME`: Override store name
    /// - `SHOPFRONT_CATALOG`: Path to a catalog JSON document
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let mut config = CliConfig::default();

        if let Some(store_name) = lookup("SHOPFRONT_STORE_NAME") {
            if !store_name.trim().is_empty() {
                config.store_name = store_name;
            }
        }

        if let Some(path) = lookup("SHOPFRONT_CATALOG") {
            if !path.trim().is_empty() {
                config.catalog_path = Some(PathBuf::from(path));
            }
        }

        config
    }
}
