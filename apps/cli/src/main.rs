//! # Shopfront CLI
//!
//! Text-menu front end for the store.
//!
//! ## Startup Sequence
//! ```text
//! 1. Initialize logging (stderr, RUST_LOG or "warn,shopfront=info")
//! 2. Read CliConfig from SHOPFRONT_* variables
//! 3. Load catalog: SHOPFRONT_CATALOG file, else the bundled sample
//! 4. Run the menu on stdin/stdout
//! ```

mod config;
mod menu;

use std::fs;
use std::io;

use anyhow::{Context, Result};
use shopfront_core::{CatalogSpec, Store};
use tracing::info;
use tracing_subscriber::EnvFilter;

use config::CliConfig;
use menu::Session;

fn main() -> Result<()> {
    init_tracing();

    let config = CliConfig::from_env();
    let store = load_store(&config)?;
    info!(items = store.len(), store = %config.store_name, "catalog loaded");

    let stdin = io::stdin();
    let stdout = io::stdout();
    let mut session = Session::new(store, config.store_name, stdin.lock(), stdout.lock());
    session.run().context("terminal I/O failed")?;

    Ok(())
}

/// Initializes the tracing subscriber.
///
/// Logs go to stderr so they never interleave with the menu.
fn init_tracing() {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("warn,shopfront=info"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}

fn load_store(config: &CliConfig) -> Result<Store> {
    let spec = match &config.catalog_path {
        Some(path) => {
            let json = fs::read_to_string(path)
                .with_context(|| format!("reading catalog {}", path.display()))?;
            CatalogSpec::from_json(&json)
                .with_context(|| format!("parsing catalog {}", path.display()))?
        }
        None => CatalogSpec::sample()?,
    };
    spec.build().context("building store from catalog")
}
