//! Integration tests for the Jeen ordering site.
//!
//! # Running Tests
//!
//! ```bash
//! cargo test -p jeen-integration-tests
//! ```
//!
//! # Test Categories
//!
//! - `cart_flow` - Menu and configurator adds, quantity edits, totals
//! - `checkout` - The wizard from summary to confirmation
//! - `accounts` - Sign-up, login and profile edits
//! - `persistence` - File store round trips and legacy cart migration
//! - `property_invariants` - Reducer properties under proptest
//!
//! This crate only holds shared fixtures.

use rust_decimal::Decimal;
use tempfile::TempDir;

use jeen_storefront::db::{FileStore, MemoryStore, RepositoryError};
use jeen_storefront::models::MenuItem;
use jeen_storefront::{Storefront, StorefrontConfig};

/// A storefront over an in-memory store with default configuration.
#[must_use]
pub fn memory_site() -> Storefront<MemoryStore> {
    Storefront::new(StorefrontConfig::default(), MemoryStore::new())
}

/// A menu card priced in cents.
#[must_use]
pub fn menu_item(name: &str, cents: i64) -> MenuItem {
    MenuItem {
        name: name.to_owned(),
        price: Decimal::new(cents, 2),
        image: format!("/menu/{}.png", name.to_lowercase().replace(' ', "_")),
        description: format!("{name} from the menu"),
    }
}

/// A file-backed storefront in a temporary directory.
///
/// The directory lives as long as the fixture, so the store can be reopened
/// to simulate a page reload.
pub struct TempSite {
    dir: TempDir,
}

impl TempSite {
    /// Create an empty data directory.
    ///
    /// # Errors
    ///
    /// Returns `std::io::Error` if the temporary directory cannot be created.
    pub fn new() -> std::io::Result<Self> {
        Ok(Self {
            dir: tempfile::tempdir()?,
        })
    }

    /// Open the store, as a freshly loaded page would.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError` if the store cannot be opened.
    pub fn open(&self) -> Result<Storefront<FileStore>, RepositoryError> {
        let config = StorefrontConfig {
            data_dir: self.dir.path().to_path_buf(),
            ..StorefrontConfig::default()
        };
        Storefront::open(config)
    }

    /// Path of the file holding `key`.
    #[must_use]
    pub fn record_path(&self, key: &str) -> std::path::PathBuf {
        self.dir.path().join(format!("{key}.json"))
    }

    /// Raw JSON stored under `key`, if any.
    ///
    /// # Errors
    ///
    /// Returns `serde_json::Error` if the file holds invalid JSON.
    pub fn record(&self, key: &str) -> Result<Option<serde_json::Value>, serde_json::Error> {
        std::fs::read_to_string(self.record_path(key))
            .ok()
            .map(|raw| serde_json::from_str(&raw))
            .transpose()
    }
}
