//! Persistent key-value storage for the ordering site.
//!
//! The site keeps all state client-side in a string key-value store (browser
//! local storage). This module abstracts that store behind [`KeyValueStore`]
//! and provides the repositories that own each record.
//!
//! ## Records
//!
//! - `cartItems` - Ordered list of cart line items ([`keys::CART_ITEMS`])
//! - `jeen_cart_v1` - Legacy configurator cart, merged into `cartItems` on load
//! - `jeen_accounts_v1` - Account list ([`keys::ACCOUNTS`])
//! - `jeen_current_user_v1` - Session pointer ([`keys::CURRENT_USER`])
//!
//! Every record is JSON and is read and written as a whole: there are no
//! partial updates, and concurrent writers are last-write-wins.

pub mod accounts;
pub mod cart;
pub mod file;
pub mod memory;

use serde::Serialize;
use serde::de::DeserializeOwned;
use thiserror::Error;

pub use file::FileStore;
pub use memory::MemoryStore;

/// Storage keys, one per record.
pub mod keys {
    /// Canonical cart line items.
    pub const CART_ITEMS: &str = "cartItems";

    /// Cart written by the first configurator release.
    pub const LEGACY_CART: &str = "jeen_cart_v1";

    /// Registered accounts.
    pub const ACCOUNTS: &str = "jeen_accounts_v1";

    /// The logged-in user snapshot.
    pub const CURRENT_USER: &str = "jeen_current_user_v1";
}

/// Errors raised by the storage layer.
#[derive(Debug, Error)]
pub enum RepositoryError {
    /// Reading or writing the backing medium failed.
    #[error("storage I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// A record could not be serialized.
    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// The key cannot be used with this store.
    #[error("invalid storage key: {0}")]
    InvalidKey(String),

    /// A uniqueness constraint would be violated.
    #[error("conflict: {0}")]
    Conflict(String),
}

/// A string key-value store with whole-value reads and writes.
///
/// Methods take `&self`: a store is a shared handle in the way a browser's
/// local storage is, and repositories borrow it rather than owning it. Stores
/// are single-threaded and need not be `Sync`.
pub trait KeyValueStore {
    /// Read the value stored under `key`.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError` if the backing medium cannot be read.
    fn get(&self, key: &str) -> Result<Option<String>, RepositoryError>;

    /// Store `value` under `key`, replacing any previous value.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError` if the backing medium cannot be written.
    fn set(&self, key: &str, value: &str) -> Result<(), RepositoryError>;

    /// Delete `key`. Removing an absent key is not an error.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError` if the backing medium cannot be written.
    fn remove(&self, key: &str) -> Result<(), RepositoryError>;
}

/// Load a JSON record, treating absent or unparsable data as empty.
///
/// Corruption is recovered locally: the value is logged and replaced by
/// `T::default()`, never surfaced to the caller.
///
/// # Errors
///
/// Returns `RepositoryError` only if the store itself cannot be read.
pub fn load_json<T, S>(store: &S, key: &str) -> Result<T, RepositoryError>
where
    T: DeserializeOwned + Default,
    S: KeyValueStore + ?Sized,
{
    let Some(raw) = store.get(key)? else {
        return Ok(T::default());
    };

    // `null` is what the browser stores for a cleared pointer.
    if raw.trim().is_empty() || raw.trim() == "null" {
        return Ok(T::default());
    }

    match serde_json::from_str(&raw) {
        Ok(value) => Ok(value),
        Err(e) => {
            tracing::warn!(key, error = %e, "Discarding unparsable storage record");
            Ok(T::default())
        }
    }
}

/// Serialize and store a whole JSON record.
///
/// # Errors
///
/// Returns `RepositoryError` if serialization or the write fails.
pub fn save_json<T, S>(store: &S, key: &str, value: &T) -> Result<(), RepositoryError>
where
    T: Serialize + ?Sized,
    S: KeyValueStore + ?Sized,
{
    let raw = serde_json::to_string(value)?;
    store.set(key, &raw)
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_load_json_absent_is_default() {
        let store = MemoryStore::new();
        let value: Vec<u32> = load_json(&store, "missing").unwrap();
        assert!(value.is_empty());
    }

    #[test]
    fn test_load_json_corrupt_is_default() {
        let store = MemoryStore::new();
        store.set("numbers", "[1, 2,").unwrap();
        let value: Vec<u32> = load_json(&store, "numbers").unwrap();
        assert!(value.is_empty());
    }

    #[test]
    fn test_load_json_null_is_default() {
        let store = MemoryStore::new();
        store.set("pointer", "null").unwrap();
        let value: Option<String> = load_json(&store, "pointer").unwrap();
        assert!(value.is_none());
    }

    #[test]
    fn test_save_then_load() {
        let store = MemoryStore::new();
        save_json(&store, "numbers", &[3_u32, 1, 2]).unwrap();
        assert_eq!(store.get("numbers").unwrap().as_deref(), Some("[3,1,2]"));
        let value: Vec<u32> = load_json(&store, "numbers").unwrap();
        assert_eq!(value, vec![3, 1, 2]);
    }
}
