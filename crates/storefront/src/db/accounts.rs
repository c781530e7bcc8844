//! Account repository.
//!
//! Owns the `jeen_accounts_v1` record and the `jeen_current_user_v1` session
//! pointer. Every mutation loads the whole account list, edits it, and saves
//! it back in one write.
//!
//! Entries are parsed one at a time. An entry that does not parse as an
//! [`Account`] is hidden from lookups but written back unchanged, so one bad
//! record never costs the other accounts.

use serde::{Deserialize, Serialize};

use jeen_core::email::normalize;

use super::{KeyValueStore, RepositoryError, keys, load_json, save_json};
use crate::models::account::Account;
use crate::models::session::CurrentUser;

/// One entry of the stored account list.
#[derive(Debug, Serialize)]
#[serde(untagged)]
enum StoredAccount {
    Readable(Account),
    Unreadable(serde_json::Value),
}

impl StoredAccount {
    fn parse(entry: serde_json::Value) -> Self {
        match Account::deserialize(&entry) {
            Ok(account) => Self::Readable(account),
            Err(e) => {
                tracing::warn!(error = %e, "Keeping unreadable account record as is");
                Self::Unreadable(entry)
            }
        }
    }

    const fn account(&self) -> Option<&Account> {
        match self {
            Self::Readable(account) => Some(account),
            Self::Unreadable(_) => None,
        }
    }

    fn has_key(&self, key: &str) -> bool {
        self.account().is_some_and(|a| a.email.key() == key)
    }
}

/// Repository for accounts and the session pointer.
pub struct AccountRepository<'a, S: KeyValueStore + ?Sized> {
    store: &'a S,
}

impl<'a, S: KeyValueStore + ?Sized> AccountRepository<'a, S> {
    /// Create a new account repository.
    #[must_use]
    pub const fn new(store: &'a S) -> Self {
        Self { store }
    }

    fn records(&self) -> Result<Vec<StoredAccount>, RepositoryError> {
        let entries: Vec<serde_json::Value> = load_json(self.store, keys::ACCOUNTS)?;
        Ok(entries.into_iter().map(StoredAccount::parse).collect())
    }

    /// All readable accounts, in registration order.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError` if the store cannot be read.
    pub fn list(&self) -> Result<Vec<Account>, RepositoryError> {
        Ok(self
            .records()?
            .into_iter()
            .filter_map(|record| match record {
                StoredAccount::Readable(account) => Some(account),
                StoredAccount::Unreadable(_) => None,
            })
            .collect())
    }

    /// Find an account by email, ignoring case and surrounding whitespace.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError` if the store cannot be read.
    pub fn find(&self, email: &str) -> Result<Option<Account>, RepositoryError> {
        let wanted = normalize(email);
        Ok(self
            .list()?
            .into_iter()
            .find(|account| account.email.key() == wanted))
    }

    /// Replace the account with the same email, or append it.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError` if the store cannot be read or written.
    pub fn upsert(&self, account: Account) -> Result<(), RepositoryError> {
        let mut records = self.records()?;
        let wanted = account.email.key();

        match records.iter_mut().find(|r| r.has_key(&wanted)) {
            Some(existing) => *existing = StoredAccount::Readable(account),
            None => records.push(StoredAccount::Readable(account)),
        }

        save_json(self.store, keys::ACCOUNTS, &records)
    }

    /// Replace the account stored under `old_email` with `updated`.
    ///
    /// The email may change. The record keeps its position, and the list is
    /// written once, so there is no moment where the account is missing.
    /// If `old_email` is not stored the account is appended.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Conflict` if `updated` takes an email owned by
    /// a different account; nothing is written in that case.
    /// Returns `RepositoryError` if the store cannot be read or written.
    pub fn replace(&self, old_email: &str, updated: Account) -> Result<(), RepositoryError> {
        let mut records = self.records()?;
        let old_key = normalize(old_email);
        let new_key = updated.email.key();

        let taken = new_key != old_key && records.iter().any(|r| r.has_key(&new_key));
        if taken {
            return Err(RepositoryError::Conflict(format!(
                "email already registered: {}",
                updated.email
            )));
        }

        match records.iter_mut().find(|r| r.has_key(&old_key)) {
            Some(slot) => *slot = StoredAccount::Readable(updated),
            None => records.push(StoredAccount::Readable(updated)),
        }

        save_json(self.store, keys::ACCOUNTS, &records)
    }

    /// The logged-in user, if any.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError` if the store cannot be read.
    pub fn current_user(&self) -> Result<Option<CurrentUser>, RepositoryError> {
        load_json(self.store, keys::CURRENT_USER)
    }

    /// Point the session at `user`.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError` if the write fails.
    pub fn set_current_user(&self, user: &CurrentUser) -> Result<(), RepositoryError> {
        save_json(self.store, keys::CURRENT_USER, user)
    }

    /// Clear the session pointer.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError` if the write fails.
    pub fn clear_current_user(&self) -> Result<(), RepositoryError> {
        self.store.remove(keys::CURRENT_USER)
    }
}
