//! Storefront state shared across operations.

use crate::config::StorefrontConfig;
use crate::db::{FileStore, KeyValueStore, RepositoryError};
use crate::error::Result;
use crate::services::auth::AuthService;
use crate::services::cart::CartService;
use crate::services::checkout::Checkout;
use crate::services::profile::ProfileService;
use crate::views::header::HeaderState;

/// The store plus configuration: everything a page needs.
///
/// Services borrow the store for the duration of one operation.
pub struct Storefront<S: KeyValueStore> {
    config: StorefrontConfig,
    store: S,
}

impl Storefront<FileStore> {
    /// Open the file-backed store in `config.data_dir`.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError` if the data directory cannot be created.
    pub fn open(config: StorefrontConfig) -> std::result::Result<Self, RepositoryError> {
        let store = FileStore::open(config.data_dir.clone())?;
        Ok(Self::new(config, store))
    }
}

impl<S: KeyValueStore> Storefront<S> {
    #[must_use]
    pub const fn new(config: StorefrontConfig, store: S) -> Self {
        Self { config, store }
    }

    /// Get a reference to the storefront configuration.
    #[must_use]
    pub const fn config(&self) -> &StorefrontConfig {
        &self.config
    }

    /// Get a reference to the backing store.
    #[must_use]
    pub const fn store(&self) -> &S {
        &self.store
    }

    /// Load the cart for this page.
    ///
    /// # Errors
    ///
    /// Returns `AppError::Storage` if the cart cannot be read.
    pub fn cart(&self) -> Result<CartService<'_, S>> {
        Ok(CartService::load(&self.store, self.config.assets_dir.clone())?)
    }

    #[must_use]
    pub const fn auth(&self) -> AuthService<'_, S> {
        AuthService::new(&self.store)
    }

    #[must_use]
    pub const fn profile(&self) -> ProfileService<'_, S> {
        ProfileService::new(&self.store)
    }

    /// A fresh checkout wizard.
    #[must_use]
    pub fn checkout(&self) -> Checkout {
        Checkout::new(self.config.home_url.clone())
    }

    /// Header state for the current cart and session.
    ///
    /// # Errors
    ///
    /// Returns `AppError` if the cart or session cannot be read.
    pub fn header(&self) -> Result<HeaderState> {
        let count = self.cart()?.cart().item_count();
        let user = self.auth().current_user()?;
        Ok(HeaderState::new(
            count,
            user.as_ref(),
            self.config.profile_url.clone(),
        ))
    }
}
