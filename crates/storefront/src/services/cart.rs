//! Cart service.
//!
//! Owns the in-memory cart for one page lifetime. Every dispatched action is
//! reduced, written through to the store as a whole list, and then announced
//! to the registered [`CartObserver`]s.

use std::time::Duration;

use thiserror::Error;
use tracing::instrument;

use crate::customization::{Selection, VariantKey, preview_image};
use crate::db::cart::CartRepository;
use crate::db::{KeyValueStore, RepositoryError};
use crate::models::cart::{Cart, CartAction};
use crate::models::line_item::{LineItem, LineItemError, MenuItem};

/// How long the fly-to-cart animation runs.
pub const FLY_TO_CART_DURATION: Duration = Duration::from_millis(600);

/// Errors adding to or mutating the cart.
#[derive(Debug, Error)]
pub enum CartError {
    /// The menu card could not be turned into a line item.
    #[error(transparent)]
    InvalidItem(#[from] LineItemError),

    /// Storage error.
    #[error(transparent)]
    Repository(#[from] RepositoryError),
}

/// Receives the cart after every mutation.
///
/// Pages register observers (such as the header badge) explicitly.
pub trait CartObserver {
    /// Called after the cart has been persisted.
    fn cart_changed(&self, cart: &Cart);
}

impl<F: Fn(&Cart)> CartObserver for F {
    fn cart_changed(&self, cart: &Cart) {
        self(cart);
    }
}

/// Cosmetic animation cue for a configured meal landing in the cart.
///
/// Returned after the item is already stored; playing it never affects state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FlyToCart {
    /// Image that flies to the header badge.
    pub image: String,
    pub duration: Duration,
}

/// Result of adding a configured meal.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AddedToCart {
    pub item: LineItem,
    pub cue: FlyToCart,
}

/// Cart service.
pub struct CartService<'a, S: KeyValueStore + ?Sized> {
    repo: CartRepository<'a, S>,
    cart: Cart,
    assets_dir: String,
    observers: Vec<&'a dyn CartObserver>,
}

impl<'a, S: KeyValueStore + ?Sized> CartService<'a, S> {
    /// Load the stored cart.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError` if the store cannot be read.
    pub fn load(store: &'a S, assets_dir: impl Into<String>) -> Result<Self, RepositoryError> {
        let repo = CartRepository::new(store);
        let cart = repo.load()?;
        Ok(Self {
            repo,
            cart,
            assets_dir: assets_dir.into(),
            observers: Vec::new(),
        })
    }

    /// Register an observer and send it the current cart.
    pub fn subscribe(&mut self, observer: &'a dyn CartObserver) {
        observer.cart_changed(&self.cart);
        self.observers.push(observer);
    }

    /// The current cart.
    #[must_use]
    pub const fn cart(&self) -> &Cart {
        &self.cart
    }

    /// Apply an action, persist, and notify observers.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError` if the write fails. The in-memory cart keeps
    /// the new state.
    #[instrument(skip(self, action))]
    pub fn dispatch(&mut self, action: CartAction) -> Result<&Cart, RepositoryError> {
        let clearing = matches!(action, CartAction::Clear);
        self.cart = std::mem::take(&mut self.cart).reduce(action);

        if clearing {
            self.repo.clear()?;
        } else {
            self.repo.save(&self.cart)?;
        }

        tracing::debug!(
            lines = self.cart.len(),
            count = self.cart.item_count(),
            "Cart updated"
        );

        for observer in &self.observers {
            observer.cart_changed(&self.cart);
        }
        Ok(&self.cart)
    }

    /// Add a menu card; repeats merge into one line.
    ///
    /// # Errors
    ///
    /// Returns `CartError::InvalidItem` for a blank name or an out-of-range price.
    pub fn add_from_menu(&mut self, item: MenuItem) -> Result<LineItem, CartError> {
        let line = item.into_line_item()?;
        self.dispatch(CartAction::AddFromMenu(line.clone()))?;
        Ok(line)
    }

    /// Add a configured meal as a new line.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError` if the write fails.
    pub fn add_customized(&mut self, selection: &Selection) -> Result<AddedToCart, RepositoryError> {
        let item = selection.to_line_item(&self.assets_dir);
        self.dispatch(CartAction::AddCustomized(item.clone()))?;

        let cue = FlyToCart {
            image: item.image.clone(),
            duration: FLY_TO_CART_DURATION,
        };
        Ok(AddedToCart { item, cue })
    }

    /// Empty the cart and remove its storage record.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError` if the write fails.
    pub fn clear(&mut self) -> Result<(), RepositoryError> {
        self.dispatch(CartAction::Clear)?;
        Ok(())
    }

    /// Preview image for a variant under this service's assets directory.
    #[must_use]
    pub fn preview_image(&self, variant: VariantKey) -> String {
        preview_image(&self.assets_dir, variant)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use std::cell::Cell;

    use rust_decimal::Decimal;

    use super::*;
    use crate::customization::{Protein, Veggies};
    use crate::db::{MemoryStore, keys};

    fn shake() -> MenuItem {
        MenuItem {
            name: "Protein Shake".to_owned(),
            price: Decimal::from(7),
            image: "/img/shake.png".to_owned(),
            description: "Vanilla".to_owned(),
        }
    }

    #[test]
    fn test_mutations_are_written_through() {
        let store = MemoryStore::new();
        let mut service = CartService::load(&store, "/a/").unwrap();
        service.add_from_menu(shake()).unwrap();
        service.add_from_menu(shake()).unwrap();

        let reloaded = CartService::load(&store, "/a/").unwrap();
        assert_eq!(reloaded.cart().len(), 1);
        assert_eq!(reloaded.cart().items()[0].quantity, 2);
        assert_eq!(reloaded.cart().items()[0].id.as_str(), "protein-shake");
    }

    #[test]
    fn test_observers_see_every_change() {
        let store = MemoryStore::new();
        let seen = Cell::new(u32::MAX);
        let observer = |cart: &Cart| seen.set(cart.item_count());

        let mut service = CartService::load(&store, "/a/").unwrap();
        service.subscribe(&observer);
        assert_eq!(seen.get(), 0);

        service.add_from_menu(shake()).unwrap();
        assert_eq!(seen.get(), 1);
        service.dispatch(CartAction::Increment(0)).unwrap();
        assert_eq!(seen.get(), 2);
        service.clear().unwrap();
        assert_eq!(seen.get(), 0);
    }

    #[test]
    fn test_add_customized_returns_cue_after_write() {
        let store = MemoryStore::new();
        let mut service = CartService::load(&store, "/customization/assets/").unwrap();
        let selection = Selection {
            protein: Protein::Eggs,
            veggies: Veggies::Avocado,
            ..Selection::default()
        };

        let added = service.add_customized(&selection).unwrap();
        assert_eq!(added.cue.duration, Duration::from_millis(600));
        assert_eq!(added.cue.image, "/customization/assets/avocado.png");
        assert!(store.get(keys::CART_ITEMS).unwrap().unwrap().contains("Usual Sando"));

        service.add_customized(&selection).unwrap();
        assert_eq!(service.cart().len(), 2);
    }

    #[test]
    fn test_invalid_menu_item_is_rejected() {
        let store = MemoryStore::new();
        let mut service = CartService::load(&store, "/a/").unwrap();
        let result = service.add_from_menu(MenuItem {
            price: Decimal::ZERO,
            ..shake()
        });
        assert!(matches!(result, Err(CartError::InvalidItem(_))));
        assert!(service.cart().is_empty());
        assert!(!store.contains(keys::CART_ITEMS));
    }

    #[test]
    fn test_clear_removes_key() {
        let store = MemoryStore::new();
        let mut service = CartService::load(&store, "/a/").unwrap();
        service.add_from_menu(shake()).unwrap();
        service.clear().unwrap();
        assert!(!store.contains(keys::CART_ITEMS));
        assert!(service.cart().is_empty());
    }
}
