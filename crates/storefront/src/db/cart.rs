//! Cart repository.
//!
//! Owns the `cartItems` record. Carts written by the first configurator
//! release under `jeen_cart_v1` are folded into `cartItems` the first time
//! the cart is loaded, and the legacy key is removed.

use rust_decimal::Decimal;
use serde::Deserialize;

use jeen_core::LineItemId;

use super::{KeyValueStore, RepositoryError, keys, load_json, save_json};
use crate::customization::{CUSTOM_ITEM_NAME, Selection, VariantKey};
use crate::models::cart::Cart;
use crate::models::line_item::{LineItem, Nutrition};

/// Record shape written by the first configurator release.
#[derive(Debug, Deserialize)]
struct LegacyCartEntry {
    #[serde(default)]
    name: Option<String>,
    #[serde(default)]
    key: Option<VariantKey>,
    #[serde(default)]
    selections: Selection,
    #[serde(default)]
    preview: String,
    totals: LegacyTotals,
}

#[derive(Debug, Deserialize)]
struct LegacyTotals {
    #[serde(with = "rust_decimal::serde::float")]
    price: Decimal,
    #[serde(default)]
    cal: u32,
    #[serde(default, with = "rust_decimal::serde::float")]
    p: Decimal,
    #[serde(default, with = "rust_decimal::serde::float")]
    c: Decimal,
    #[serde(default, with = "rust_decimal::serde::float")]
    f: Decimal,
}

impl From<LegacyCartEntry> for LineItem {
    fn from(entry: LegacyCartEntry) -> Self {
        let selection = entry.selections;
        if let Some(key) = entry.key
            && key != selection.variant()
        {
            tracing::debug!(stored = %key, computed = %selection.variant(), "Legacy variant key differs");
        }

        Self {
            id: LineItemId::generate_custom(),
            name: entry.name.unwrap_or_else(|| CUSTOM_ITEM_NAME.to_owned()),
            price: entry.totals.price,
            image: entry.preview,
            description: selection.description(),
            quantity: 1,
            customization_state: Some(selection),
            nutrition: Some(Nutrition {
                calories: entry.totals.cal,
                protein: entry.totals.p,
                carbs: entry.totals.c,
                fat: entry.totals.f,
            }),
        }
    }
}

/// Repository for the cart record.
pub struct CartRepository<'a, S: KeyValueStore + ?Sized> {
    store: &'a S,
}

impl<'a, S: KeyValueStore + ?Sized> CartRepository<'a, S> {
    /// Create a new cart repository.
    #[must_use]
    pub const fn new(store: &'a S) -> Self {
        Self { store }
    }

    /// Load the cart, folding in any legacy records.
    ///
    /// Lines are read one at a time; a line that no longer parses is dropped
    /// with a warning and the rest of the cart is kept.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError` if the store cannot be read, or if migrated
    /// legacy records cannot be written back.
    pub fn load(&self) -> Result<Cart, RepositoryError> {
        let entries: Vec<serde_json::Value> = load_json(self.store, keys::CART_ITEMS)?;
        let items = entries
            .into_iter()
            .filter_map(|entry| match serde_json::from_value::<LineItem>(entry) {
                Ok(item) => Some(item),
                Err(e) => {
                    tracing::warn!(error = %e, "Dropping unreadable cart line");
                    None
                }
            })
            .collect();
        let mut cart = Cart::from_items(items);

        if self.store.get(keys::LEGACY_CART)?.is_some() {
            cart = self.migrate_legacy(cart)?;
        }

        Ok(cart)
    }

    fn migrate_legacy(&self, cart: Cart) -> Result<Cart, RepositoryError> {
        let entries: Vec<serde_json::Value> = load_json(self.store, keys::LEGACY_CART)?;
        let mut items = cart.into_items();
        let before = items.len();

        for entry in entries {
            match serde_json::from_value::<LegacyCartEntry>(entry) {
                Ok(entry) => items.push(entry.into()),
                Err(e) => tracing::warn!(error = %e, "Dropping unreadable legacy cart entry"),
            }
        }

        let cart = Cart::from_items(items);
        self.save(&cart)?;
        self.store.remove(keys::LEGACY_CART)?;

        tracing::info!(
            migrated = cart.len() - before,
            "Merged legacy configurator cart into cartItems"
        );
        Ok(cart)
    }

    /// Persist the whole cart.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError` if the write fails.
    pub fn save(&self, cart: &Cart) -> Result<(), RepositoryError> {
        save_json(self.store, keys::CART_ITEMS, cart)
    }

    /// Remove the cart record entirely.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError` if the write fails.
    pub fn clear(&self) -> Result<(), RepositoryError> {
        self.store.remove(keys::CART_ITEMS)
    }
}
