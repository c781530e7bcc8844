//! Cart line items.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use jeen_core::{CurrencyCode, LineItemId, Price};

use crate::customization::Selection;

/// Errors building a line item from menu input.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LineItemError {
    /// The product has no name to derive an id from.
    #[error("menu item name cannot be empty")]
    EmptyName,
    /// Items must cost something.
    #[error("menu item price must be greater than zero (got {0})")]
    NonPositivePrice(Decimal),
    /// Above [`MAX_UNIT_PRICE`].
    #[error("menu item price cannot exceed 1000000 (got {0})")]
    PriceTooHigh(Decimal),
}

/// Highest unit price a menu card may carry.
pub const MAX_UNIT_PRICE: Decimal = Decimal::from_parts(1_000_000, 0, 0, false, 0);

/// Nutrition facts for one serving.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Nutrition {
    /// Energy in kcal.
    pub calories: u32,
    /// Protein in grams.
    #[serde(with = "rust_decimal::serde::float")]
    pub protein: Decimal,
    /// Carbohydrates in grams.
    #[serde(with = "rust_decimal::serde::float")]
    pub carbs: Decimal,
    /// Fat in grams.
    #[serde(with = "rust_decimal::serde::float")]
    pub fat: Decimal,
}

/// One entry in the cart.
///
/// Serialized in the browser's camelCase shape with `price` as a plain JSON
/// number, so records written by the site's pages load unchanged.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LineItem {
    /// Derived from the product name for menu items; unique for customized items.
    pub id: LineItemId,
    /// Product name.
    pub name: String,
    /// Unit price.
    #[serde(with = "rust_decimal::serde::float")]
    pub price: Decimal,
    /// Image URL.
    #[serde(default)]
    pub image: String,
    /// Short description shown under the name.
    #[serde(default)]
    pub description: String,
    /// Always at least 1.
    pub quantity: u32,
    /// The configurator state, for customized items.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub customization_state: Option<Selection>,
    /// Nutrition facts, for customized items.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub nutrition: Option<Nutrition>,
}

impl LineItem {
    /// Unit price × quantity, saturating at [`Decimal::MAX`].
    ///
    /// Stored lines are not bounded by [`MAX_UNIT_PRICE`], so the product can
    /// exceed the decimal range.
    #[must_use]
    pub fn line_total(&self) -> Decimal {
        self.price
            .checked_mul(Decimal::from(self.quantity))
            .unwrap_or(if self.price.is_sign_negative() {
                Decimal::MIN
            } else {
                Decimal::MAX
            })
    }

    /// Unit price as a displayable [`Price`].
    #[must_use]
    pub const fn unit_price(&self, currency: CurrencyCode) -> Price {
        Price::new(self.price, currency)
    }

    /// Whether this line came from the configurator.
    #[must_use]
    pub const fn is_customized(&self) -> bool {
        self.customization_state.is_some()
    }
}

/// A product as listed on the menu page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MenuItem {
    pub name: String,
    pub price: Decimal,
    pub image: String,
    pub description: String,
}

impl MenuItem {
    /// Turn the menu card into a single-quantity cart line.
    ///
    /// # Errors
    ///
    /// Returns `LineItemError` if the name is blank or the price is not
    /// positive or above [`MAX_UNIT_PRICE`].
    pub fn into_line_item(self) -> Result<LineItem, LineItemError> {
        let name = self.name.trim().to_owned();
        if name.is_empty() {
            return Err(LineItemError::EmptyName);
        }
        if self.price <= Decimal::ZERO {
            return Err(LineItemError::NonPositivePrice(self.price));
        }
        if self.price > MAX_UNIT_PRICE {
            return Err(LineItemError::PriceTooHigh(self.price));
        }

        Ok(LineItem {
            id: LineItemId::from_product_name(&name),
            name,
            price: self.price,
            image: self.image,
            description: self.description,
            quantity: 1,
            customization_state: None,
            nutrition: None,
        })
    }
}
