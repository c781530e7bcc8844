//! Cart page projection.
//!
//! [`CartView`] is computed from a [`Cart`] and holds every display string
//! the two cart regions need, so rendering is idempotent and logic-free.

use askama::Template;

use jeen_core::{CurrencyCode, Price};

use crate::models::cart::Cart;
use crate::models::line_item::LineItem;

/// Placeholder shown instead of line items.
pub const EMPTY_CART_MESSAGE: &str = "Your cart is empty.";

/// One line item row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CartItemView {
    /// Position in the cart; the stepper and remove controls address it.
    pub index: usize,
    pub image: String,
    pub name: String,
    pub description: String,
    pub quantity: u32,
    pub price: String,
}

/// One order summary row: `name xqty` and the line total.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SummaryRow {
    pub label: String,
    pub line_total: String,
}

/// Cart display data for templates.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CartView {
    pub items: Vec<CartItemView>,
    pub summary: Vec<SummaryRow>,
    pub summary_header: String,
    pub total: String,
    pub item_count: u32,
}

impl CartView {
    /// Project a cart.
    #[must_use]
    pub fn new(cart: &Cart, currency: CurrencyCode) -> Self {
        let item_count = cart.item_count();
        let summary_header = if cart.is_empty() {
            "Order Summary".to_string()
        } else {
            format!("Order Summary ({item_count} items)")
        };

        Self {
            items: cart
                .items()
                .iter()
                .enumerate()
                .map(|(index, item)| CartItemView::new(index, item, currency))
                .collect(),
            summary: cart
                .items()
                .iter()
                .map(|item| SummaryRow::new(item, currency))
                .collect(),
            summary_header,
            total: Price::new(cart.total(), currency).display(),
            item_count,
        }
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// The empty-cart placeholder text.
    #[must_use]
    pub const fn empty_message(&self) -> &'static str {
        EMPTY_CART_MESSAGE
    }
}

impl CartItemView {
    fn new(index: usize, item: &LineItem, currency: CurrencyCode) -> Self {
        Self {
            index,
            image: item.image.clone(),
            name: item.name.clone(),
            description: item.description.clone(),
            quantity: item.quantity,
            price: item.unit_price(currency).display(),
        }
    }
}

impl SummaryRow {
    fn new(item: &LineItem, currency: CurrencyCode) -> Self {
        Self {
            label: format!("{} x{}", item.name, item.quantity),
            line_total: Price::new(item.line_total(), currency).display(),
        }
    }
}

// =============================================================================
// Templates
// =============================================================================

/// Line items region.
#[derive(Template)]
#[template(path = "cart/items.html")]
pub struct CartItemsTemplate<'a> {
    pub cart: &'a CartView,
}

/// Order summary region.
#[derive(Template)]
#[template(path = "cart/summary.html")]
pub struct CartSummaryTemplate<'a> {
    pub cart: &'a CartView,
}
