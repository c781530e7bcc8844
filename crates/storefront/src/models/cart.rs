//! Cart state and its reducer.
//!
//! [`Cart::reduce`] is pure: it never touches storage. Persistence and
//! observer notification are done by [`crate::services::cart::CartService`].

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::line_item::LineItem;

/// Ordered list of line items.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Cart {
    items: Vec<LineItem>,
}

/// A mutation of the cart.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CartAction {
    /// Add a menu item; merges into an existing line with the same id.
    AddFromMenu(LineItem),
    /// Add a configured meal; always a new line.
    AddCustomized(LineItem),
    /// Add one to the line at this index.
    Increment(usize),
    /// Take one from the line at this index, never going below 1.
    Decrement(usize),
    /// Set the quantity of a line; values below 1 are ignored.
    SetQuantity { index: usize, quantity: u32 },
    /// Delete the line at this index.
    Remove(usize),
    /// Empty the cart.
    Clear,
}

impl Cart {
    /// Build a cart from stored items.
    ///
    /// Quantities below 1 in stored data are raised to 1.
    #[must_use]
    pub fn from_items(items: Vec<LineItem>) -> Self {
        let items = items
            .into_iter()
            .map(|mut item| {
                item.quantity = item.quantity.max(1);
                item
            })
            .collect();
        Self { items }
    }

    /// Line items in order.
    #[must_use]
    pub fn items(&self) -> &[LineItem] {
        &self.items
    }

    /// Consume the cart, returning its items.
    #[must_use]
    pub fn into_items(self) -> Vec<LineItem> {
        self.items
    }

    /// Number of lines.
    #[must_use]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Whether the cart has no lines.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Σ quantity over all lines; the header badge count.
    #[must_use]
    pub fn item_count(&self) -> u32 {
        self.items
            .iter()
            .fold(0_u32, |count, item| count.saturating_add(item.quantity))
    }

    /// Σ price × quantity over all lines, saturating at the decimal range.
    #[must_use]
    pub fn total(&self) -> Decimal {
        self.items.iter().fold(Decimal::ZERO, |total, item| {
            let line = item.line_total();
            total.checked_add(line).unwrap_or(if line.is_sign_negative() {
                Decimal::MIN
            } else {
                Decimal::MAX
            })
        })
    }

    /// Apply one action and return the new cart.
    ///
    /// Actions naming an index outside the cart leave it unchanged.
    #[must_use]
    pub fn reduce(mut self, action: CartAction) -> Self {
        match action {
            CartAction::AddFromMenu(item) => {
                if let Some(existing) = self.items.iter_mut().find(|line| line.id == item.id) {
                    existing.quantity = existing.quantity.saturating_add(1);
                } else {
                    self.items.push(LineItem {
                        quantity: item.quantity.max(1),
                        ..item
                    });
                }
            }
            CartAction::AddCustomized(item) => {
                self.items.push(LineItem {
                    quantity: item.quantity.max(1),
                    ..item
                });
            }
            CartAction::Increment(index) => {
                if let Some(line) = self.items.get_mut(index) {
                    line.quantity = line.quantity.saturating_add(1);
                }
            }
            CartAction::Decrement(index) => {
                if let Some(line) = self.items.get_mut(index)
                    && line.quantity > 1
                {
                    line.quantity -= 1;
                }
            }
            CartAction::SetQuantity { index, quantity } => {
                if quantity >= 1
                    && let Some(line) = self.items.get_mut(index)
                {
                    line.quantity = quantity;
                }
            }
            CartAction::Remove(index) => {
                if index < self.items.len() {
                    self.items.remove(index);
                }
            }
            CartAction::Clear => self.items.clear(),
        }
        self
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::customization::{Protein, Selection};
    use crate::models::line_item::MenuItem;

    fn menu_item(name: &str, price: i64) -> LineItem {
        MenuItem {
            name: name.to_owned(),
            price: Decimal::from(price),
            image: String::new(),
            description: String::new(),
        }
        .into_line_item()
        .unwrap()
    }

    #[test]
    fn test_menu_adds_merge_by_id() {
        let cart = Cart::default()
            .reduce(CartAction::AddFromMenu(menu_item("Green Bowl", 12)))
            .reduce(CartAction::AddFromMenu(menu_item("Green Bowl", 12)));

        assert_eq!(cart.len(), 1);
        assert_eq!(cart.items()[0].quantity, 2);
        assert_eq!(cart.total(), Decimal::from(24));
    }

    #[test]
    fn test_customized_adds_never_merge() {
        let selection = Selection {
            protein: Protein::Eggs,
            ..Selection::default()
        };
        let cart = Cart::default()
            .reduce(CartAction::AddCustomized(selection.to_line_item("/a/")))
            .reduce(CartAction::AddCustomized(selection.to_line_item("/a/")));

        assert_eq!(cart.len(), 2);
        assert_eq!(cart.item_count(), 2);
    }

    #[test]
    fn test_customized_with_reused_id_still_appends() {
        let item = menu_item("Usual Sando", 6);
        let cart = Cart::default()
            .reduce(CartAction::AddCustomized(item.clone()))
            .reduce(CartAction::AddCustomized(item));
        assert_eq!(cart.len(), 2);
    }

    #[test]
    fn test_decrement_floors_at_one() {
        let cart = Cart::default()
            .reduce(CartAction::AddFromMenu(menu_item("Shake", 7)))
            .reduce(CartAction::Decrement(0))
            .reduce(CartAction::Decrement(0));

        assert_eq!(cart.len(), 1);
        assert_eq!(cart.items()[0].quantity, 1);
    }

    #[test]
    fn test_set_quantity_rejects_zero() {
        let cart = Cart::default()
            .reduce(CartAction::AddFromMenu(menu_item("Shake", 7)))
            .reduce(CartAction::SetQuantity {
                index: 0,
                quantity: 4,
            })
            .reduce(CartAction::SetQuantity {
                index: 0,
                quantity: 0,
            });
        assert_eq!(cart.items()[0].quantity, 4);
    }

    #[test]
    fn test_out_of_range_is_noop() {
        let cart = Cart::default().reduce(CartAction::AddFromMenu(menu_item("Shake", 7)));
        let same = cart
            .clone()
            .reduce(CartAction::Remove(3))
            .reduce(CartAction::Increment(1))
            .reduce(CartAction::Decrement(9));
        assert_eq!(same, cart);
    }

    #[test]
    fn test_remove_and_total() {
        let cart = Cart::default()
            .reduce(CartAction::AddFromMenu(menu_item("A", 10)))
            .reduce(CartAction::AddFromMenu(menu_item("A", 10)))
            .reduce(CartAction::AddFromMenu(menu_item("B", 5)));
        assert_eq!(cart.total(), Decimal::from(25));

        let cart = cart.reduce(CartAction::Remove(0));
        assert_eq!(cart.len(), 1);
        assert_eq!(cart.items()[0].name, "B");
        assert_eq!(cart.total(), Decimal::from(5));

        let cart = cart.reduce(CartAction::Clear);
        assert!(cart.is_empty());
        assert_eq!(cart.total(), Decimal::ZERO);
    }

    #[test]
    fn test_from_items_repairs_zero_quantity() {
        let mut item = menu_item("A", 1);
        item.quantity = 0;
        let cart = Cart::from_items(vec![item]);
        assert_eq!(cart.items()[0].quantity, 1);
    }

    #[test]
    fn test_serializes_as_plain_array() {
        let cart = Cart::default().reduce(CartAction::AddFromMenu(menu_item("A", 1)));
        let json = serde_json::to_value(&cart).unwrap();
        assert!(json.is_array());
    }

    #[test]
    fn test_total_saturates_on_stored_outliers() {
        let mut item = menu_item("Gold", 1);
        item.price = Decimal::from_i128_with_scale(10_i128.pow(25), 0);
        let cart = Cart::from_items(vec![item.clone(), item])
            .reduce(CartAction::SetQuantity {
                index: 0,
                quantity: 10_000,
            })
            .reduce(CartAction::SetQuantity {
                index: 1,
                quantity: u32::MAX,
            });

        assert_eq!(cart.total(), Decimal::MAX);
        assert_eq!(cart.item_count(), u32::MAX);
    }
}
