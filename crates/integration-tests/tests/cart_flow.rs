//! Cart scenarios: menu adds, configured meals, quantity edits and totals.

#![allow(clippy::unwrap_used)]

use std::cell::Cell;

use rust_decimal::Decimal;

use jeen_integration_tests::{memory_site, menu_item};
use jeen_storefront::customization::{Protein, Sauce, Selection, SelectionAction, Veggies};
use jeen_storefront::models::{Cart, CartAction};
use jeen_storefront::views::{CartBadge, CartView};

// =============================================================================
// Merging
// =============================================================================

#[test]
fn test_same_menu_item_twice_is_one_line() {
    let site = memory_site();
    let mut cart = site.cart().unwrap();

    cart.add_from_menu(menu_item("Green Bowl", 1250)).unwrap();
    cart.add_from_menu(menu_item("Green Bowl", 1250)).unwrap();

    assert_eq!(cart.cart().len(), 1);
    assert_eq!(cart.cart().items()[0].quantity, 2);
    assert_eq!(cart.cart().items()[0].id.as_str(), "green-bowl");
}

#[test]
fn test_identical_customized_meals_never_merge() {
    let site = memory_site();
    let mut cart = site.cart().unwrap();
    let selection = Selection::default().reduce(SelectionAction::SetProtein(Protein::Eggs));

    let first = cart.add_customized(&selection).unwrap();
    let second = cart.add_customized(&selection).unwrap();

    assert_eq!(cart.cart().len(), 2);
    assert_ne!(first.item.id, second.item.id);
    assert!(cart.cart().items().iter().all(|line| line.quantity == 1));
}

#[test]
fn test_customized_line_carries_variant_preset() {
    let site = memory_site();
    let mut cart = site.cart().unwrap();
    let selection = Selection::default()
        .reduce(SelectionAction::SetVeggies(Veggies::Tomato))
        .reduce(SelectionAction::SetSauce(Sauce::Mustard));

    let added = cart.add_customized(&selection).unwrap();

    assert_eq!(added.item.name, "Usual Sando");
    assert_eq!(added.item.price, Decimal::from(10));
    assert_eq!(added.item.image, "/customization/assets/tomato_mustard.png");
    assert_eq!(added.item.description, "Sandwich, Tomato");
    assert_eq!(added.item.nutrition.unwrap().calories, 548);
    assert_eq!(added.cue.image, added.item.image);
}

// =============================================================================
// Quantities and totals
// =============================================================================

#[test]
fn test_decrement_floors_at_one() {
    let site = memory_site();
    let mut cart = site.cart().unwrap();
    cart.add_from_menu(menu_item("Oat Shake", 450)).unwrap();

    cart.dispatch(CartAction::Decrement(0)).unwrap();
    cart.dispatch(CartAction::Decrement(0)).unwrap();

    assert_eq!(cart.cart().len(), 1);
    assert_eq!(cart.cart().items()[0].quantity, 1);
}

#[test]
fn test_total_is_exact_decimal_sum() {
    let site = memory_site();
    let mut cart = site.cart().unwrap();
    cart.add_from_menu(menu_item("Green Bowl", 1099)).unwrap();
    cart.add_from_menu(menu_item("Oat Shake", 333)).unwrap();
    cart.dispatch(CartAction::SetQuantity {
        index: 1,
        quantity: 3,
    })
    .unwrap();

    assert_eq!(cart.cart().total(), Decimal::new(2098, 2));
    assert_eq!(cart.cart().item_count(), 4);

    let view = CartView::new(cart.cart(), site.config().currency);
    assert_eq!(view.total, "$20.98");
    assert_eq!(view.summary_header, "Order Summary (4 items)");
}

#[test]
fn test_remove_out_of_range_is_noop() {
    let site = memory_site();
    let mut cart = site.cart().unwrap();
    cart.add_from_menu(menu_item("Green Bowl", 1250)).unwrap();

    cart.dispatch(CartAction::Remove(5)).unwrap();
    assert_eq!(cart.cart().len(), 1);

    cart.dispatch(CartAction::Remove(0)).unwrap();
    assert!(cart.cart().is_empty());
}

#[test]
fn test_reducer_matches_service() {
    let site = memory_site();
    let mut cart = site.cart().unwrap();
    let item = menu_item("Green Bowl", 1250).into_line_item().unwrap();

    let actions = [
        CartAction::AddFromMenu(item.clone()),
        CartAction::AddFromMenu(item),
        CartAction::Increment(0),
        CartAction::Decrement(0),
    ];
    let expected = actions
        .iter()
        .cloned()
        .fold(Cart::default(), Cart::reduce);
    for action in actions {
        cart.dispatch(action).unwrap();
    }

    assert_eq!(cart.cart(), &expected);
}

// =============================================================================
// Observers
// =============================================================================

#[test]
fn test_badge_follows_cart() {
    let site = memory_site();
    let badge = CartBadge::new();
    let mut cart = site.cart().unwrap();
    cart.subscribe(&badge);
    assert_eq!(badge.count(), 0);

    cart.add_from_menu(menu_item("Green Bowl", 1250)).unwrap();
    cart.add_from_menu(menu_item("Green Bowl", 1250)).unwrap();
    assert_eq!(badge.count(), 2);

    cart.clear().unwrap();
    assert_eq!(badge.count(), 0);
}

#[test]
fn test_closure_observer_sees_every_change() {
    let site = memory_site();
    let calls = Cell::new(0_u32);
    let observer = |_: &Cart| calls.set(calls.get() + 1);
    let mut cart = site.cart().unwrap();
    cart.subscribe(&observer);

    cart.add_from_menu(menu_item("Green Bowl", 1250)).unwrap();
    cart.dispatch(CartAction::Increment(0)).unwrap();

    // One call on subscribe, one per action.
    assert_eq!(calls.get(), 3);
}

#[test]
fn test_header_reflects_cart_and_session() {
    let site = memory_site();
    let header = site.header().unwrap();
    assert!(!header.badge_visible);
    assert_eq!(header.profile_label(), "Log in");

    site.cart()
        .unwrap()
        .add_from_menu(menu_item("Green Bowl", 1250))
        .unwrap();
    let header = site.header().unwrap();
    assert!(header.badge_visible);
    assert_eq!(header.cart_count, 1);
}
