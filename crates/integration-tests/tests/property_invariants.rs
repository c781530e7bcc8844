//! Property tests for the configurator and cart reducers.

#![allow(clippy::unwrap_used)]

use proptest::prelude::*;
use rust_decimal::Decimal;

use jeen_integration_tests::menu_item;
use jeen_storefront::customization::{
    Bread, ChipKind, Plate, Protein, Sauce, Selection, SelectionAction, VariantKey, Veggies,
    compute_variant,
};
use jeen_storefront::models::{Cart, CartAction, LineItem};

// =============================================================================
// Strategies
// =============================================================================

fn selection() -> impl Strategy<Value = Selection> {
    (
        proptest::sample::select(Plate::ALL),
        proptest::sample::select(Bread::ALL),
        proptest::sample::select(Protein::ALL),
        proptest::sample::select(Veggies::ALL),
        proptest::sample::select(Sauce::ALL),
    )
        .prop_map(|(plate, bread, protein, veggies, sauce)| Selection {
            plate,
            bread,
            protein,
            veggies,
            sauce,
        })
}

fn menu_line() -> impl Strategy<Value = LineItem> {
    (
        proptest::sample::select(vec!["Green Bowl", "Oat Shake", "Berry Cup"]),
        1_i64..5_000,
    )
        .prop_map(|(name, cents)| menu_item(name, cents).into_line_item().unwrap())
}

fn cart_action() -> impl Strategy<Value = CartAction> {
    prop_oneof![
        menu_line().prop_map(CartAction::AddFromMenu),
        selection().prop_map(|s| CartAction::AddCustomized(s.to_line_item("/assets/"))),
        (0_usize..6).prop_map(CartAction::Increment),
        (0_usize..6).prop_map(CartAction::Decrement),
        (0_usize..6, 0_u32..5)
            .prop_map(|(index, quantity)| CartAction::SetQuantity { index, quantity }),
        (0_usize..6).prop_map(CartAction::Remove),
    ]
}

/// The variant table, written out case by case.
fn expected_variant(selection: &Selection) -> VariantKey {
    if selection.veggies == Veggies::Tomato && selection.sauce == Sauce::Mustard {
        VariantKey::TomatoMustard
    } else if selection.veggies == Veggies::Tomato {
        VariantKey::Tomato
    } else if selection.veggies == Veggies::Avocado {
        VariantKey::Avocado
    } else if selection.protein == Protein::EggsCheese {
        VariantKey::EggsCheese
    } else if selection.protein == Protein::Eggs {
        VariantKey::Eggs
    } else {
        VariantKey::Base
    }
}

// =============================================================================
// Configurator
// =============================================================================

proptest! {
    #[test]
    fn variant_follows_precedence_table(selection in selection()) {
        prop_assert_eq!(compute_variant(&selection), expected_variant(&selection));
    }

    #[test]
    fn plate_and_bread_never_change_variant(
        selection in selection(),
        plate in proptest::sample::select(Plate::ALL),
        bread in proptest::sample::select(Bread::ALL),
    ) {
        let restyled = Selection { plate, bread, ..selection };
        prop_assert_eq!(restyled.variant(), selection.variant());
    }

    #[test]
    fn removing_veggies_chip_resets_sauce(selection in selection()) {
        let after = selection.reduce(SelectionAction::RemoveChip(ChipKind::Veggies));
        prop_assert_eq!(after.veggies, Veggies::None);
        prop_assert_eq!(after.sauce, Sauce::None);
        prop_assert_eq!(after.protein, selection.protein);
        prop_assert_eq!(after.plate, selection.plate);
    }

    #[test]
    fn chips_are_exactly_the_non_default_fields(selection in selection()) {
        let expected = [
            !selection.bread.is_default(),
            !selection.protein.is_default(),
            !selection.veggies.is_default(),
            !selection.sauce.is_default(),
        ]
        .into_iter()
        .filter(|active| *active)
        .count();
        prop_assert_eq!(selection.chips().len(), expected);
    }
}

// =============================================================================
// Cart
// =============================================================================

proptest! {
    #[test]
    fn total_is_sum_of_lines(actions in proptest::collection::vec(cart_action(), 0..40)) {
        let cart = actions.into_iter().fold(Cart::default(), Cart::reduce);

        let expected: Decimal = cart
            .items()
            .iter()
            .map(|line| line.price * Decimal::from(line.quantity))
            .sum();
        prop_assert_eq!(cart.total(), expected);
        prop_assert_eq!(cart.total().round_dp(2), cart.total());
        prop_assert!(cart.items().iter().all(|line| line.quantity >= 1));
    }

    #[test]
    fn menu_lines_have_unique_ids(actions in proptest::collection::vec(cart_action(), 0..40)) {
        let cart = actions.into_iter().fold(Cart::default(), Cart::reduce);

        let menu_ids: Vec<_> = cart
            .items()
            .iter()
            .filter(|line| !line.is_customized())
            .map(|line| line.id.clone())
            .collect();
        let mut deduped = menu_ids.clone();
        deduped.sort_by(|a, b| a.as_str().cmp(b.as_str()));
        deduped.dedup();
        prop_assert_eq!(deduped.len(), menu_ids.len());
    }
}
