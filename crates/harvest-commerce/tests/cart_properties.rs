//! Property tests for the cart reducer over the embedded catalog.

use std::collections::HashSet;
use std::sync::{Arc, OnceLock};

use harvest_commerce::prelude::*;
use proptest::prelude::*;

fn catalog() -> &'static Catalog {
    static CATALOG: OnceLock<Catalog> = OnceLock::new();
    CATALOG.get_or_init(|| Catalog::embedded(Currency::INR).unwrap())
}

fn arb_product_id() -> impl Strategy<Value = ProductId> {
    (1u32..=12).prop_map(ProductId::new)
}

fn arb_add() -> impl Strategy<Value = CartAction> {
    (0..catalog().len()).prop_map(|i| CartAction::AddItem(catalog().all()[i].clone()))
}

fn arb_action() -> impl Strategy<Value = CartAction> {
    prop_oneof![
        4 => arb_add(),
        2 => arb_product_id().prop_map(CartAction::RemoveItem),
        3 => (arb_product_id(), -5i64..40)
            .prop_map(|(id, quantity)| CartAction::UpdateQuantity { id, quantity }),
        1 => Just(CartAction::ClearCart),
    ]
}

/// Actions over four bulk lots with prices large enough to overflow totals.
fn arb_bulk_actions() -> impl Strategy<Value = Vec<CartAction>> {
    prop::collection::vec(1i64..=10_000_000_000_000, 4).prop_flat_map(|prices| {
        let lots: Vec<Product> = prices
            .iter()
            .zip(1u32..)
            .map(|(&price, id)| {
                Product::new(
                    ProductId::new(id),
                    format!("Bulk lot {id}"),
                    Category::Pepper,
                    Money::new(price, Currency::INR),
                )
            })
            .collect();
        let quantities = prop_oneof![
            Just(i64::MAX),
            Just(i64::from(u32::MAX)),
            -2i64..1_000_000_000,
        ];
        let action = prop_oneof![
            (0..lots.len()).prop_map(move |i| CartAction::AddItem(lots[i].clone())),
            ((1u32..=4).prop_map(ProductId::new), quantities)
                .prop_map(|(id, quantity)| CartAction::UpdateQuantity { id, quantity }),
        ];
        prop::collection::vec(action, 1..40)
    })
}

fn empty() -> Arc<CartState> {
    Arc::new(CartState::empty(Currency::INR))
}

proptest! {
    #[test]
    fn totals_track_items_after_every_step(actions in prop::collection::vec(arb_action(), 0..64)) {
        let mut state = empty();
        for action in &actions {
            state = apply(&state, action);
            prop_assert!(state.is_consistent(), "inconsistent after {:?}: {:?}", action, state);
        }
    }

    #[test]
    fn totals_stay_exact_with_huge_prices_and_quantities(actions in arb_bulk_actions()) {
        let mut state = empty();
        for action in &actions {
            state = apply(&state, action);
            prop_assert!(state.is_consistent(), "inconsistent after {:?}: {:?}", action, state);
            prop_assert!(!state.total_price.is_negative());
        }
    }

    #[test]
    fn repeated_adds_keep_one_line_per_product(adds in prop::collection::vec(arb_add(), 1..48)) {
        let state = adds.iter().fold(empty(), |state, action| apply(&state, action));

        let distinct: HashSet<ProductId> = adds.iter().filter_map(CartAction::product_id).collect();
        prop_assert_eq!(state.items.len(), distinct.len());
        prop_assert_eq!(state.total_items, adds.len() as u64);

        let mut seen = HashSet::new();
        for item in &state.items {
            prop_assert!(seen.insert(item.id()));
        }
    }

    #[test]
    fn non_positive_update_is_remove(
        setup in prop::collection::vec(arb_action(), 0..32),
        id in arb_product_id(),
        quantity in i64::MIN..=0,
    ) {
        let state = setup.iter().fold(empty(), |state, action| apply(&state, action));

        let updated = apply(&state, &CartAction::UpdateQuantity { id, quantity });
        let removed = apply(&state, &CartAction::RemoveItem(id));
        prop_assert_eq!(&*updated, &*removed);
        prop_assert_eq!(Arc::ptr_eq(&updated, &state), Arc::ptr_eq(&removed, &state));
    }

    #[test]
    fn clear_always_returns_empty(setup in prop::collection::vec(arb_action(), 0..32)) {
        let state = setup.iter().fold(empty(), |state, action| apply(&state, action));
        let cleared = apply(&state, &CartAction::ClearCart);
        prop_assert_eq!(&*cleared, &CartState::empty(Currency::INR));
    }
}
