//! The cart transition function.
//!
//! `apply` is pure: it never mutates the state it is given. Branches that
//! change nothing hand back the same `Arc`, so callers can detect change with
//! `Arc::ptr_eq`.

use std::sync::Arc;

use crate::cart::{CartAction, CartState, LineItem};
use crate::catalog::Product;
use crate::ids::ProductId;

/// Apply one action and return the resulting state.
pub fn apply(state: &Arc<CartState>, action: &CartAction) -> Arc<CartState> {
    let next = match action {
        CartAction::AddItem(product) => add_item(state, product),
        CartAction::RemoveItem(id) => remove_item(state, *id),
        CartAction::UpdateQuantity { id, quantity } if *quantity <= 0 => remove_item(state, *id),
        CartAction::UpdateQuantity { id, quantity } => update_quantity(state, *id, *quantity),
        CartAction::ClearCart => clear(state),
    };

    next.map_or_else(|| Arc::clone(state), Arc::new)
}

fn add_item(state: &CartState, product: &Product) -> Option<CartState> {
    // Totals are kept in one currency; a foreign price cannot be folded in.
    if product.price.currency != state.currency() {
        return None;
    }

    let mut next = state.clone();
    match next.position(product.id) {
        Some(index) => {
            let item = &mut next.items[index];
            // A line already at the quantity ceiling cannot grow.
            let quantity = item.quantity.checked_add(1)?;
            item.product.price.checked_times(i64::from(quantity))?;
            item.quantity = quantity;
        }
        None => next.items.push(LineItem::new(product.clone())),
    }
    next.total_items += 1;
    next.total_price = next.total_price.checked_plus(product.price)?;
    Some(next)
}

fn remove_item(state: &CartState, id: ProductId) -> Option<CartState> {
    let index = state.position(id)?;

    let mut next = state.clone();
    let removed = next.items.remove(index);
    next.total_items -= u64::from(removed.quantity);
    next.total_price = next.total_price.minus(removed.line_total());
    Some(next)
}

fn update_quantity(state: &CartState, id: ProductId, quantity: i64) -> Option<CartState> {
    let index = state.position(id)?;

    let quantity = u32::try_from(quantity).unwrap_or(u32::MAX);
    let current = &state.items[index];
    if current.quantity == quantity {
        return None;
    }

    let delta = i64::from(quantity) - i64::from(current.quantity);
    let price = current.product.price;
    // Overflowing line or cart totals leave the cart as it was.
    price.checked_times(i64::from(quantity))?;
    let total_price = state.total_price.checked_plus(price.checked_times(delta)?)?;

    let mut next = state.clone();
    next.items[index].quantity = quantity;
    next.total_items = next.total_items.saturating_add_signed(delta);
    next.total_price = total_price;
    Some(next)
}

fn clear(state: &CartState) -> Option<CartState> {
    let empty = CartState::empty(state.currency());
    (*state != empty).then_some(empty)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::Category;
    use crate::money::{Currency, Money};

    fn product(id: u32, price_major: i64) -> Product {
        Product::new(
            ProductId::new(id),
            format!("Product {id}"),
            Category::Coffee,
            Money::new(price_major * 100, Currency::INR),
        )
    }

    fn empty() -> Arc<CartState> {
        Arc::new(CartState::empty(Currency::INR))
    }

    fn run(actions: &[CartAction]) -> Arc<CartState> {
        actions
            .iter()
            .fold(empty(), |state, action| apply(&state, action))
    }

    #[test]
    fn test_add_new_item() {
        let state = run(&[CartAction::AddItem(product(1, 10))]);
        assert_eq!(state.items.len(), 1);
        assert_eq!(state.items[0].quantity, 1);
        assert_eq!(state.total_items, 1);
        assert_eq!(state.total_price.amount_minor, 1000);
    }

    #[test]
    fn test_add_existing_increments() {
        let state = run(&[
            CartAction::AddItem(product(1, 10)),
            CartAction::AddItem(product(1, 10)),
        ]);
        assert_eq!(state.items.len(), 1);
        assert_eq!(state.items[0].quantity, 2);
        assert_eq!(state.total_items, 2);
        assert_eq!(state.total_price.amount_minor, 2000);
    }

    #[test]
    fn test_add_trusts_argument_price() {
        // Second add carries a different price; the aggregate uses it as given
        // while the line keeps the price captured on first add, so the totals
        // drift from the lines.
        let state = run(&[
            CartAction::AddItem(product(1, 10)),
            CartAction::AddItem(product(1, 12)),
        ]);
        assert_eq!(state.total_price.amount_minor, 2200);
        assert_eq!(state.items[0].product.price.amount_minor, 1000);
        assert!(!state.is_consistent());
    }

    #[test]
    fn test_insertion_order_preserved() {
        let state = run(&[
            CartAction::AddItem(product(3, 10)),
            CartAction::AddItem(product(1, 10)),
            CartAction::AddItem(product(3, 10)),
            CartAction::AddItem(product(2, 10)),
        ]);
        let ids: Vec<u32> = state.items.iter().map(|i| i.id().get()).collect();
        assert_eq!(ids, vec![3, 1, 2]);
    }

    #[test]
    fn test_remove_item() {
        let state = run(&[
            CartAction::AddItem(product(1, 10)),
            CartAction::AddItem(product(1, 10)),
            CartAction::AddItem(product(2, 20)),
            CartAction::RemoveItem(ProductId::new(1)),
        ]);
        assert_eq!(state.items.len(), 1);
        assert_eq!(state.total_items, 1);
        assert_eq!(state.total_price.amount_minor, 2000);
    }

    #[test]
    fn test_remove_absent_returns_same_state() {
        let before = run(&[CartAction::AddItem(product(1, 10))]);
        let after = apply(&before, &CartAction::RemoveItem(ProductId::new(99)));
        assert!(Arc::ptr_eq(&before, &after));
    }

    #[test]
    fn test_update_quantity_adjusts_by_delta() {
        let state = run(&[
            CartAction::AddItem(product(1, 10)),
            CartAction::AddItem(product(2, 20)),
            CartAction::UpdateQuantity {
                id: ProductId::new(1),
                quantity: 5,
            },
        ]);
        assert_eq!(state.total_items, 6);
        assert_eq!(state.total_price.amount_minor, 7000);

        let state = apply(
            &state,
            &CartAction::UpdateQuantity {
                id: ProductId::new(1),
                quantity: 2,
            },
        );
        assert_eq!(state.total_items, 3);
        assert_eq!(state.total_price.amount_minor, 4000);
        assert!(state.is_consistent());
    }

    #[test]
    fn test_update_quantity_non_positive_removes() {
        for quantity in [0, -1, i64::MIN] {
            let state = run(&[
                CartAction::AddItem(product(1, 10)),
                CartAction::UpdateQuantity {
                    id: ProductId::new(1),
                    quantity,
                },
            ]);
            assert!(state.is_empty());
            assert_eq!(state.total_items, 0);
            assert!(state.total_price.is_zero());
        }
    }

    #[test]
    fn test_update_quantity_absent_or_unchanged_is_noop() {
        let before = run(&[CartAction::AddItem(product(1, 10))]);

        let absent = apply(
            &before,
            &CartAction::UpdateQuantity {
                id: ProductId::new(7),
                quantity: 4,
            },
        );
        assert!(Arc::ptr_eq(&before, &absent));

        let unchanged = apply(
            &before,
            &CartAction::UpdateQuantity {
                id: ProductId::new(1),
                quantity: 1,
            },
        );
        assert!(Arc::ptr_eq(&before, &unchanged));
    }

    #[test]
    fn test_update_quantity_clamps_to_u32() {
        let state = run(&[
            CartAction::AddItem(product(1, 1)),
            CartAction::UpdateQuantity {
                id: ProductId::new(1),
                quantity: i64::MAX,
            },
        ]);
        assert_eq!(state.items[0].quantity, u32::MAX);
        assert!(state.is_consistent());

        let after = apply(&state, &CartAction::AddItem(product(1, 1)));
        assert!(Arc::ptr_eq(&state, &after));
    }

    #[test]
    fn test_add_in_other_currency_is_noop() {
        let before = run(&[CartAction::AddItem(product(1, 10))]);
        let mut dollars = product(2, 10);
        dollars.price = Money::new(1000, Currency::USD);

        let after = apply(&before, &CartAction::AddItem(dollars));
        assert!(Arc::ptr_eq(&before, &after));
        assert_eq!(after.total_price, Money::new(1000, Currency::INR));
    }

    #[test]
    fn test_overflowing_update_is_noop() {
        let mut lot = product(1, 0);
        lot.price = Money::new(10_000_000_000, Currency::INR);
        let before = run(&[CartAction::AddItem(lot)]);

        let after = apply(
            &before,
            &CartAction::UpdateQuantity {
                id: ProductId::new(1),
                quantity: i64::MAX,
            },
        );
        assert!(Arc::ptr_eq(&before, &after));

        let after = apply(
            &after,
            &CartAction::UpdateQuantity {
                id: ProductId::new(1),
                quantity: 1,
            },
        );
        assert_eq!(after.items[0].quantity, 1);
        assert_eq!(after.total_price.amount_minor, 10_000_000_000);
        assert!(after.is_consistent());
    }

    #[test]
    fn test_overflowing_add_is_noop() {
        let mut lot = product(1, 0);
        lot.price = Money::new(i64::MAX / 2 + 1, Currency::INR);
        let before = run(&[CartAction::AddItem(lot.clone())]);

        let after = apply(&before, &CartAction::AddItem(lot));
        assert!(Arc::ptr_eq(&before, &after));
        assert!(after.is_consistent());
    }

    #[test]
    fn test_clear() {
        let state = run(&[
            CartAction::AddItem(product(1, 10)),
            CartAction::AddItem(product(2, 20)),
            CartAction::ClearCart,
        ]);
        assert_eq!(*state, CartState::empty(Currency::INR));
    }

    #[test]
    fn test_clear_empty_is_noop() {
        let before = empty();
        let after = apply(&before, &CartAction::ClearCart);
        assert!(Arc::ptr_eq(&before, &after));
    }

    #[test]
    fn test_apply_does_not_mutate_input() {
        let before = run(&[CartAction::AddItem(product(1, 10))]);
        let snapshot = (*before).clone();
        let _ = apply(&before, &CartAction::AddItem(product(1, 10)));
        let _ = apply(&before, &CartAction::ClearCart);
        assert_eq!(*before, snapshot);
    }
}
