//! Cart state and line items.

use crate::catalog::Product;
use crate::ids::ProductId;
use crate::money::{Currency, Money};
use serde::{Deserialize, Serialize};

/// A product in the cart with its quantity.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct LineItem {
    /// Copy of the product taken when it was first added.
    #[serde(flatten)]
    pub product: Product,
    /// Always at least 1.
    pub quantity: u32,
}

impl LineItem {
    pub fn new(product: Product) -> Self {
        Self {
            product,
            quantity: 1,
        }
    }

    pub fn id(&self) -> ProductId {
        self.product.id
    }

    /// Unit price times quantity.
    pub fn line_total(&self) -> Money {
        self.product.price.times(i64::from(self.quantity))
    }
}

/// Everything the cart holds.
///
/// `total_items` and `total_price` are kept in step with `items` by the
/// reducer; they are never recomputed in a separate pass.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CartState {
    /// Line items in insertion order, unique by product id.
    pub items: Vec<LineItem>,
    /// Sum of quantities.
    pub total_items: u64,
    /// Sum of price times quantity.
    pub total_price: Money,
}

impl CartState {
    /// The initial, empty cart.
    pub fn empty(currency: Currency) -> Self {
        Self {
            items: Vec::new(),
            total_items: 0,
            total_price: Money::zero(currency),
        }
    }

    pub fn currency(&self) -> Currency {
        self.total_price.currency
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Number of distinct products.
    pub fn line_count(&self) -> usize {
        self.items.len()
    }

    pub fn get(&self, id: ProductId) -> Option<&LineItem> {
        self.items.iter().find(|item| item.id() == id)
    }

    pub fn contains(&self, id: ProductId) -> bool {
        self.get(id).is_some()
    }

    pub(crate) fn position(&self, id: ProductId) -> Option<usize> {
        self.items.iter().position(|item| item.id() == id)
    }

    /// Check the aggregate and uniqueness invariants against the items.
    pub fn is_consistent(&self) -> bool {
        let quantity_sum: u64 = self.items.iter().map(|i| u64::from(i.quantity)).sum();
        let price_sum = Money::sum(self.items.iter().map(LineItem::line_total), self.currency());

        let mut ids: Vec<ProductId> = self.items.iter().map(LineItem::id).collect();
        ids.sort_unstable();
        ids.dedup();

        self.total_items == quantity_sum
            && self.total_price == price_sum
            && ids.len() == self.items.len()
            && self.items.iter().all(|i| i.quantity >= 1)
    }
}

impl Default for CartState {
    fn default() -> Self {
        Self::empty(Currency::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::Category;

    fn pepper() -> Product {
        Product::new(
            ProductId::new(8),
            "Black Pepper",
            Category::Pepper,
            Money::new(78000, Currency::INR),
        )
    }

    #[test]
    fn test_empty_state() {
        let state = CartState::empty(Currency::INR);
        assert!(state.is_empty());
        assert_eq!(state.total_items, 0);
        assert!(state.total_price.is_zero());
        assert!(state.is_consistent());
    }

    #[test]
    fn test_line_total() {
        let mut item = LineItem::new(pepper());
        item.quantity = 3;
        assert_eq!(item.line_total().amount_minor, 234000);
    }

    #[test]
    fn test_inconsistent_state_detected() {
        let mut state = CartState::empty(Currency::INR);
        state.items.push(LineItem::new(pepper()));
        assert!(!state.is_consistent());

        state.total_items = 1;
        state.total_price = Money::new(78000, Currency::INR);
        assert!(state.is_consistent());

        state.items.push(LineItem::new(pepper()));
        state.total_items = 2;
        state.total_price = Money::new(156000, Currency::INR);
        assert!(!state.is_consistent());
    }

    #[test]
    fn test_line_item_serializes_flat() {
        let value = serde_json::to_value(LineItem::new(pepper())).unwrap();
        assert_eq!(value["id"], 8);
        assert_eq!(value["quantity"], 1);
        assert_eq!(value["name"], "Black Pepper");
    }
}
