//! Order summary calculations.

use crate::cart::{CartState, LineItem};
use crate::config::StoreConfig;
use crate::ids::ProductId;
use crate::money::{Currency, Money};
use serde::{Deserialize, Serialize};

/// Default flat shipping fee, in major units.
pub const DEFAULT_SHIPPING_FEE: f64 = 4.99;

/// Default tax rate, in percent of the subtotal.
pub const DEFAULT_TAX_RATE_PERCENT: f64 = 10.0;

/// How shipping and tax are charged on top of the cart subtotal.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct PricingPolicy {
    /// Flat fee charged per order.
    pub shipping_fee: Money,
    /// Percent of the subtotal.
    pub tax_rate_percent: f64,
}

impl PricingPolicy {
    pub fn new(shipping_fee: Money, tax_rate_percent: f64) -> Self {
        Self {
            shipping_fee,
            tax_rate_percent,
        }
    }

    /// Default policy in the given currency.
    pub fn standard(currency: Currency) -> Self {
        Self::new(
            Money::from_major(DEFAULT_SHIPPING_FEE, currency),
            DEFAULT_TAX_RATE_PERCENT,
        )
    }

    pub fn from_config(config: &StoreConfig) -> Self {
        Self::new(
            Money::from_major(config.pricing.shipping_fee, config.currency),
            config.pricing.tax_rate_percent,
        )
    }

    /// Price a cart.
    ///
    /// The subtotal is the cart's running `total_price`, not a fresh sum of
    /// the lines.
    pub fn summarize(&self, cart: &CartState) -> CartPricing {
        let currency = cart.currency();
        let subtotal = cart.total_price;
        let shipping_total = Money::new(self.shipping_fee.amount_minor, currency);
        let tax_total = subtotal.percentage(self.tax_rate_percent);
        let grand_total = subtotal.plus(shipping_total).plus(tax_total);

        CartPricing {
            item_count: cart.total_items,
            subtotal,
            shipping_total,
            tax_total,
            grand_total,
            line_items: cart.items.iter().map(LineItemPricing::from).collect(),
        }
    }
}

impl Default for PricingPolicy {
    fn default() -> Self {
        Self::standard(Currency::default())
    }
}

/// Complete pricing breakdown for a cart.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CartPricing {
    /// Units across all lines.
    pub item_count: u64,
    pub subtotal: Money,
    pub shipping_total: Money,
    pub tax_total: Money,
    /// Subtotal + shipping + tax.
    pub grand_total: Money,
    pub line_items: Vec<LineItemPricing>,
}

impl CartPricing {
    /// Summary label, e.g. "Subtotal (3 items)".
    pub fn subtotal_label(&self) -> String {
        let noun = if self.item_count == 1 { "item" } else { "items" };
        format!("Subtotal ({} {noun})", self.item_count)
    }
}

/// Pricing breakdown for a single line item.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct LineItemPricing {
    pub product_id: ProductId,
    pub unit_price: Money,
    pub quantity: u32,
    /// unit_price * quantity
    pub total: Money,
}

impl From<&LineItem> for LineItemPricing {
    fn from(item: &LineItem) -> Self {
        Self {
            product_id: item.id(),
            unit_price: item.product.price,
            quantity: item.quantity,
            total: item.line_total(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cart::{apply, CartAction};
    use crate::catalog::{Category, Product};
    use std::sync::Arc;

    fn cart_with(prices_major: &[i64]) -> CartState {
        let state = prices_major
            .iter()
            .enumerate()
            .fold(Arc::new(CartState::empty(Currency::INR)), |state, (i, price)| {
                let product = Product::new(
                    ProductId::new(i as u32 + 1),
                    "Item",
                    Category::Pepper,
                    Money::new(price * 100, Currency::INR),
                );
                apply(&state, &CartAction::AddItem(product))
            });
        (*state).clone()
    }

    #[test]
    fn test_summary_totals() {
        let cart = cart_with(&[10, 20]);
        let pricing = PricingPolicy::standard(Currency::INR).summarize(&cart);

        assert_eq!(pricing.item_count, 2);
        assert_eq!(pricing.subtotal.amount_minor, 3000);
        assert_eq!(pricing.shipping_total.amount_minor, 499);
        assert_eq!(pricing.tax_total.amount_minor, 300);
        assert_eq!(pricing.grand_total.amount_minor, 3799);
        assert_eq!(pricing.line_items.len(), 2);
        assert_eq!(pricing.subtotal_label(), "Subtotal (2 items)");
    }

    #[test]
    fn test_tax_rounds_half_away_from_zero() {
        let mut cart = CartState::empty(Currency::INR);
        cart.total_price = Money::new(1005, Currency::INR);
        let pricing = PricingPolicy::standard(Currency::INR).summarize(&cart);
        assert_eq!(pricing.tax_total.amount_minor, 101);
    }

    #[test]
    fn test_empty_cart_still_charges_shipping() {
        let cart = CartState::empty(Currency::INR);
        let pricing = PricingPolicy::default().summarize(&cart);
        assert!(pricing.subtotal.is_zero());
        assert!(pricing.tax_total.is_zero());
        assert_eq!(pricing.grand_total.amount_minor, 499);
        assert_eq!(pricing.subtotal_label(), "Subtotal (0 items)");
    }

    #[test]
    fn test_line_pricing() {
        let cart = cart_with(&[15]);
        let pricing = PricingPolicy::new(Money::zero(Currency::INR), 0.0).summarize(&cart);
        let line = &pricing.line_items[0];
        assert_eq!(line.product_id, ProductId::new(1));
        assert_eq!(line.quantity, 1);
        assert_eq!(line.total.amount_minor, 1500);
        assert_eq!(pricing.grand_total.amount_minor, 1500);
    }
}
