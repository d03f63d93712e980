//! Cart actions.

use crate::catalog::Product;
use crate::ids::ProductId;
use serde::{Deserialize, Serialize};

/// An operation on the cart, applied by [`crate::cart::apply`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", content = "payload", rename_all = "SCREAMING_SNAKE_CASE")]
pub enum CartAction {
    /// Add one unit; the price is taken from this product as given.
    ///
    /// Ignored when the price is in another currency than the cart or the
    /// totals would overflow.
    AddItem(Product),
    /// Drop the whole line for a product.
    RemoveItem(ProductId),
    /// Set a line's quantity; zero or below removes the line. Quantities
    /// whose totals would overflow are ignored.
    UpdateQuantity { id: ProductId, quantity: i64 },
    /// Back to the empty cart.
    ClearCart,
}

impl CartAction {
    /// Short name for logs.
    pub fn kind(&self) -> &'static str {
        match self {
            CartAction::AddItem(_) => "add_item",
            CartAction::RemoveItem(_) => "remove_item",
            CartAction::UpdateQuantity { .. } => "update_quantity",
            CartAction::ClearCart => "clear_cart",
        }
    }

    /// Product the action targets, if any.
    pub fn product_id(&self) -> Option<ProductId> {
        match self {
            CartAction::AddItem(product) => Some(product.id),
            CartAction::RemoveItem(id) | CartAction::UpdateQuantity { id, .. } => Some(*id),
            CartAction::ClearCart => None,
        }
    }
}
