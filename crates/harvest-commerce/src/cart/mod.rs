//! Shopping cart module.
//!
//! The cart is a small reducer store: [`CartAction`]s are applied to an
//! immutable [`CartState`] by [`apply`], and [`CartStore`] owns the current
//! state for a session.

mod action;
mod pricing;
mod reducer;
mod state;
mod store;

pub use action::CartAction;
pub use pricing::{
    CartPricing, LineItemPricing, PricingPolicy, DEFAULT_SHIPPING_FEE, DEFAULT_TAX_RATE_PERCENT,
};
pub use reducer::apply;
pub use state::{CartState, LineItem};
pub use store::{CartStore, Listener};
