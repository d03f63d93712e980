//! Domain types and logic for the Harvest Hub storefront.
//!
//! - **Catalog**: the static product list, categories, related products
//! - **Search**: category filter and free-text query over the catalog
//! - **Cart**: reducer store with running totals and an order summary
//! - **Inquiry**: contact and product inquiry forms with simulated sending
//! - **Config**: store settings loaded from TOML
//!
//! # Example
//!
//! ```rust
//! use harvest_commerce::prelude::*;
//!
//! let catalog = Catalog::embedded(Currency::INR)?;
//! let pepper = catalog.lookup("8")?;
//!
//! let mut store = CartStore::new(catalog.currency());
//! store.add_many(pepper, 2);
//! store.update_quantity(pepper.id, 3);
//!
//! let summary = PricingPolicy::standard(Currency::INR).summarize(store.state());
//! assert_eq!(summary.item_count, 3);
//! println!("Total: {}", summary.grand_total);
//! # Ok::<(), CommerceError>(())
//! ```

pub mod error;
pub mod ids;
pub mod money;

pub mod cart;
pub mod catalog;
pub mod config;
pub mod inquiry;
pub mod search;

pub use error::CommerceError;
pub use ids::*;
pub use money::{Currency, Money};

/// Prelude for convenient imports.
pub mod prelude {
    pub use crate::error::CommerceError;
    pub use crate::ids::*;
    pub use crate::money::{Currency, Money};

    // Catalog
    pub use crate::catalog::{Catalog, Category, Product};

    // Cart
    pub use crate::cart::{
        apply, CartAction, CartPricing, CartState, CartStore, LineItem, LineItemPricing,
        PricingPolicy,
    };

    // Inquiry
    pub use crate::inquiry::{
        submit_form, ContactForm, ContactSubject, InquiryForm, QuantityOption, SubmissionStatus,
        Submitter, ValidationErrors,
    };

    // Search
    pub use crate::search::{CatalogQuery, CategoryFilter};

    pub use crate::config::StoreConfig;
}
