//! Session state shared by every page.

use std::sync::Arc;

use harvest_commerce::cart::{CartAction, CartPricing, CartState, CartStore, PricingPolicy};
use harvest_commerce::catalog::{Catalog, Product};
use harvest_commerce::config::{ContactConfig, FormsConfig, StoreConfig};
use harvest_commerce::{CommerceError, ProductId};
use harvest_observability::{LogFormat, LogLevel, SessionId, StructuredLogger};
use leptos::prelude::*;

/// Handles to the session's catalog, cart and settings.
///
/// Built once in [`crate::App`] and passed to components as a prop. It is
/// `Copy`: every field is a reactive arena handle.
#[derive(Clone, Copy)]
pub struct Storefront {
    cart: RwSignal<CartStore>,
    catalog: StoredValue<Catalog>,
    config: StoredValue<StoreConfig>,
    logger: StoredValue<StructuredLogger>,
}

impl Storefront {
    /// Load the embedded catalog and start an empty cart for a new session.
    pub fn boot(config: StoreConfig) -> Result<Self, CommerceError> {
        let catalog = Catalog::embedded(config.currency)?;
        let logger = StructuredLogger::new(SessionId::generate())
            .with_format(LogFormat::Human)
            .with_min_level(LogLevel::Debug);

        let mut store = CartStore::new(catalog.currency());
        let cart_log = logger.for_component("cart");
        store.subscribe(move |state| {
            cart_log
                .debug_builder("cart changed")
                .field_u64("lines", state.line_count() as u64)
                .field_u64("total_items", state.total_items)
                .field("total_price", state.total_price.display())
                .field_bool("empty", state.is_empty())
                .emit();
        });

        logger
            .info_builder("session started")
            .field_u64("products", catalog.len() as u64)
            .field("currency", catalog.currency().code())
            .emit();

        Ok(Self {
            cart: RwSignal::new(store),
            catalog: StoredValue::new(catalog),
            config: StoredValue::new(config),
            logger: StoredValue::new(logger),
        })
    }

    // ---- cart ------------------------------------------------------------

    /// Current cart snapshot (tracked).
    pub fn cart(&self) -> Arc<CartState> {
        self.cart.with(CartStore::snapshot)
    }

    /// Badge count (tracked).
    pub fn total_items(&self) -> u64 {
        self.cart.with(|store| store.state().total_items)
    }

    /// Apply an action; subscribers are only notified when the cart changed.
    pub fn dispatch(&self, action: CartAction) {
        self.cart.maybe_update(|store| store.dispatch(action));
    }

    pub fn add_many(&self, product: &Product, count: u32) {
        self.cart.maybe_update(|store| store.add_many(product, count));
    }

    pub fn update_quantity(&self, id: ProductId, quantity: i64) {
        self.dispatch(CartAction::UpdateQuantity { id, quantity });
    }

    pub fn remove_item(&self, id: ProductId) {
        self.dispatch(CartAction::RemoveItem(id));
    }

    pub fn clear_cart(&self) {
        self.dispatch(CartAction::ClearCart);
    }

    /// Order summary for the current cart (tracked).
    pub fn summary(&self) -> CartPricing {
        let policy = self.config.with_value(PricingPolicy::from_config);
        self.cart.with(|store| policy.summarize(store.state()))
    }

    // ---- catalog ---------------------------------------------------------

    pub fn with_catalog<R>(&self, f: impl FnOnce(&Catalog) -> R) -> R {
        self.catalog.with_value(f)
    }

    /// Resolve a `/product/:id` segment.
    pub fn product(&self, segment: &str) -> Result<Product, CommerceError> {
        self.with_catalog(|catalog| catalog.lookup(segment).cloned())
    }

    pub fn related(&self, product: &Product) -> Vec<Product> {
        let limit = self.config.with_value(|config| config.catalog.related_limit);
        self.with_catalog(|catalog| {
            catalog
                .related(product, limit)
                .into_iter()
                .cloned()
                .collect()
        })
    }

    // ---- settings --------------------------------------------------------

    pub fn store_name(&self) -> String {
        self.config.with_value(|config| config.name.clone())
    }

    pub fn forms(&self) -> FormsConfig {
        self.config.with_value(|config| config.forms.clone())
    }

    pub fn contact(&self) -> ContactConfig {
        self.config.with_value(|config| config.contact.clone())
    }

    /// Logger for one part of the app, tagged with this session.
    pub fn logger(&self, component: &str) -> StructuredLogger {
        self.logger.with_value(|logger| logger.for_component(component))
    }
}
