//! The static, read-only product catalog.

use std::collections::HashMap;

use crate::catalog::{Category, Product, ProductRecord};
use crate::error::CommerceError;
use crate::ids::ProductId;
use crate::money::Currency;

/// Catalog data shipped with the storefront.
pub const EMBEDDED_CATALOG: &str = include_str!("../../data/products.json");

/// Default number of related products shown on a detail page.
pub const DEFAULT_RELATED_LIMIT: usize = 3;

/// Products keyed by id, in file order.
#[derive(Debug, Clone, PartialEq)]
pub struct Catalog {
    products: Vec<Product>,
    index: HashMap<ProductId, usize>,
    currency: Currency,
}

impl Catalog {
    /// Build a catalog from products, rejecting duplicate ids.
    pub fn from_products(
        products: Vec<Product>,
        currency: Currency,
    ) -> Result<Self, CommerceError> {
        let mut index = HashMap::with_capacity(products.len());
        for (position, product) in products.iter().enumerate() {
            if index.insert(product.id, position).is_some() {
                return Err(CommerceError::DuplicateProduct(product.id));
            }
        }

        Ok(Self {
            products,
            index,
            currency,
        })
    }

    /// Parse catalog JSON (an array of product records).
    pub fn from_json(json: &str, currency: Currency) -> Result<Self, CommerceError> {
        let records: Vec<ProductRecord> = serde_json::from_str(json)
            .map_err(|e| CommerceError::CatalogError(e.to_string()))?;

        let products = records
            .into_iter()
            .map(|record| record.into_product(currency))
            .collect::<Result<Vec<_>, _>>()?;

        let catalog = Self::from_products(products, currency)?;
        tracing::debug!(products = catalog.len(), %currency, "catalog loaded");
        Ok(catalog)
    }

    /// Load the catalog bundled with the crate.
    pub fn embedded(currency: Currency) -> Result<Self, CommerceError> {
        Self::from_json(EMBEDDED_CATALOG, currency)
    }

    pub fn currency(&self) -> Currency {
        self.currency
    }

    pub fn len(&self) -> usize {
        self.products.len()
    }

    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }

    /// All products in catalog order.
    pub fn all(&self) -> &[Product] {
        &self.products
    }

    pub fn get(&self, id: ProductId) -> Option<&Product> {
        self.index.get(&id).map(|&position| &self.products[position])
    }

    /// Resolve a raw route segment such as the `:id` in `/product/:id`.
    ///
    /// Non-numeric segments are reported as not found.
    pub fn lookup(&self, segment: &str) -> Result<&Product, CommerceError> {
        segment
            .parse::<ProductId>()
            .ok()
            .and_then(|id| self.get(id))
            .ok_or_else(|| CommerceError::ProductNotFound(segment.to_string()))
    }

    /// Products flagged for the landing page.
    pub fn featured(&self) -> impl Iterator<Item = &Product> {
        self.products.iter().filter(|p| p.featured)
    }

    pub fn in_category(&self, category: Category) -> impl Iterator<Item = &Product> {
        self.products.iter().filter(move |p| p.category == category)
    }

    /// Other products from the same category, first `limit` in catalog order.
    pub fn related(&self, product: &Product, limit: usize) -> Vec<&Product> {
        self.in_category(product.category)
            .filter(|p| p.id != product.id)
            .take(limit)
            .collect()
    }
}
