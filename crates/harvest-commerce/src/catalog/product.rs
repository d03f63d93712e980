//! Product types.

use crate::catalog::Category;
use crate::error::CommerceError;
use crate::ids::ProductId;
use crate::money::{Currency, Money};
use serde::{Deserialize, Serialize};

/// Image shown when a product's own image fails to load.
pub const PLACEHOLDER_IMAGE: &str = "/placeholder-product.svg";

/// A product in the catalog.
///
/// Products are read-only; the cart copies them into line items.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Product {
    /// Unique product identifier.
    pub id: ProductId,
    /// Product name.
    pub name: String,
    pub category: Category,
    /// Unit price.
    pub price: Money,
    /// Full description.
    pub description: String,
    /// Short description for listings.
    pub short_description: String,
    pub image_url: String,
    /// Growing region.
    pub origin: String,
    /// Shown on the landing page.
    pub featured: bool,
    /// Free-form timestamp of the last catalog edit.
    pub last_updated: String,
}

impl Product {
    /// Create a product with empty descriptive fields.
    pub fn new(id: ProductId, name: impl Into<String>, category: Category, price: Money) -> Self {
        Self {
            id,
            name: name.into(),
            category,
            price,
            description: String::new(),
            short_description: String::new(),
            image_url: PLACEHOLDER_IMAGE.to_string(),
            origin: String::new(),
            featured: false,
            last_updated: String::new(),
        }
    }

    pub fn with_short_description(mut self, text: impl Into<String>) -> Self {
        self.short_description = text.into();
        self
    }

    pub fn with_description(mut self, text: impl Into<String>) -> Self {
        self.description = text.into();
        self
    }

    pub fn with_origin(mut self, origin: impl Into<String>) -> Self {
        self.origin = origin.into();
        self
    }

    pub fn featured(mut self) -> Self {
        self.featured = true;
        self
    }

    /// Formatted unit price.
    pub fn price_display(&self) -> String {
        self.price.display()
    }

    /// Route to the detail page.
    pub fn href(&self) -> String {
        format!("/product/{}", self.id)
    }
}

/// A product as it appears in the catalog JSON file.
///
/// Prices are decimal major units; keys are camelCase.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ProductRecord {
    pub id: u32,
    pub name: String,
    pub category: Category,
    pub price: f64,
    pub description: String,
    pub short_description: String,
    pub image_url: String,
    pub origin: String,
    #[serde(default)]
    pub featured: bool,
    pub last_updated: String,
}

impl ProductRecord {
    /// Convert into a [`Product`] priced in `currency`.
    pub fn into_product(self, currency: Currency) -> Result<Product, CommerceError> {
        let id = ProductId::new(self.id);
        if !self.price.is_finite() || self.price < 0.0 {
            return Err(CommerceError::InvalidPrice {
                id,
                price: self.price,
            });
        }

        Ok(Product {
            id,
            name: self.name,
            category: self.category,
            price: Money::from_major(self.price, currency),
            description: self.description,
            short_description: self.short_description,
            image_url: self.image_url,
            origin: self.origin,
            featured: self.featured,
            last_updated: self.last_updated,
        })
    }
}
