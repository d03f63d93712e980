//! Catalog query: category filter plus free-text term.

use crate::catalog::{Catalog, Product};
use crate::search::CategoryFilter;
use serde::{Deserialize, Serialize};

/// A listing query.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct CatalogQuery {
    pub category: CategoryFilter,
    /// Search term; empty means no text filter.
    pub term: String,
}

impl CatalogQuery {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_category(mut self, category: impl Into<CategoryFilter>) -> Self {
        self.category = category.into();
        self
    }

    pub fn with_term(mut self, term: impl Into<String>) -> Self {
        self.term = term.into();
        self
    }

    /// Category and case-insensitive substring match on name or short description.
    pub fn matches(&self, product: &Product) -> bool {
        if !self.category.matches(product) {
            return false;
        }

        let term = self.term.trim();
        if term.is_empty() {
            return true;
        }

        let term = term.to_lowercase();
        product.name.to_lowercase().contains(&term)
            || product.short_description.to_lowercase().contains(&term)
    }

    /// Matching products in catalog order.
    pub fn run<'a>(&self, catalog: &'a Catalog) -> Vec<&'a Product> {
        catalog.all().iter().filter(|p| self.matches(p)).collect()
    }
}
