//! Category filter for the product listing.

use crate::catalog::{Category, Product};
use serde::{Deserialize, Serialize};

/// Query-string parameter carrying the category filter.
pub const CATEGORY_PARAM: &str = "category";

/// Which categories the listing shows.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum CategoryFilter {
    #[default]
    All,
    Only(Category),
}

impl CategoryFilter {
    /// Every filter button, in display order.
    pub const CHOICES: [CategoryFilter; 4] = [
        CategoryFilter::All,
        CategoryFilter::Only(Category::Coffee),
        CategoryFilter::Only(Category::Arecanut),
        CategoryFilter::Only(Category::Pepper),
    ];

    /// Read the `category` parameter; missing, `all` or unknown values show everything.
    pub fn from_param(value: Option<&str>) -> Self {
        value
            .and_then(Category::from_slug)
            .map_or(CategoryFilter::All, CategoryFilter::Only)
    }

    /// Value to write back into the query string; `None` removes the parameter.
    pub fn to_param(&self) -> Option<&'static str> {
        match self {
            CategoryFilter::All => None,
            CategoryFilter::Only(category) => Some(category.slug()),
        }
    }

    /// Listing URL for this filter.
    pub fn href(&self) -> String {
        match self.to_param() {
            Some(slug) => format!("/products?{CATEGORY_PARAM}={slug}"),
            None => "/products".to_string(),
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            CategoryFilter::All => "All",
            CategoryFilter::Only(category) => category.label(),
        }
    }

    pub fn matches(&self, product: &Product) -> bool {
        match self {
            CategoryFilter::All => true,
            CategoryFilter::Only(category) => product.category == *category,
        }
    }
}

impl From<Category> for CategoryFilter {
    fn from(category: Category) -> Self {
        CategoryFilter::Only(category)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_param() {
        assert_eq!(CategoryFilter::from_param(None), CategoryFilter::All);
        assert_eq!(CategoryFilter::from_param(Some("all")), CategoryFilter::All);
        assert_eq!(CategoryFilter::from_param(Some("tea")), CategoryFilter::All);
        assert_eq!(
            CategoryFilter::from_param(Some("coffee")),
            CategoryFilter::Only(Category::Coffee)
        );
    }

    #[test]
    fn test_all_removes_param() {
        assert_eq!(CategoryFilter::All.to_param(), None);
        assert_eq!(CategoryFilter::All.href(), "/products");
        assert_eq!(
            CategoryFilter::Only(Category::Pepper).href(),
            "/products?category=pepper"
        );
    }
}
