//! The fixed set of product categories.

use crate::error::CommerceError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// A product category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Coffee,
    Arecanut,
    Pepper,
}

impl Category {
    /// Every category, in menu order.
    pub const ALL: [Category; 3] = [Category::Coffee, Category::Arecanut, Category::Pepper];

    /// URL-friendly slug, as used in `?category=`.
    pub fn slug(&self) -> &'static str {
        match self {
            Category::Coffee => "coffee",
            Category::Arecanut => "arecanut",
            Category::Pepper => "pepper",
        }
    }

    /// Display label with a capitalised first letter.
    pub fn label(&self) -> &'static str {
        match self {
            Category::Coffee => "Coffee",
            Category::Arecanut => "Arecanut",
            Category::Pepper => "Pepper",
        }
    }

    /// Banner image for the landing page tiles.
    pub fn banner_image(&self) -> &'static str {
        match self {
            Category::Coffee => "https://images.pexels.com/photos/271624/pexels-photo-271624.jpeg",
            Category::Arecanut => {
                "https://images.pexels.com/photos/5501119/pexels-photo-5501119.jpeg"
            }
            Category::Pepper => "https://images.pexels.com/photos/4198370/pexels-photo-4198370.jpeg",
        }
    }

    pub fn tagline(&self) -> &'static str {
        match self {
            Category::Coffee => "Shade-grown arabica and robusta from the Western Ghats.",
            Category::Arecanut => "Sun-dried and processed areca from family plantations.",
            Category::Pepper => "Bold, pungent black pepper picked at peak ripeness.",
        }
    }

    /// Parse a lower-case slug.
    pub fn from_slug(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "coffee" => Some(Category::Coffee),
            "arecanut" => Some(Category::Arecanut),
            "pepper" => Some(Category::Pepper),
            _ => None,
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.slug())
    }
}

impl FromStr for Category {
    type Err = CommerceError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Category::from_slug(s).ok_or_else(|| CommerceError::UnknownCategory(s.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_slug_round_trip() {
        for category in Category::ALL {
            assert_eq!(Category::from_slug(category.slug()), Some(category));
        }
    }

    #[test]
    fn test_from_slug_is_case_insensitive() {
        assert_eq!(Category::from_slug("Pepper"), Some(Category::Pepper));
        assert_eq!(Category::from_slug("all"), None);
    }

    #[test]
    fn test_unknown_category_error() {
        let err = "tea".parse::<Category>().unwrap_err();
        assert_eq!(err, CommerceError::UnknownCategory("tea".to_string()));
    }

    #[test]
    fn test_labels() {
        assert_eq!(Category::Arecanut.label(), "Arecanut");
        assert_eq!(Category::Coffee.to_string(), "coffee");
    }

    #[test]
    fn test_serde_uses_lowercase() {
        let json = serde_json::to_string(&Category::Coffee).unwrap();
        assert_eq!(json, "\"coffee\"");
    }
}
