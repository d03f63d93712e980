//! Product catalog module.
//!
//! Contains the product and category types and the static catalog.

mod catalog;
mod category;
mod product;

pub use catalog::{Catalog, DEFAULT_RELATED_LIMIT, EMBEDDED_CATALOG};
pub use category::Category;
pub use product::{Product, ProductRecord, PLACEHOLDER_IMAGE};
