//! Search module.
//!
//! Category filtering and text search over the static catalog.

mod filter;
mod query;

pub use filter::{CategoryFilter, CATEGORY_PARAM};
pub use query::CatalogQuery;
