//! Commerce error types.

use thiserror::Error;

use crate::ids::ProductId;
use crate::inquiry::ValidationErrors;

/// Errors raised at the fallible edges of the storefront domain.
///
/// Cart operations never fail; these cover loading data, reading
/// configuration and the simulated form submission flow.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum CommerceError {
    /// Product not found (raw lookup key, e.g. a route segment).
    #[error("Product not found: {0}")]
    ProductNotFound(String),

    /// Two catalog records share an id.
    #[error("Duplicate product id in catalog: {0}")]
    DuplicateProduct(ProductId),

    /// Catalog record carries a negative or non-finite price.
    #[error("Invalid price for product {id}: {price}")]
    InvalidPrice { id: ProductId, price: f64 },

    /// Category slug outside the fixed enumeration.
    #[error("Unknown category: {0}")]
    UnknownCategory(String),

    /// Malformed catalog data.
    #[error("Catalog error: {0}")]
    CatalogError(String),

    /// Malformed or out-of-range configuration.
    #[error("Configuration error: {0}")]
    ConfigError(String),

    /// Form fields failed validation.
    #[error("Validation failed: {0}")]
    Validation(ValidationErrors),

    /// Submission status changed out of order.
    #[error("Invalid submission transition from {from} to {to}")]
    InvalidSubmissionTransition { from: String, to: String },

    /// Simulated network or timeout failure; the user may retry.
    #[error("Submission failed: {0}")]
    SubmissionFailed(String),

    /// Serialization error.
    #[error("Serialization error: {0}")]
    SerializationError(String),
}

impl CommerceError {
    /// Whether the user can simply try the same action again.
    pub fn is_retryable(&self) -> bool {
        matches!(self, CommerceError::SubmissionFailed(_))
    }
}

impl From<serde_json::Error> for CommerceError {
    fn from(e: serde_json::Error) -> Self {
        CommerceError::SerializationError(e.to_string())
    }
}

impl From<toml::de::Error> for CommerceError {
    fn from(e: toml::de::Error) -> Self {
        CommerceError::ConfigError(e.to_string())
    }
}

impl From<ValidationErrors> for CommerceError {
    fn from(e: ValidationErrors) -> Self {
        CommerceError::Validation(e)
    }
}
