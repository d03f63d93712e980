//! The inquiry form on a product page.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::catalog::{Category, Product};
use crate::inquiry::ValidationErrors;

/// Preset bulk quantities offered in the dropdown, in kilograms.
pub const PRESET_KILOGRAMS: [u32; 6] = [1, 5, 10, 25, 50, 100];

/// Requested quantity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum QuantityOption {
    Kilograms(u32),
    /// Buyer will give the amount in the message.
    Custom,
}

impl QuantityOption {
    /// Every choice in dropdown order.
    pub fn choices() -> impl Iterator<Item = QuantityOption> {
        PRESET_KILOGRAMS
            .into_iter()
            .map(QuantityOption::Kilograms)
            .chain(std::iter::once(QuantityOption::Custom))
    }

    /// Form value, e.g. "25" or "custom".
    pub fn value(&self) -> String {
        match self {
            QuantityOption::Kilograms(kg) => kg.to_string(),
            QuantityOption::Custom => "custom".to_string(),
        }
    }

    pub fn label(&self) -> String {
        match self {
            QuantityOption::Kilograms(kg) => format!("{kg} kg"),
            QuantityOption::Custom => "Custom Quantity".to_string(),
        }
    }

    /// Parse a form value. Only the presets and "custom" are accepted.
    pub fn from_value(value: &str) -> Option<Self> {
        let value = value.trim();
        if value.eq_ignore_ascii_case("custom") {
            return Some(QuantityOption::Custom);
        }
        let kg: u32 = value.parse().ok()?;
        PRESET_KILOGRAMS
            .contains(&kg)
            .then_some(QuantityOption::Kilograms(kg))
    }
}

impl Default for QuantityOption {
    fn default() -> Self {
        QuantityOption::Kilograms(1)
    }
}

impl fmt::Display for QuantityOption {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.label())
    }
}

/// Fields of a product inquiry, plus the product it is about.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InquiryForm {
    pub product_name: String,
    pub product_category: Category,
    pub name: String,
    pub email: String,
    /// Optional.
    pub phone: String,
    pub quantity: QuantityOption,
    /// Optional.
    pub message: String,
}

impl InquiryForm {
    pub fn for_product(product: &Product) -> Self {
        Self {
            product_name: product.name.clone(),
            product_category: product.category,
            name: String::new(),
            email: String::new(),
            phone: String::new(),
            quantity: QuantityOption::default(),
            message: String::new(),
        }
    }

    /// Heading shown above the form.
    pub fn title(&self) -> String {
        format!("Inquire About {}", self.product_name)
    }

    pub fn validate(&self) -> Result<(), ValidationErrors> {
        let mut errors = ValidationErrors::new();
        errors.require("name", &self.name, "Name is required");
        errors.require_email("email", &self.email);
        errors.into_result()
    }

    /// Clear the buyer's fields; the product context stays.
    pub fn reset(&mut self) {
        self.name.clear();
        self.email.clear();
        self.phone.clear();
        self.quantity = QuantityOption::default();
        self.message.clear();
    }
}
