//! The general contact form.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::CommerceError;
use crate::inquiry::ValidationErrors;

/// What a contact message is about.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ContactSubject {
    #[serde(rename = "Product Inquiry")]
    ProductInquiry,
    #[serde(rename = "Bulk Order")]
    BulkOrder,
    #[serde(rename = "Price Quote")]
    PriceQuote,
    Other,
}

impl ContactSubject {
    pub const ALL: [ContactSubject; 4] = [
        ContactSubject::ProductInquiry,
        ContactSubject::BulkOrder,
        ContactSubject::PriceQuote,
        ContactSubject::Other,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            ContactSubject::ProductInquiry => "Product Inquiry",
            ContactSubject::BulkOrder => "Bulk Order",
            ContactSubject::PriceQuote => "Price Quote",
            ContactSubject::Other => "Other",
        }
    }

    pub fn from_label(label: &str) -> Option<Self> {
        let label = label.trim();
        Self::ALL
            .into_iter()
            .find(|subject| subject.label().eq_ignore_ascii_case(label))
    }
}

impl fmt::Display for ContactSubject {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for ContactSubject {
    type Err = CommerceError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_label(s).ok_or_else(|| {
            let mut errors = ValidationErrors::new();
            errors.push("subject", format!("Unknown subject: {s}"));
            CommerceError::Validation(errors)
        })
    }
}

/// Fields of the contact page form.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ContactForm {
    pub name: String,
    pub email: String,
    /// `None` until the user picks one.
    pub subject: Option<ContactSubject>,
    pub message: String,
}

impl ContactForm {
    pub fn new() -> Self {
        Self::default()
    }

    /// All fields are required.
    pub fn validate(&self) -> Result<(), ValidationErrors> {
        let mut errors = ValidationErrors::new();
        errors.require("name", &self.name, "Name is required");
        errors.require_email("email", &self.email);
        if self.subject.is_none() {
            errors.push("subject", "Select a subject");
        }
        errors.require("message", &self.message, "Message is required");
        errors.into_result()
    }

    pub fn reset(&mut self) {
        *self = Self::default();
    }
}
