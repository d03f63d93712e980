//! Store configuration.
//!
//! Every field has a default, so an empty TOML document is a valid config.
//!
//! ```toml
//! name = "Harvest Hub"
//! currency = "INR"
//!
//! [pricing]
//! shipping_fee = 4.99
//! tax_rate_percent = 10.0
//!
//! [forms]
//! submission_latency_ms = 1500
//! ```

use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::cart::{DEFAULT_SHIPPING_FEE, DEFAULT_TAX_RATE_PERCENT};
use crate::catalog::DEFAULT_RELATED_LIMIT;
use crate::error::CommerceError;
use crate::money::Currency;

/// Top-level storefront configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StoreConfig {
    /// Display name of the store.
    #[serde(default = "default_name")]
    pub name: String,

    /// Currency every price is held and shown in.
    #[serde(default)]
    pub currency: Currency,

    #[serde(default)]
    pub pricing: PricingConfig,

    #[serde(default)]
    pub forms: FormsConfig,

    #[serde(default)]
    pub catalog: CatalogConfig,

    #[serde(default)]
    pub contact: ContactConfig,
}

fn default_name() -> String {
    "Harvest Hub".to_string()
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            name: default_name(),
            currency: Currency::default(),
            pricing: PricingConfig::default(),
            forms: FormsConfig::default(),
            catalog: CatalogConfig::default(),
            contact: ContactConfig::default(),
        }
    }
}

impl StoreConfig {
    /// Parse and validate a TOML document.
    pub fn from_toml_str(content: &str) -> Result<Self, CommerceError> {
        let config: StoreConfig = toml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    /// Reject values no storefront could work with.
    pub fn validate(&self) -> Result<(), CommerceError> {
        let fee = self.pricing.shipping_fee;
        if !fee.is_finite() || fee < 0.0 {
            return Err(CommerceError::ConfigError(format!(
                "shipping_fee must be a non-negative amount, got {fee}"
            )));
        }
        let rate = self.pricing.tax_rate_percent;
        if !(0.0..=100.0).contains(&rate) {
            return Err(CommerceError::ConfigError(format!(
                "tax_rate_percent must be within 0..=100, got {rate}"
            )));
        }
        if self.catalog.related_limit == 0 {
            return Err(CommerceError::ConfigError(
                "related_limit must be at least 1".to_string(),
            ));
        }
        Ok(())
    }

    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    pub fn with_currency(mut self, currency: Currency) -> Self {
        self.currency = currency;
        self
    }

    pub fn with_shipping_fee(mut self, fee: f64) -> Self {
        self.pricing.shipping_fee = fee;
        self
    }

    pub fn with_tax_rate(mut self, percent: f64) -> Self {
        self.pricing.tax_rate_percent = percent;
        self
    }

    pub fn with_submission_latency(mut self, latency: Duration) -> Self {
        self.forms.submission_latency_ms = duration_ms(latency);
        self
    }

    pub fn with_confirmation_period(mut self, period: Duration) -> Self {
        self.forms.confirmation_ms = duration_ms(period);
        self
    }

    pub fn with_related_limit(mut self, limit: usize) -> Self {
        self.catalog.related_limit = limit;
        self
    }
}

fn duration_ms(duration: Duration) -> u64 {
    u64::try_from(duration.as_millis()).unwrap_or(u64::MAX)
}

/// Shipping and tax.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PricingConfig {
    /// Flat shipping fee in major units.
    #[serde(default = "default_shipping_fee")]
    pub shipping_fee: f64,

    /// Tax as a percent of the subtotal.
    #[serde(default = "default_tax_rate")]
    pub tax_rate_percent: f64,
}

fn default_shipping_fee() -> f64 {
    DEFAULT_SHIPPING_FEE
}

fn default_tax_rate() -> f64 {
    DEFAULT_TAX_RATE_PERCENT
}

impl Default for PricingConfig {
    fn default() -> Self {
        Self {
            shipping_fee: default_shipping_fee(),
            tax_rate_percent: default_tax_rate(),
        }
    }
}

/// Timings for the contact and inquiry forms.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FormsConfig {
    /// Simulated round trip for a submission.
    #[serde(default = "default_submission_latency")]
    pub submission_latency_ms: u64,

    /// How long the confirmation message stays up.
    #[serde(default = "default_confirmation")]
    pub confirmation_ms: u64,

    /// How long "Added to Cart" stays on the add button.
    #[serde(default = "default_added_to_cart")]
    pub added_to_cart_ms: u64,
}

fn default_submission_latency() -> u64 {
    1500
}

fn default_confirmation() -> u64 {
    5000
}

fn default_added_to_cart() -> u64 {
    2000
}

impl FormsConfig {
    pub fn submission_latency(&self) -> Duration {
        Duration::from_millis(self.submission_latency_ms)
    }

    pub fn confirmation_period(&self) -> Duration {
        Duration::from_millis(self.confirmation_ms)
    }

    pub fn added_to_cart_period(&self) -> Duration {
        Duration::from_millis(self.added_to_cart_ms)
    }
}

impl Default for FormsConfig {
    fn default() -> Self {
        Self {
            submission_latency_ms: default_submission_latency(),
            confirmation_ms: default_confirmation(),
            added_to_cart_ms: default_added_to_cart(),
        }
    }
}

/// Catalog presentation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CatalogConfig {
    /// Related products shown on a detail page.
    #[serde(default = "default_related_limit")]
    pub related_limit: usize,
}

fn default_related_limit() -> usize {
    DEFAULT_RELATED_LIMIT
}

impl Default for CatalogConfig {
    fn default() -> Self {
        Self {
            related_limit: default_related_limit(),
        }
    }
}

/// Contact details shown on the contact page and in the footer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ContactConfig {
    #[serde(default = "default_email")]
    pub email: String,

    #[serde(default = "default_phone")]
    pub phone: String,

    #[serde(default = "default_address_lines")]
    pub address_lines: Vec<String>,

    #[serde(default = "default_instagram")]
    pub instagram_url: String,
}

fn default_email() -> String {
    "abhishekjc679@gmail.com".to_string()
}

fn default_phone() -> String {
    "+91 6362206323".to_string()
}

fn default_address_lines() -> Vec<String> {
    vec![
        "Chikmagalur".to_string(),
        "Karnataka, India".to_string(),
    ]
}

fn default_instagram() -> String {
    "https://www.instagram.com/abhishek_c19".to_string()
}

impl ContactConfig {
    pub fn mailto(&self) -> String {
        format!("mailto:{}", self.email)
    }

    /// `tel:` link with spaces stripped.
    pub fn tel(&self) -> String {
        let digits: String = self.phone.chars().filter(|c| !c.is_whitespace()).collect();
        format!("tel:{digits}")
    }
}

impl Default for ContactConfig {
    fn default() -> Self {
        Self {
            email: default_email(),
            phone: default_phone(),
            address_lines: default_address_lines(),
            instagram_url: default_instagram(),
        }
    }
}
