//! Money type for representing monetary values.
//!
//! Amounts are integers in the currency's minor unit (paise, cents) so cart
//! aggregates stay exact no matter how many adds and removes happen.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::CommerceError;

/// How digits left of the decimal point are grouped for display.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DigitGrouping {
    /// 1,234,567
    Thousands,
    /// 12,34,567 (lakh/crore)
    Indian,
}

/// Supported currencies.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum Currency {
    #[default]
    INR,
    USD,
    EUR,
    GBP,
}

impl Currency {
    /// Get the currency code (e.g., "INR").
    pub fn code(&self) -> &'static str {
        match self {
            Currency::INR => "INR",
            Currency::USD => "USD",
            Currency::EUR => "EUR",
            Currency::GBP => "GBP",
        }
    }

    /// Get the currency symbol.
    pub fn symbol(&self) -> &'static str {
        match self {
            Currency::INR => "\u{20b9}",
            Currency::USD => "$",
            Currency::EUR => "\u{20ac}",
            Currency::GBP => "\u{00a3}",
        }
    }

    /// Number of decimal places in the minor unit.
    pub fn decimal_places(&self) -> u32 {
        2
    }

    pub fn grouping(&self) -> DigitGrouping {
        match self {
            Currency::INR => DigitGrouping::Indian,
            _ => DigitGrouping::Thousands,
        }
    }

    /// Parse a currency code string.
    pub fn from_code(code: &str) -> Option<Self> {
        match code.trim().to_uppercase().as_str() {
            "INR" => Some(Currency::INR),
            "USD" => Some(Currency::USD),
            "EUR" => Some(Currency::EUR),
            "GBP" => Some(Currency::GBP),
            _ => None,
        }
    }

    fn minor_per_major(&self) -> i64 {
        10_i64.pow(self.decimal_places())
    }
}

impl fmt::Display for Currency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.code())
    }
}

impl FromStr for Currency {
    type Err = CommerceError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Currency::from_code(s)
            .ok_or_else(|| CommerceError::ConfigError(format!("unsupported currency: {s}")))
    }
}

/// A monetary value with currency.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub struct Money {
    /// Amount in the smallest currency unit.
    pub amount_minor: i64,
    /// The currency.
    pub currency: Currency,
}

impl Money {
    pub const fn new(amount_minor: i64, currency: Currency) -> Self {
        Self {
            amount_minor,
            currency,
        }
    }

    /// Create a Money value from a decimal amount in major units.
    ///
    /// ```
    /// use harvest_commerce::money::{Currency, Money};
    /// let price = Money::from_major(499.5, Currency::INR);
    /// assert_eq!(price.amount_minor, 49950);
    /// ```
    pub fn from_major(amount: f64, currency: Currency) -> Self {
        let amount_minor = (amount * currency.minor_per_major() as f64).round() as i64;
        Self::new(amount_minor, currency)
    }

    pub const fn zero(currency: Currency) -> Self {
        Self::new(0, currency)
    }

    pub fn is_zero(&self) -> bool {
        self.amount_minor == 0
    }

    pub fn is_negative(&self) -> bool {
        self.amount_minor < 0
    }

    /// Convert to a decimal value in major units.
    pub fn to_major(&self) -> f64 {
        self.amount_minor as f64 / self.currency.minor_per_major() as f64
    }

    /// Add an amount in the same currency, saturating at the i64 bounds.
    pub fn plus(&self, other: Money) -> Money {
        debug_assert_eq!(self.currency, other.currency, "currency mismatch");
        Money::new(
            self.amount_minor.saturating_add(other.amount_minor),
            self.currency,
        )
    }

    /// Subtract an amount in the same currency, saturating at the i64 bounds.
    pub fn minus(&self, other: Money) -> Money {
        debug_assert_eq!(self.currency, other.currency, "currency mismatch");
        Money::new(
            self.amount_minor.saturating_sub(other.amount_minor),
            self.currency,
        )
    }

    /// Multiply by a signed quantity (negative for removals).
    pub fn times(&self, factor: i64) -> Money {
        Money::new(self.amount_minor.saturating_mul(factor), self.currency)
    }

    /// Add an amount, or `None` on a currency mismatch or overflow.
    pub fn checked_plus(&self, other: Money) -> Option<Money> {
        if self.currency != other.currency {
            return None;
        }
        let amount_minor = self.amount_minor.checked_add(other.amount_minor)?;
        Some(Money::new(amount_minor, self.currency))
    }

    /// Multiply by a signed quantity, or `None` on overflow.
    pub fn checked_times(&self, factor: i64) -> Option<Money> {
        let amount_minor = self.amount_minor.checked_mul(factor)?;
        Some(Money::new(amount_minor, self.currency))
    }

    /// Take a percentage, rounding half away from zero to the minor unit.
    pub fn percentage(&self, percent: f64) -> Money {
        let amount = (self.amount_minor as f64 * percent / 100.0).round() as i64;
        Money::new(amount, self.currency)
    }

    /// Sum an iterator of amounts in one currency.
    pub fn sum<I: IntoIterator<Item = Money>>(iter: I, currency: Currency) -> Money {
        iter.into_iter()
            .fold(Money::zero(currency), |acc, m| acc.plus(m))
    }

    /// Format with symbol, grouping and two decimals (e.g. "₹1,00,000.00").
    pub fn display(&self) -> String {
        format!("{}{}", self.currency.symbol(), self.display_amount())
    }

    /// Format without the currency symbol (e.g. "1,00,000.00").
    pub fn display_amount(&self) -> String {
        let per_major = self.currency.minor_per_major().unsigned_abs();
        let magnitude = self.amount_minor.unsigned_abs();
        let sign = if self.amount_minor < 0 { "-" } else { "" };
        let major = group_digits(magnitude / per_major, self.currency.grouping());
        let places = self.currency.decimal_places() as usize;
        if places == 0 {
            format!("{sign}{major}")
        } else {
            format!("{sign}{major}.{:0places$}", magnitude % per_major)
        }
    }
}

impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.display())
    }
}

fn group_digits(value: u64, grouping: DigitGrouping) -> String {
    let digits = value.to_string();
    if digits.len() <= 3 {
        return digits;
    }

    let (head, tail) = digits.split_at(digits.len() - 3);
    let step = match grouping {
        DigitGrouping::Thousands => 3,
        DigitGrouping::Indian => 2,
    };

    let mut groups = Vec::new();
    let mut end = head.len();
    while end > 0 {
        let start = end.saturating_sub(step);
        groups.push(&head[start..end]);
        end = start;
    }
    groups.reverse();

    format!("{},{}", groups.join(","), tail)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_money_from_major() {
        assert_eq!(Money::from_major(49.99, Currency::USD).amount_minor, 4999);
        assert_eq!(Money::from_major(10.0, Currency::INR).amount_minor, 1000);
        assert_eq!(Money::from_major(0.1 + 0.2, Currency::INR).amount_minor, 30);
    }

    #[test]
    fn test_money_to_major() {
        let m = Money::new(4999, Currency::USD);
        assert!((m.to_major() - 49.99).abs() < 0.001);
    }

    #[test]
    fn test_display_indian_grouping() {
        assert_eq!(Money::new(10_000_000, Currency::INR).display(), "\u{20b9}1,00,000.00");
        assert_eq!(Money::new(123_456_789, Currency::INR).display(), "\u{20b9}12,34,567.89");
        assert_eq!(Money::new(99_900, Currency::INR).display(), "\u{20b9}999.00");
    }

    #[test]
    fn test_display_thousands_grouping() {
        assert_eq!(Money::new(123_456_789, Currency::USD).display(), "$1,234,567.89");
        assert_eq!(Money::new(499, Currency::USD).display(), "$4.99");
        assert_eq!(Money::new(5, Currency::GBP).display(), "\u{00a3}0.05");
    }

    #[test]
    fn test_display_negative() {
        assert_eq!(Money::new(-150, Currency::USD).display(), "$-1.50");
        assert_eq!(Money::new(-150, Currency::USD).display_amount(), "-1.50");
    }

    #[test]
    fn test_arithmetic() {
        let a = Money::new(1000, Currency::INR);
        let b = Money::new(250, Currency::INR);
        assert_eq!(a.plus(b).amount_minor, 1250);
        assert_eq!(a.minus(b).amount_minor, 750);
        assert_eq!(b.times(-3).amount_minor, -750);
        assert_eq!(Money::sum([a, b, b], Currency::INR).amount_minor, 1500);
    }

    #[test]
    fn test_arithmetic_saturates() {
        let big = Money::new(i64::MAX - 1, Currency::INR);
        assert_eq!(big.plus(Money::new(10, Currency::INR)).amount_minor, i64::MAX);
        assert_eq!(big.times(2).amount_minor, i64::MAX);
    }

    #[test]
    fn test_checked_arithmetic() {
        let inr = Money::new(1000, Currency::INR);
        assert_eq!(inr.checked_plus(Money::new(5, Currency::INR)), Some(Money::new(1005, Currency::INR)));
        assert_eq!(inr.checked_plus(Money::new(5, Currency::USD)), None);
        assert_eq!(Money::new(i64::MAX, Currency::INR).checked_plus(Money::new(1, Currency::INR)), None);
        assert_eq!(inr.checked_times(-2), Some(Money::new(-2000, Currency::INR)));
        assert_eq!(Money::new(i64::MAX / 2 + 1, Currency::INR).checked_times(2), None);
    }

    #[test]
    fn test_percentage_rounds_half_away_from_zero() {
        assert_eq!(Money::new(10000, Currency::INR).percentage(10.0).amount_minor, 1000);
        assert_eq!(Money::new(1005, Currency::INR).percentage(10.0).amount_minor, 101);
        assert_eq!(Money::new(1004, Currency::INR).percentage(10.0).amount_minor, 100);
    }

    #[test]
    fn test_currency_from_code() {
        assert_eq!(Currency::from_code("inr"), Some(Currency::INR));
        assert_eq!(Currency::from_code("USD"), Some(Currency::USD));
        assert_eq!(Currency::from_code("JPY"), None);
        assert!("xyz".parse::<Currency>().is_err());
    }
}
