use std::str::FromStr;

use bigdecimal::BigDecimal;
use num_traits::{ToPrimitive, Zero};

use crate::domain::shared::validation::ValidationError;

pub const PRICE_MAX_DECIMAL_PLACES: i64 = 4;
/// Exclusive upper bound; the `NUMERIC(12, 4)` column keeps eight integer digits.
pub const PRICE_UPPER_BOUND: i64 = 100_000_000;

/// Non-negative product price below [`PRICE_UPPER_BOUND`] with at most four fractional digits.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd)]
pub struct Price(BigDecimal);

impl Price {
    pub fn new(amount: BigDecimal) -> Result<Self, ValidationError> {
        let mut errors = ValidationError::new();
        if amount < BigDecimal::zero() {
            errors.push("price must not be less than 0");
        }
        if amount >= BigDecimal::from(PRICE_UPPER_BOUND) {
            errors.push(format!("price must be less than {PRICE_UPPER_BOUND}"));
        }
        let (_, scale) = amount.normalized().as_bigint_and_exponent();
        if scale > PRICE_MAX_DECIMAL_PLACES {
            errors.push(format!(
                "price must not have more than {PRICE_MAX_DECIMAL_PLACES} decimal places"
            ));
        }
        errors.into_result(Self(amount))
    }

    /// Builds a price from a JSON-sized float using its shortest decimal form,
    /// so `19.99` is checked as two decimal places rather than its binary expansion.
    pub fn from_f64(amount: f64) -> Result<Self, ValidationError> {
        let decimal = BigDecimal::from_str(&amount.to_string())
            .map_err(|_| ValidationError::single("price must be a number"))?;
        Self::new(decimal)
    }

    /// Constructor for data already persisted in the repository (no validation).
    pub fn from_repository(amount: BigDecimal) -> Self {
        Self(amount)
    }

    pub fn amount(&self) -> &BigDecimal {
        &self.0
    }

    pub fn to_f64(&self) -> f64 {
        self.0.to_f64().unwrap_or_default()
    }
}

impl std::fmt::Display for Price {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for Price {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let decimal = BigDecimal::from_str(s.trim())
            .map_err(|_| ValidationError::single("price must be a number"))?;
        Self::new(decimal)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_accept_price_with_four_decimals() {
        let price = Price::from_f64(12.3456).unwrap();
        assert_eq!(price.to_string(), "12.3456");
        assert!((price.to_f64() - 12.3456).abs() < 1e-9);
    }

    #[test]
    fn should_accept_free_product() {
        assert!(Price::from_f64(0.0).is_ok());
    }

    #[test]
    fn should_ignore_trailing_zeros_when_counting_decimals() {
        assert!("5.10000".parse::<Price>().is_ok());
    }

    #[test]
    fn should_reject_too_many_decimals() {
        let errors = Price::from_f64(1.23456).unwrap_err();
        assert_eq!(
            errors.violations(),
            ["price must not have more than 4 decimal places".to_string()]
        );
    }

    #[test]
    fn should_report_negative_and_precision_together() {
        let errors = "-0.123456".parse::<Price>().unwrap_err();
        assert_eq!(errors.violations().len(), 2);
    }

    #[test]
    fn should_accept_largest_storable_price() {
        assert!("99999999.9999".parse::<Price>().is_ok());
    }

    #[test]
    fn should_reject_price_with_too_many_integer_digits() {
        let errors = Price::from_f64(1_000_000_000.0).unwrap_err();
        assert_eq!(
            errors.violations(),
            ["price must be less than 100000000".to_string()]
        );
        assert!("100000000".parse::<Price>().is_err());
    }

    #[test]
    fn should_reject_non_numeric_text() {
        assert!("ten".parse::<Price>().is_err());
    }
}
