//! Amounts and numeric input parsing
//!
//! Calculators work on `f64` values typed in by the user. The helpers here
//! turn raw text into checked numbers and describe any refusal as a
//! [`Rejection`].

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::Rejection;

/// A finite, strictly positive amount of money
///
/// Deserializing a zero, negative or non-finite value fails, so a stored
/// ledger containing one is treated as corrupt rather than loaded.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Serialize, Deserialize)]
#[serde(try_from = "f64", into = "f64")]
pub struct Amount(f64);

impl Amount {
    /// Validate a value for the named field
    pub fn new(field: &'static str, value: f64) -> Result<Self, Rejection> {
        require_positive(field, value).map(Self)
    }

    /// Parse raw text for the named field
    pub fn parse(field: &'static str, raw: &str) -> Result<Self, Rejection> {
        Self::new(field, parse_number(field, raw)?)
    }

    /// Get the underlying value
    pub const fn value(&self) -> f64 {
        self.0
    }
}

impl TryFrom<f64> for Amount {
    type Error = Rejection;

    fn try_from(value: f64) -> Result<Self, Self::Error> {
        Self::new("amount", value)
    }
}

impl From<Amount> for f64 {
    fn from(amount: Amount) -> Self {
        amount.0
    }
}

impl fmt::Display for Amount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Parse a decimal number, tolerating surrounding whitespace
///
/// Accepts "450", "450.5", " 12 ". A comma is accepted as the decimal
/// separator ("12,50") since that is how amounts are written locally.
pub fn parse_number(field: &'static str, raw: &str) -> Result<f64, Rejection> {
    let trimmed = raw.trim();
    let normalized;
    let text = if trimmed.contains(',') && !trimmed.contains('.') {
        normalized = trimmed.replacen(',', ".", 1);
        normalized.as_str()
    } else {
        trimmed
    };

    text.parse::<f64>().map_err(|_| Rejection::NotANumber {
        field,
        input: raw.to_string(),
    })
}

/// Parse a whole number of months or people
pub fn parse_count(field: &'static str, raw: &str) -> Result<i64, Rejection> {
    raw.trim().parse::<i64>().map_err(|_| Rejection::NotANumber {
        field,
        input: raw.to_string(),
    })
}

/// Reject NaN and infinities
pub fn require_finite(field: &'static str, value: f64) -> Result<f64, Rejection> {
    if value.is_finite() {
        Ok(value)
    } else {
        Err(Rejection::NotFinite { field })
    }
}

/// Require a finite value greater than zero
pub fn require_positive(field: &'static str, value: f64) -> Result<f64, Rejection> {
    let value = require_finite(field, value)?;
    if value > 0.0 {
        Ok(value)
    } else {
        Err(Rejection::NotPositive { field, value })
    }
}

/// Require a finite value of zero or more
pub fn require_non_negative(field: &'static str, value: f64) -> Result<f64, Rejection> {
    let value = require_finite(field, value)?;
    if value >= 0.0 {
        Ok(value)
    } else {
        Err(Rejection::Negative { field, value })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_number() {
        assert_eq!(parse_number("income", "450").unwrap(), 450.0);
        assert_eq!(parse_number("income", " 12.5 ").unwrap(), 12.5);
        assert_eq!(parse_number("income", "12,5").unwrap(), 12.5);
        assert!(matches!(
            parse_number("income", "abc"),
            Err(Rejection::NotANumber { .. })
        ));
        assert!(parse_number("income", "").is_err());
    }

    #[test]
    fn test_amount_requires_positive() {
        assert!(Amount::new("amount", 5.0).is_ok());
        assert!(matches!(
            Amount::new("amount", 0.0),
            Err(Rejection::NotPositive { .. })
        ));
        assert!(matches!(
            Amount::new("amount", -3.0),
            Err(Rejection::NotPositive { .. })
        ));
        assert!(matches!(
            Amount::new("amount", f64::NAN),
            Err(Rejection::NotFinite { .. })
        ));
        assert!(Amount::new("amount", f64::INFINITY).is_err());
    }

    #[test]
    fn test_amount_serde_rejects_non_positive() {
        let amount: Amount = serde_json::from_str("12.5").unwrap();
        assert_eq!(amount.value(), 12.5);
        assert_eq!(serde_json::to_string(&amount).unwrap(), "12.5");
        assert!(serde_json::from_str::<Amount>("-1").is_err());
        assert!(serde_json::from_str::<Amount>("0").is_err());
    }

    #[test]
    fn test_non_negative() {
        assert_eq!(require_non_negative("rate", 0.0).unwrap(), 0.0);
        assert!(matches!(
            require_non_negative("rate", -1.0),
            Err(Rejection::Negative { .. })
        ));
    }

    #[test]
    fn test_parse_count() {
        assert_eq!(parse_count("term", "36").unwrap(), 36);
        assert!(parse_count("term", "3.5").is_err());
    }
}
