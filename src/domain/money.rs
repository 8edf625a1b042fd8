use crate::error::DemoError;
use rust_decimal::Decimal;
use std::fmt;
use std::iter::Sum;
use std::ops::Add;
use std::str::FromStr;

/// A non-negative monetary amount in tenge.
///
/// Wraps `rust_decimal::Decimal` so the scale a user typed is kept as-is
/// when the amount is displayed back ("1500.50" stays "1500.50").
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default)]
pub struct Amount(Decimal);

impl Amount {
    pub const ZERO: Self = Self(Decimal::ZERO);

    pub fn new(value: Decimal) -> Result<Self, DemoError> {
        if value >= Decimal::ZERO {
            Ok(Self(value))
        } else {
            Err(DemoError::ValidationError(
                "Amount must not be negative".to_string(),
            ))
        }
    }

    /// Builds an amount from a whole number of tenge. Used for menu prices.
    pub fn tenge(value: u32) -> Self {
        Self(Decimal::from(value))
    }

    pub fn value(&self) -> Decimal {
        self.0
    }
}

impl From<Amount> for Decimal {
    fn from(amount: Amount) -> Self {
        amount.0
    }
}

impl FromStr for Amount {
    type Err = DemoError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let input = s.trim();
        let value = Decimal::from_str(input).map_err(|source| DemoError::AmountParseError {
            input: input.to_string(),
            source,
        })?;
        if input.starts_with('-') {
            return Err(DemoError::ValidationError(
                "Amount must not be negative".to_string(),
            ));
        }
        // Only plain notation round-trips unchanged: no exponent, no '+', no '_'.
        if !input.chars().all(|c| c.is_ascii_digit() || c == '.') {
            return Err(DemoError::ValidationError(format!(
                "Amount '{input}' must be written as plain digits"
            )));
        }
        Self::new(value)
    }
}

impl fmt::Display for Amount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.0, f)
    }
}

impl Add for Amount {
    type Output = Self;
    fn add(self, rhs: Self) -> Self::Output {
        Self(self.0 + rhs.0)
    }
}

impl Sum for Amount {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(Self::ZERO, Add::add)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_amount_validation() {
        assert!(Amount::new(dec!(1.0)).is_ok());
        assert!(Amount::new(dec!(0)).is_ok());
        assert!(matches!(
            Amount::new(dec!(-1.0)),
            Err(DemoError::ValidationError(_))
        ));
    }

    #[test]
    fn test_amount_parse_keeps_scale() {
        let amount: Amount = " 1500.50 ".parse().unwrap();
        assert_eq!(amount.value(), dec!(1500.50));
        assert_eq!(amount.to_string(), "1500.50");
    }

    #[test]
    fn test_amount_parse_rejects_garbage() {
        let result = "abc".parse::<Amount>();
        assert!(matches!(
            result,
            Err(DemoError::AmountParseError { ref input, .. }) if input == "abc"
        ));
    }

    #[test]
    fn test_amount_parse_rejects_negative() {
        assert!(matches!(
            "-5".parse::<Amount>(),
            Err(DemoError::ValidationError(_))
        ));
    }

    #[test]
    fn test_amount_parse_rejects_non_plain_notation() {
        assert!(matches!(
            "1e3".parse::<Amount>(),
            Err(DemoError::ValidationError(_))
        ));
        for input in ["2E-1", "+5", "1_000"] {
            assert!(input.parse::<Amount>().is_err(), "{input} should be rejected");
        }
    }

    #[test]
    fn test_amount_parse_rejects_negative_zero() {
        assert!(matches!(
            "-0".parse::<Amount>(),
            Err(DemoError::ValidationError(_))
        ));
        assert_eq!("0".parse::<Amount>().unwrap().to_string(), "0");
    }

    #[test]
    fn test_tenge_and_sum() {
        assert_eq!(Amount::tenge(300).value(), dec!(300));
        let total: Amount = [Amount::tenge(300), Amount::tenge(50), Amount::tenge(20)]
            .into_iter()
            .sum();
        assert_eq!(total, Amount::tenge(370));
        assert_eq!(total.to_string(), "370");
    }
}
