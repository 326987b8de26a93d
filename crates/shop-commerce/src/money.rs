//! Money type for representing prices.
//!
//! Prices arrive from the API as integer minor units (`price_cents`) and are
//! formatted with integer arithmetic so `1050` always renders as `$10.50`.
//! The storefront only prices in US dollars.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::Add;

/// A US dollar amount.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub struct Money {
    /// Amount in cents.
    pub amount_cents: i64,
}

impl Money {
    /// USD amount from cents.
    pub fn usd(amount_cents: i64) -> Self {
        Self { amount_cents }
    }

    /// USD amount from an optional API field. Missing prices count as zero.
    pub fn from_optional_cents(amount_cents: Option<i64>) -> Self {
        Self::usd(amount_cents.unwrap_or(0))
    }

    /// Multiply by a quantity, saturating at the `i64` bounds.
    pub fn multiply(&self, factor: i64) -> Money {
        Money::usd(self.amount_cents.saturating_mul(factor))
    }

    /// Format as a display string (e.g., "$49.99").
    pub fn display(&self) -> String {
        let sign = if self.amount_cents < 0 { "-" } else { "" };
        let abs = self.amount_cents.unsigned_abs();
        format!("{}${}.{:02}", sign, abs / 100, abs % 100)
    }
}

impl Add for Money {
    type Output = Money;

    fn add(self, other: Money) -> Money {
        Money::usd(self.amount_cents.saturating_add(other.amount_cents))
    }
}

impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.display())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_money_display() {
        assert_eq!(Money::usd(1050).display(), "$10.50");
        assert_eq!(Money::usd(5).display(), "$0.05");
        assert_eq!(Money::usd(4999).to_string(), "$49.99");
    }

    #[test]
    fn test_missing_price_is_zero() {
        let m = Money::from_optional_cents(None);
        assert_eq!(m, Money::usd(0));
        assert_eq!(m.display(), "$0.00");
    }

    #[test]
    fn test_negative_display() {
        assert_eq!(Money::usd(-250).display(), "-$2.50");
    }

    #[test]
    fn test_money_multiply() {
        let unit = Money::usd(1299);
        assert_eq!(unit.multiply(3).amount_cents, 3897);
        assert_eq!(unit.multiply(2).display(), "$25.98");
    }

    #[test]
    fn test_multiply_saturates() {
        assert_eq!(Money::usd(4).multiply(i64::MAX).amount_cents, i64::MAX);
        assert_eq!((Money::usd(i64::MAX) + Money::usd(1)).amount_cents, i64::MAX);
    }

    #[test]
    fn test_money_addition() {
        let total = Money::usd(1000) + Money::usd(550);
        assert_eq!(total.display(), "$15.50");
    }
}
