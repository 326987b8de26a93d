//! Quantity selector on the product detail page.

use crate::money::Money;

/// Quantity stepper with a sticky "add" button showing the line total.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QuantitySelector {
    qty: i64,
    max: i64,
    unit_price: Money,
}

impl QuantitySelector {
    /// Fallback maximum when the page does not provide a usable one.
    pub const DEFAULT_MAX: i64 = 99;

    /// Start at quantity 1. A missing or non-positive `max` becomes 99.
    pub fn new(unit_price: Money, max: Option<i64>) -> Self {
        let max = match max {
            Some(m) if m > 0 => m,
            _ => Self::DEFAULT_MAX,
        };
        Self {
            qty: 1,
            max,
            unit_price,
        }
    }

    /// Step the quantity, staying within `1..=max`.
    pub fn change(&mut self, delta: i64) -> i64 {
        self.qty = self.qty.saturating_add(delta).clamp(1, self.max);
        self.qty
    }

    pub fn quantity(&self) -> i64 {
        self.qty
    }

    pub fn max(&self) -> i64 {
        self.max
    }

    /// Unit price times quantity.
    pub fn total(&self) -> Money {
        self.unit_price.multiply(self.qty)
    }
}
