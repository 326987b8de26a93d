//! Cart contents as returned by `GET /api/cart`.

use serde::{Deserialize, Serialize};

use crate::ids::{CartItemId, ProductId};
use crate::money::Money;

/// One line in the server-side cart.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CartLine {
    #[serde(default)]
    pub id: Option<CartItemId>,
    #[serde(default)]
    pub product_id: Option<ProductId>,
    #[serde(default)]
    pub quantity: Option<i64>,
    #[serde(default)]
    pub unit_price_cents: Option<i64>,
    #[serde(default)]
    pub line_total_cents: Option<i64>,
}

impl CartLine {
    /// Quantity counted toward the badge. Missing or negative counts as zero.
    pub fn counted_quantity(&self) -> i64 {
        self.quantity.unwrap_or(0).max(0)
    }

    /// Line total, computed from the unit price when the server omits it.
    pub fn line_total(&self) -> Money {
        match self.line_total_cents {
            Some(cents) => Money::usd(cents),
            None => Money::from_optional_cents(self.unit_price_cents)
                .multiply(self.counted_quantity()),
        }
    }
}

/// Server cart snapshot.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct CartSnapshot {
    #[serde(default)]
    pub items: Vec<CartLine>,
    #[serde(default)]
    pub total_cents: Option<i64>,
}

impl CartSnapshot {
    /// Sum of item quantities, used to reconcile the badge.
    pub fn total_quantity(&self) -> i64 {
        self.items
            .iter()
            .map(CartLine::counted_quantity)
            .fold(0, i64::saturating_add)
    }

    /// Cart total, summed from lines when the server omits it.
    pub fn total(&self) -> Money {
        match self.total_cents {
            Some(cents) => Money::usd(cents),
            None => self
                .items
                .iter()
                .fold(Money::usd(0), |acc, line| acc + line.line_total()),
        }
    }
}
