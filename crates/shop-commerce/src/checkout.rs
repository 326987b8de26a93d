//! Receipts returned by mutating endpoints.

use serde::{Deserialize, Serialize};

use crate::ids::{OrderId, ProductId, ReviewId};

/// Body of a successful `POST /api/orders`.
///
/// The status code decides success, so every field is optional.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct OrderReceipt {
    #[serde(default, alias = "order_id")]
    pub id: Option<OrderId>,
    #[serde(default)]
    pub total_cents: Option<i64>,
    #[serde(default)]
    pub status: Option<String>,
}

impl OrderReceipt {
    /// Confirmation line shown under the checkout button.
    pub fn confirmation(&self) -> String {
        match self.id {
            Some(id) => format!("Order placed! Order ID: {}", id),
            None => "Order placed!".to_string(),
        }
    }
}

/// Body of a successful review submission.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct ReviewReceipt {
    #[serde(default)]
    pub id: Option<ReviewId>,
    #[serde(default)]
    pub product_id: Option<ProductId>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_order_confirmation() {
        let receipt: OrderReceipt = serde_json::from_str(r#"{"id": 77}"#).unwrap();
        assert_eq!(receipt.confirmation(), "Order placed! Order ID: 77");
    }

    #[test]
    fn test_order_confirmation_without_id() {
        let receipt: OrderReceipt = serde_json::from_str(r#"{"status": "placed"}"#).unwrap();
        assert_eq!(receipt.id, None);
        assert_eq!(receipt.confirmation(), "Order placed!");

        let receipt: OrderReceipt = serde_json::from_str(r#"{"order_id": 5}"#).unwrap();
        assert_eq!(receipt.confirmation(), "Order placed! Order ID: 5");
    }

    #[test]
    fn test_review_receipt_tolerates_missing_fields() {
        let receipt: ReviewReceipt = serde_json::from_str("{}").unwrap();
        assert!(receipt.id.is_none());
    }
}
