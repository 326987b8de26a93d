//! Product view model.

use crate::ids::ProductId;
use crate::money::Money;
use crate::catalog::Review;
use serde::{Deserialize, Serialize};

/// Aggregate review numbers attached to a product detail response.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct ReviewsSummary {
    /// Mean star rating.
    #[serde(default)]
    pub avg_rating: Option<f64>,
    /// Number of reviews.
    #[serde(default)]
    pub count: Option<u32>,
}

impl ReviewsSummary {
    /// Average rating, zero when absent.
    pub fn average(&self) -> f64 {
        self.avg_rating.unwrap_or(0.0)
    }

    /// Review count, zero when absent.
    pub fn total(&self) -> u32 {
        self.count.unwrap_or(0)
    }

    /// Summary line such as `4.5 (2 reviews)`.
    pub fn display(&self) -> String {
        format!("{:.1} ({} reviews)", self.average(), self.total())
    }
}

/// A product as returned by the listing and detail endpoints.
///
/// Listing responses leave `reviews` and `reviews_summary` out; every field
/// other than `id` may be missing.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Product {
    /// Product identifier.
    pub id: ProductId,
    /// Product name.
    #[serde(default)]
    pub name: String,
    /// Long description.
    #[serde(default)]
    pub description: Option<String>,
    /// Category slug or label.
    #[serde(default)]
    pub category: Option<String>,
    /// Category display name, sent by some endpoints instead of `category`.
    #[serde(default)]
    pub category_name: Option<String>,
    /// Price in minor currency units.
    #[serde(default)]
    pub price_cents: Option<i64>,
    /// Product image.
    #[serde(default)]
    pub image_url: Option<String>,
    /// Stock keeping unit.
    #[serde(default)]
    pub sku: Option<String>,
    /// Units available.
    #[serde(default)]
    pub stock_qty: Option<i64>,
    /// Aggregate review numbers.
    #[serde(default)]
    pub reviews_summary: Option<ReviewsSummary>,
    /// Individual reviews.
    #[serde(default)]
    pub reviews: Vec<Review>,
}

impl Product {
    /// Create a product with only an id and name set.
    pub fn new(id: i64, name: impl Into<String>) -> Self {
        Self {
            id: ProductId::new(id),
            name: name.into(),
            description: None,
            category: None,
            category_name: None,
            price_cents: None,
            image_url: None,
            sku: None,
            stock_qty: None,
            reviews_summary: None,
            reviews: Vec::new(),
        }
    }

    /// Set the description.
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Set the category.
    pub fn with_category(mut self, category: impl Into<String>) -> Self {
        self.category = Some(category.into());
        self
    }

    /// Set the price.
    pub fn with_price_cents(mut self, price_cents: i64) -> Self {
        self.price_cents = Some(price_cents);
        self
    }

    /// Set the image.
    pub fn with_image_url(mut self, image_url: impl Into<String>) -> Self {
        self.image_url = Some(image_url.into());
        self
    }

    /// Price as money; missing prices are zero.
    pub fn price(&self) -> Money {
        Money::from_optional_cents(self.price_cents)
    }

    /// Category to display and match on: `category`, then `category_name`.
    pub fn category_label(&self) -> &str {
        self.category
            .as_deref()
            .filter(|c| !c.is_empty())
            .or(self.category_name.as_deref())
            .unwrap_or("")
    }

    /// Lower-cased `name + " " + description` used by text search.
    pub fn search_text(&self) -> String {
        format!(
            "{} {}",
            self.name,
            self.description.as_deref().unwrap_or("")
        )
        .to_lowercase()
    }

    /// Review summary, empty when the endpoint omitted it.
    pub fn summary(&self) -> ReviewsSummary {
        self.reviews_summary.clone().unwrap_or_default()
    }
}
