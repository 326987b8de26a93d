//! Review types.

use chrono::{DateTime, NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};

use crate::error::CommerceError;

/// A customer review attached to a product detail response.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Review {
    /// Star rating, 1 to 5. Comment-only reviews carry no rating.
    #[serde(default, alias = "star")]
    pub rating: Option<i64>,
    /// Free-text comment.
    #[serde(default)]
    pub comment: Option<String>,
    /// Submission date as sent by the server.
    #[serde(default, alias = "created_at")]
    pub review_date: Option<String>,
}

impl Review {
    /// Create a review.
    pub fn new(rating: i64, comment: impl Into<String>) -> Self {
        Self {
            rating: Some(rating),
            comment: Some(comment.into()),
            review_date: None,
        }
    }

    /// Set the submission date.
    pub fn with_date(mut self, date: impl Into<String>) -> Self {
        self.review_date = Some(date.into());
        self
    }

    /// Number of filled stars, clamped to 0..=5.
    pub fn filled_stars(&self) -> usize {
        self.rating.unwrap_or(0).clamp(0, 5) as usize
    }

    /// Star string such as `★★★★☆`.
    pub fn stars(&self) -> String {
        let filled = self.filled_stars();
        format!("{}{}", "★".repeat(filled), "☆".repeat(5 - filled))
    }

    /// Human-readable submission date.
    ///
    /// ISO dates and timestamps render as `Mar 1, 2024`; anything else is
    /// passed through unchanged.
    pub fn display_date(&self) -> String {
        let raw = match self.review_date.as_deref() {
            Some(raw) if !raw.is_empty() => raw,
            _ => return String::new(),
        };

        let date = NaiveDate::parse_from_str(raw, "%Y-%m-%d")
            .ok()
            .or_else(|| {
                NaiveDateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M:%S%.f")
                    .ok()
                    .map(|dt| dt.date())
            })
            .or_else(|| {
                DateTime::parse_from_rfc3339(raw)
                    .ok()
                    .map(|dt| dt.date_naive())
            });

        match date {
            Some(date) => date.format("%b %-d, %Y").to_string(),
            None => raw.to_string(),
        }
    }
}

/// A review about to be submitted from the product page.
#[derive(Debug, Clone, Default, Serialize, PartialEq, Eq)]
pub struct ReviewDraft {
    /// Selected star rating.
    pub rating: Option<u8>,
    /// Comment text.
    pub comment: String,
}

impl ReviewDraft {
    /// Create a draft.
    pub fn new(rating: Option<u8>, comment: impl Into<String>) -> Self {
        Self {
            rating,
            comment: comment.into(),
        }
    }

    /// Check the form before it is posted.
    pub fn validate(&self) -> Result<u8, CommerceError> {
        match self.rating {
            None => Err(CommerceError::MissingRating),
            Some(r) if (1..=5).contains(&r) => Ok(r),
            Some(r) => Err(CommerceError::InvalidRating(r as i64)),
        }
    }

    /// Comment length as shown by the character counter, in UTF-16 code
    /// units so astral characters such as emoji count as two.
    pub fn char_count(&self) -> usize {
        self.comment.encode_utf16().count()
    }
}
