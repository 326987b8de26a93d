//! Commerce error types.

use thiserror::Error;

/// Errors raised by local storefront validation.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CommerceError {
    /// No rating was selected on the review form.
    #[error("Please select a rating.")]
    MissingRating,

    /// Rating outside of 1..=5.
    #[error("Invalid rating: {0} (must be between 1 and 5)")]
    InvalidRating(i64),

    /// Invalid quantity.
    #[error("Invalid quantity: {0}")]
    InvalidQuantity(i64),

    /// Identifier that could not be parsed.
    #[error("Invalid identifier: {0}")]
    InvalidId(String),

    /// Validation error.
    #[error("Validation error: {0}")]
    ValidationError(String),
}
