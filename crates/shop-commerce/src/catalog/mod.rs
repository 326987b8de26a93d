//! Catalog module.
//!
//! Contains product and review view models plus the category matcher.

mod category;
mod product;
mod rating;
mod review;

pub use category::normalize_category;
pub use product::{Product, ReviewsSummary};
pub use rating::{RatingLabel, StarRating};
pub use review::{Review, ReviewDraft};
