//! Storefront domain types and logic.
//!
//! This crate holds everything the storefront pages compute locally:
//!
//! - **Catalog**: products, reviews, category normalization, rating widget
//! - **Search**: URL-driven search query and the client-side post-filter
//! - **Cart**: nav badge counter, quantity selector, cart snapshots
//! - **Checkout**: order receipts
//!
//! # Example
//!
//! ```rust
//! use shop_commerce::prelude::*;
//!
//! let query = SearchQuery::from_query_string("q=rose&category=Flowers");
//! assert_eq!(query.sort, SortOption::Popular);
//! assert_eq!(query.location(), "/products?q=rose&category=Flowers&sort=popular");
//! ```

pub mod error;
pub mod ids;
pub mod money;

pub mod cart;
pub mod catalog;
pub mod checkout;
pub mod search;

pub use error::CommerceError;
pub use ids::*;
pub use money::Money;

/// Prelude for convenient imports.
pub mod prelude {
    pub use crate::error::CommerceError;
    pub use crate::ids::*;
    pub use crate::money::Money;

    // Catalog
    pub use crate::catalog::{
        normalize_category, Product, RatingLabel, Review, ReviewDraft, ReviewsSummary, StarRating,
    };

    // Cart
    pub use crate::cart::{CartBadge, CartLine, CartSnapshot, QuantitySelector};

    // Checkout
    pub use crate::checkout::{OrderReceipt, ReviewReceipt};

    // Search
    pub use crate::search::{SearchOutcome, SearchQuery, SortOption, LISTING_PAGE_SIZE};
}
