//! Search module.
//!
//! The URL query string is the only source of truth for search state. The
//! listing endpoint returns one fixed page which is then narrowed locally.

mod filter;
mod query;

pub use filter::SearchOutcome;
pub use query::{SearchQuery, SortOption, LISTING_PAGE_SIZE};
