//! Observability for storefront pages.
//!
//! This crate provides:
//! - `RequestId` - Identifier generated once per page load
//! - `StructuredLogger` - Structured console logging with page context

mod logging;
mod request_id;

pub use logging::*;
pub use request_id::RequestId;
