//! Storefront page controllers.
//!
//! Each page load builds one controller that owns its state (cart badge,
//! toasts, status lines, widgets) and receives explicit events instead of
//! globally-named handlers. Controllers return rendered HTML fragments and
//! [`Navigation`] effects; nothing persists across page loads except the URL.
//!
//! - [`ListingPage`] - product search with client-side post-filtering
//! - [`ProductDetailPage`] - product detail, quantity stepper, review form
//! - [`CartPage`] - quantity updates, removal, order placement
//! - [`StorefrontSession`] - shared cart actions, badge and toasts

mod cart;
mod detail;
mod html;
mod listing;
mod location;
mod session;
mod toast;

#[cfg(test)]
mod test_support;

pub mod sections;

pub use cart::{CartEvent, CartPage};
pub use detail::{DetailEvent, ProductDetailPage, ProductDetailView};
pub use html::escape_html;
pub use listing::{ListingEvent, ListingPage, ListingView, SearchForm};
pub use location::{Navigation, PageLocation};
pub use session::{ActionOutcome, StatusSlot, StorefrontSession};
pub use toast::{Toast, ToastId, ToastNotifier, ToastVariant};
