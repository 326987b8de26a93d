//! Cart module.
//!
//! Contains the nav badge counter, the product-page quantity selector and
//! the cart snapshot used to reconcile the badge with the server.

mod badge;
mod quantity;
mod snapshot;

pub use badge::CartBadge;
pub use quantity::QuantitySelector;
pub use snapshot::{CartLine, CartSnapshot};
