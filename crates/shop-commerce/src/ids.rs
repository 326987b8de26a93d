//! Newtype IDs for type-safe identifiers.
//!
//! The storefront API keys every record by an integer. Wrapping them keeps a
//! cart item id from being posted where a product id is expected.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::CommerceError;

/// Macro to generate integer newtype ID structs.
macro_rules! define_id {
    ($name:ident) => {
        /// A unique identifier.
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
        #[serde(transparent)]
        pub struct $name(i64);

        impl $name {
            /// Create a new ID.
            pub fn new(id: i64) -> Self {
                Self(id)
            }

            /// Get the raw value.
            pub fn get(&self) -> i64 {
                self.0
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}", self.0)
            }
        }

        impl From<i64> for $name {
            fn from(id: i64) -> Self {
                Self(id)
            }
        }

        impl FromStr for $name {
            type Err = CommerceError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                s.trim()
                    .parse::<i64>()
                    .map(Self)
                    .map_err(|_| CommerceError::InvalidId(s.to_string()))
            }
        }
    };
}

define_id!(ProductId);
define_id!(CartItemId);
define_id!(OrderId);
define_id!(ReviewId);
