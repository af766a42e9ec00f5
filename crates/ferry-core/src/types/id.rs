//! Newtype wrappers for domain identifiers.
//!
//! Entry and guest-link identifiers are short random alphanumeric strings
//! that appear in public URLs. Distinct types keep a `GuestLinkId` from
//! being passed where an `EntryId` is expected, and parsing rejects any
//! malformed input before storage is consulted.

use std::fmt;
use std::str::FromStr;

use rand::distr::{Alphanumeric, SampleString};
use serde::{Deserialize, Serialize};

use crate::error::AppError;

/// Macro to define a fixed-length alphanumeric ID wrapper.
macro_rules! define_id {
    (
        $(#[$meta:meta])*
        $name:ident, $len:expr, $label:literal
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
        #[serde(transparent)]
        pub struct $name(String);

        impl $name {
            /// Number of characters in a valid identifier.
            pub const LENGTH: usize = $len;

            /// Generate a new random identifier.
            pub fn generate() -> Self {
                Self(Alphanumeric.sample_string(&mut rand::rng(), Self::LENGTH))
            }

            /// Parse and validate an identifier.
            pub fn parse(raw: &str) -> Result<Self, AppError> {
                if raw.len() != Self::LENGTH {
                    return Err(AppError::validation(format!(
                        "{} must be {} characters, got {}",
                        $label,
                        Self::LENGTH,
                        raw.len()
                    )));
                }
                if let Some(c) = raw.chars().find(|c| !c.is_ascii_alphanumeric()) {
                    return Err(AppError::validation(format!(
                        "{} contains invalid character {:?}",
                        $label, c
                    )));
                }
                Ok(Self(raw.to_string()))
            }

            /// Return the identifier as a string slice.
            pub fn as_str(&self) -> &str {
                &self.0
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(&self.0)
            }
        }

        impl FromStr for $name {
            type Err = AppError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                Self::parse(s)
            }
        }

        impl AsRef<str> for $name {
            fn as_ref(&self) -> &str {
                &self.0
            }
        }
    };
}

define_id!(
    /// Unique identifier for an uploaded entry.
    EntryId, 10, "entry ID"
);

define_id!(
    /// Unique identifier for a guest link.
    GuestLinkId, 16, "guest link ID"
);
