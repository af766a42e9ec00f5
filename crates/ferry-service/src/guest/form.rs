//! Choices offered when creating a new guest link.

use chrono::{DateTime, Utc};
use serde::Serialize;

use ferry_entity::FileLifetime;

use crate::expiration::{ExpirationOption, LIFETIME_CATALOG};

/// A selectable maximum file lifetime.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LifetimeOption {
    /// Human-friendly label.
    pub label: String,
    /// The lifetime this option selects.
    pub lifetime: FileLifetime,
    /// Whether the form should preselect this option.
    pub is_default: bool,
}

/// Options for the new-guest-link form.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GuestLinkForm {
    /// When the link itself stops working. Defaults to never.
    pub url_expiration_options: Vec<ExpirationOption>,
    /// Upper bound on what uploaders may pick. Defaults to infinite.
    pub file_lifetime_options: Vec<LifetimeOption>,
}

impl GuestLinkForm {
    /// Build the form choices relative to `now`.
    pub fn build(now: DateTime<Utc>) -> Self {
        let url_expiration_options = LIFETIME_CATALOG
            .iter()
            .map(|lifetime| ExpirationOption {
                label: lifetime.friendly_name(),
                expiration: Some(lifetime.expiration_from(now)),
                is_default: lifetime.is_infinite(),
            })
            .collect();

        let file_lifetime_options = LIFETIME_CATALOG
            .iter()
            .map(|lifetime| LifetimeOption {
                label: lifetime.friendly_name(),
                lifetime: *lifetime,
                is_default: lifetime.is_infinite(),
            })
            .collect();

        Self {
            url_expiration_options,
            file_lifetime_options,
        }
    }
}
