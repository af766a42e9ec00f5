//! Expiration option resolution.
//!
//! Turns the preset catalog, the administrator's default lifetime and an
//! optional guest-link bound into the ordered list of choices offered to
//! an uploader. The candidate set is built in full, sorted once and
//! de-duplicated, then each lifetime is resolved against `now`.

use chrono::{DateTime, Utc};
use serde::Serialize;

use ferry_entity::{ExpirationTime, FileLifetime};

use super::catalog::LIFETIME_CATALOG;

/// Label of the trailing owner-only option that defers to a custom date.
pub const CUSTOM_LABEL: &str = "Custom";

/// A single selectable expiration choice.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ExpirationOption {
    /// Human-friendly label, e.g. `"7 days"`.
    pub label: String,
    /// Absolute expiration; `None` only for the custom-date option.
    pub expiration: Option<ExpirationTime>,
    /// Whether the form should preselect this option.
    pub is_default: bool,
}

impl ExpirationOption {
    fn from_lifetime(lifetime: FileLifetime, is_default: bool, now: DateTime<Utc>) -> Self {
        Self {
            label: lifetime.friendly_name(),
            expiration: Some(lifetime.expiration_from(now)),
            is_default,
        }
    }

    /// The owner-only "pick your own date" option.
    pub fn custom() -> Self {
        Self {
            label: CUSTOM_LABEL.to_string(),
            expiration: None,
            is_default: false,
        }
    }

    /// Whether this is the custom-date option.
    pub fn is_custom(&self) -> bool {
        self.expiration.is_none()
    }
}

/// Resolve the expiration choices for an upload form.
///
/// With an `upper_bound` (guest context) only lifetimes up to the bound are
/// offered and the bound is the default. Without one (owner context) the
/// whole catalog is offered, `admin_default` is the default, and a trailing
/// [`ExpirationOption::custom`] entry is appended. In both contexts the
/// default lifetime is added to the candidates when the catalog lacks it,
/// so exactly one option is ever marked default.
pub fn resolve_options(
    catalog: &[FileLifetime],
    admin_default: FileLifetime,
    upper_bound: Option<FileLifetime>,
    now: DateTime<Utc>,
) -> Vec<ExpirationOption> {
    let (pinned, mut candidates): (FileLifetime, Vec<FileLifetime>) = match upper_bound {
        Some(bound) => (
            bound,
            catalog.iter().copied().filter(|l| *l <= bound).collect(),
        ),
        None => (admin_default, catalog.to_vec()),
    };

    candidates.push(pinned);
    candidates.sort_unstable();
    candidates.dedup();

    let mut options: Vec<ExpirationOption> = candidates
        .into_iter()
        .map(|lifetime| ExpirationOption::from_lifetime(lifetime, lifetime == pinned, now))
        .collect();

    if upper_bound.is_none() {
        options.push(ExpirationOption::custom());
    }

    options
}

/// Options for an authenticated owner upload.
pub fn owner_options(admin_default: FileLifetime, now: DateTime<Utc>) -> Vec<ExpirationOption> {
    resolve_options(&LIFETIME_CATALOG, admin_default, None, now)
}

/// Options for an upload through a guest link bounded by `max_file_lifetime`.
pub fn guest_options(max_file_lifetime: FileLifetime, now: DateTime<Utc>) -> Vec<ExpirationOption> {
    // The admin default never applies to guests; the bound stands in for it.
    resolve_options(
        &LIFETIME_CATALOG,
        max_file_lifetime,
        Some(max_file_lifetime),
        now,
    )
}
