//! The guest link gate.
//!
//! Decides whether a guest link can take uploads right now and, when it
//! can, bounds the expiration choices by the link's maximum file
//! lifetime. All functions are pure; callers evaluate them on every
//! request with a freshly read `now`.

use chrono::{DateTime, Utc};
use serde::ser::{Serialize, SerializeStruct, Serializer};

use ferry_core::error::AppError;
use ferry_core::result::AppResult;
use ferry_entity::{ExpirationTime, GuestLink, GuestLinkState};

use crate::expiration::{ExpirationOption, guest_options};

/// What a visitor to a guest link sees.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GuestUploadPage {
    /// The link cannot take uploads.
    Inactive {
        /// Why the link is inactive.
        state: GuestLinkState,
    },
    /// The link accepts uploads with these choices.
    Active {
        /// The link itself.
        guest_link: GuestLink,
        /// Expiration choices bounded by the link's maximum lifetime.
        expiration_options: Vec<ExpirationOption>,
    },
}

impl GuestUploadPage {
    /// Whether the page offers an upload form.
    pub fn is_active(&self) -> bool {
        matches!(self, Self::Active { .. })
    }
}

impl Serialize for GuestUploadPage {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Self::Inactive { state } => {
                let mut s = serializer.serialize_struct("GuestUploadPage", 2)?;
                s.serialize_field("active", &false)?;
                s.serialize_field("state", state)?;
                s.end()
            }
            Self::Active {
                guest_link,
                expiration_options,
            } => {
                let mut s = serializer.serialize_struct("GuestUploadPage", 3)?;
                s.serialize_field("active", &true)?;
                s.serialize_field("guest_link", guest_link)?;
                s.serialize_field("expiration_options", expiration_options)?;
                s.end()
            }
        }
    }
}

/// Build the guest upload page for `link` at `now`.
///
/// An inactive link short-circuits without resolving any options.
pub fn evaluate(link: GuestLink, now: DateTime<Utc>) -> GuestUploadPage {
    match link.state(now) {
        GuestLinkState::Active => {
            let expiration_options = guest_options(link.max_file_lifetime, now);
            GuestUploadPage::Active {
                guest_link: link,
                expiration_options,
            }
        }
        state => GuestUploadPage::Inactive { state },
    }
}

/// Reject uploads through a link that is no longer active.
pub fn ensure_active(link: &GuestLink, now: DateTime<Utc>) -> AppResult<()> {
    match link.state(now) {
        GuestLinkState::Active => Ok(()),
        GuestLinkState::Expired => Err(AppError::validation("Guest link has expired")),
        GuestLinkState::Exhausted => Err(AppError::validation(
            "Guest link has reached its upload limit",
        )),
    }
}

/// Reject an upload expiration beyond what the link permits.
///
/// "Never" is only accepted when the link's maximum lifetime is infinite.
pub fn check_upload_expiration(
    link: &GuestLink,
    requested: ExpirationTime,
    now: DateTime<Utc>,
) -> AppResult<()> {
    if requested.is_never() && !link.max_file_lifetime.is_infinite() {
        return Err(AppError::validation(format!(
            "Uploads through this guest link must expire within {}",
            link.max_file_lifetime
        )));
    }

    let latest = link.max_file_lifetime.expiration_from(now);
    if requested > latest {
        return Err(AppError::validation(format!(
            "Expiration {requested} exceeds this guest link's maximum file lifetime of {}",
            link.max_file_lifetime
        )));
    }
    Ok(())
}

/// Reject a file larger than the link's per-file size limit.
pub fn check_upload_size(link: &GuestLink, bytes: u64) -> AppResult<()> {
    if link.max_file_bytes.permits(bytes) {
        Ok(())
    } else {
        Err(AppError::validation(format!(
            "File of {bytes} bytes exceeds this guest link's size limit"
        )))
    }
}
