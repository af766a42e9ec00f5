//! Guest link entity and its upload limits.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use ferry_core::types::GuestLinkId;

use crate::lifetime::{ExpirationTime, FileLifetime};

/// Maximum number of files that may be uploaded through a guest link.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum UploadCountLimit {
    /// At most this many uploads.
    Limited(u32),
    /// No limit on the number of uploads.
    Unlimited,
}

impl UploadCountLimit {
    /// Check whether `count` uploads have used up this limit.
    pub fn is_reached_by(&self, count: u32) -> bool {
        match self {
            Self::Limited(max) => count >= *max,
            Self::Unlimited => false,
        }
    }

    /// Return the numeric limit, or `None` for unlimited.
    pub fn as_max(&self) -> Option<u32> {
        match self {
            Self::Limited(max) => Some(*max),
            Self::Unlimited => None,
        }
    }
}

impl From<Option<u32>> for UploadCountLimit {
    fn from(value: Option<u32>) -> Self {
        value.map(Self::Limited).unwrap_or(Self::Unlimited)
    }
}

/// Maximum size of a single file uploaded through a guest link.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum UploadSizeLimit {
    /// At most this many bytes per file.
    Limited(u64),
    /// No size limit.
    Unlimited,
}

impl UploadSizeLimit {
    /// Check whether a file of `bytes` bytes fits within this limit.
    pub fn permits(&self, bytes: u64) -> bool {
        match self {
            Self::Limited(max) => bytes <= *max,
            Self::Unlimited => true,
        }
    }

    /// Return the numeric limit, or `None` for unlimited.
    pub fn as_max(&self) -> Option<u64> {
        match self {
            Self::Limited(max) => Some(*max),
            Self::Unlimited => None,
        }
    }
}

impl From<Option<u64>> for UploadSizeLimit {
    fn from(value: Option<u64>) -> Self {
        value.map(Self::Limited).unwrap_or(Self::Unlimited)
    }
}

/// Whether a guest link can currently accept uploads.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum GuestLinkState {
    /// The link accepts uploads.
    Active,
    /// The link's own expiration has passed.
    Expired,
    /// The link has reached its upload count limit.
    Exhausted,
}

/// A capability granting unauthenticated visitors bounded upload access.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GuestLink {
    /// Unique guest link identifier.
    pub id: GuestLinkId,
    /// Optional owner-facing label.
    pub label: Option<String>,
    /// When the link was created.
    pub created: DateTime<Utc>,
    /// When the link itself stops working.
    pub url_expires: ExpirationTime,
    /// Upper bound on the lifetime uploaders may choose.
    pub max_file_lifetime: FileLifetime,
    /// Per-file size limit.
    pub max_file_bytes: UploadSizeLimit,
    /// Upload count limit.
    pub max_file_uploads: UploadCountLimit,
    /// Number of files already uploaded through this link.
    pub files_uploaded: u32,
}

impl GuestLink {
    /// Whether the link's own expiration has passed at `now`.
    pub fn is_expired(&self, now: DateTime<Utc>) -> bool {
        self.url_expires.has_passed(now)
    }

    /// Whether the link has used up its upload count.
    pub fn is_exhausted(&self) -> bool {
        self.max_file_uploads.is_reached_by(self.files_uploaded)
    }

    /// Classify the link at `now`. Expiry takes precedence over exhaustion.
    pub fn state(&self, now: DateTime<Utc>) -> GuestLinkState {
        if self.is_expired(now) {
            GuestLinkState::Expired
        } else if self.is_exhausted() {
            GuestLinkState::Exhausted
        } else {
            GuestLinkState::Active
        }
    }

    /// Whether the link accepts uploads at `now`.
    ///
    /// Pure predicate; callers re-evaluate it on every request because both
    /// the clock and the upload count move outside its control.
    pub fn is_active(&self, now: DateTime<Utc>) -> bool {
        self.state(now) == GuestLinkState::Active
    }
}

/// Data required to persist a new guest link.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateGuestLink {
    /// Identifier to store the link under.
    pub id: GuestLinkId,
    /// Optional label.
    pub label: Option<String>,
    /// Creation time.
    pub created: DateTime<Utc>,
    /// Link expiration.
    pub url_expires: ExpirationTime,
    /// Lifetime bound for uploads.
    pub max_file_lifetime: FileLifetime,
    /// Per-file size limit.
    pub max_file_bytes: UploadSizeLimit,
    /// Upload count limit.
    pub max_file_uploads: UploadCountLimit,
}

impl From<CreateGuestLink> for GuestLink {
    fn from(data: CreateGuestLink) -> Self {
        Self {
            id: data.id,
            label: data.label,
            created: data.created,
            url_expires: data.url_expires,
            max_file_lifetime: data.max_file_lifetime,
            max_file_bytes: data.max_file_bytes,
            max_file_uploads: data.max_file_uploads,
            files_uploaded: 0,
        }
    }
}
