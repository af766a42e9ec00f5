//! Uploaded entry metadata.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use ferry_core::types::{EntryId, GuestLinkId};

use crate::lifetime::ExpirationTime;

/// Size of an uploaded file in bytes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FileSize(pub u64);

impl FileSize {
    /// Return the size in bytes.
    pub fn bytes(&self) -> u64 {
        self.0
    }
}

/// Metadata describing an uploaded file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UploadMetadata {
    /// Entry identifier.
    pub id: EntryId,
    /// Original file name.
    pub filename: String,
    /// MIME type reported at upload.
    pub content_type: String,
    /// Optional owner note.
    pub note: Option<String>,
    /// When the file was uploaded.
    pub uploaded: DateTime<Utc>,
    /// When the file stops being served.
    pub expires: ExpirationTime,
    /// Size of the file.
    pub size: FileSize,
    /// The guest link it arrived through, if any.
    pub guest_link_id: Option<GuestLinkId>,
}

impl UploadMetadata {
    /// Whether the entry has expired at `now`.
    pub fn is_expired(&self, now: DateTime<Utc>) -> bool {
        self.expires.has_passed(now)
    }

    /// Whether the entry was uploaded through a guest link.
    pub fn is_guest_upload(&self) -> bool {
        self.guest_link_id.is_some()
    }
}
