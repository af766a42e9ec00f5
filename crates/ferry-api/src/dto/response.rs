//! Response DTOs.

use serde::{Deserialize, Serialize};

use ferry_entity::UploadMetadata;
use ferry_service::guest::GuestLinkSummary;

/// Standard success response wrapper.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiResponse<T: Serialize> {
    /// Whether the request was successful.
    pub success: bool,
    /// Response data.
    pub data: T,
}

impl<T: Serialize> ApiResponse<T> {
    /// Creates a successful response.
    pub fn ok(data: T) -> Self {
        Self {
            success: true,
            data,
        }
    }
}

/// Health check response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    /// `"ok"` or `"degraded"`.
    pub status: String,
    /// Server version.
    pub version: String,
    /// `"connected"` or `"unavailable"`.
    pub database: String,
}

/// A file index row with display labels.
#[derive(Debug, Clone, Serialize)]
pub struct FileListItem {
    /// Entry metadata.
    #[serde(flatten)]
    pub entry: UploadMetadata,
    /// e.g. `"1.50 MB"`.
    pub size_label: String,
    /// e.g. `"2024-03-17 (7 days)"` or `"Never"`.
    pub expires_label: String,
}

/// A guest link index row with display labels.
#[derive(Debug, Clone, Serialize)]
pub struct GuestLinkListItem {
    /// The link and its state.
    #[serde(flatten)]
    pub summary: GuestLinkSummary,
    /// When the link stops working, e.g. `"Never"`.
    pub url_expires_label: String,
    /// Per-file size limit, e.g. `"10.00 MB"` or `"Unlimited"`.
    pub max_file_bytes_label: String,
    /// Upload count limit, e.g. `"5"` or `"Unlimited"`.
    pub max_file_uploads_label: String,
}
