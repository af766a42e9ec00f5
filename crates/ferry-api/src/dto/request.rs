//! Request DTOs.

use serde::Deserialize;

/// Query parameters for the download history view.
#[derive(Debug, Clone, Copy, Default, Deserialize)]
pub struct DownloadsQuery {
    /// Show only the first download per client address.
    #[serde(default)]
    pub unique: bool,
}
