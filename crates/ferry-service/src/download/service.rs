//! Download history views.

use std::sync::Arc;

use chrono::{DateTime, Utc};
use serde::Serialize;
use tracing::debug;

use ferry_core::error::AppError;
use ferry_core::result::AppResult;
use ferry_core::types::EntryId;
use ferry_database::ShareStore;
use ferry_entity::{DownloadRecord, UploadMetadata};

use super::agent::UserAgentParser;
use super::dedupe::dedupe;

/// A download as shown in the history view.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DownloadDisplay {
    /// 1-based position counting down from the newest download.
    pub number: usize,
    /// When the download happened.
    pub time: DateTime<Utc>,
    /// Client network address.
    pub client_ip: String,
    /// Parsed browser name, empty if unknown.
    pub browser: String,
    /// Parsed platform name, empty if unknown.
    pub platform: String,
}

/// The download history page for one entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DownloadsView {
    /// The downloaded entry.
    pub entry: UploadMetadata,
    /// Whether only the first download per client is shown.
    pub unique: bool,
    /// Number of downloads before any de-duplication.
    pub total_downloads: usize,
    /// The downloads to display, newest first.
    pub downloads: Vec<DownloadDisplay>,
}

/// Project newest-first records into display records.
///
/// With `unique` set, only the first record per client address survives.
pub fn project(
    records: &[DownloadRecord],
    unique: bool,
    parser: &dyn UserAgentParser,
) -> Vec<DownloadDisplay> {
    let shown = if unique {
        dedupe(records)
    } else {
        records.to_vec()
    };
    let total = shown.len();

    shown
        .into_iter()
        .enumerate()
        .map(|(i, record)| {
            let client = parser.parse(&record.user_agent);
            DownloadDisplay {
                number: total - i,
                time: record.time,
                client_ip: record.client_ip,
                browser: client.browser,
                platform: client.platform,
            }
        })
        .collect()
}

/// Builds download history views.
#[derive(Debug, Clone)]
pub struct DownloadService {
    /// Storage surface.
    store: Arc<dyn ShareStore>,
    /// User-agent parser for display records.
    parser: Arc<dyn UserAgentParser>,
}

impl DownloadService {
    /// Creates a new download service.
    pub fn new(store: Arc<dyn ShareStore>, parser: Arc<dyn UserAgentParser>) -> Self {
        Self { store, parser }
    }

    /// Builds the download history for an entry.
    pub async fn history(&self, id: &EntryId, unique: bool) -> AppResult<DownloadsView> {
        let entry = self
            .store
            .get_entry_metadata(id)
            .await?
            .ok_or_else(|| AppError::not_found(format!("Entry {id} not found")))?;

        let mut records = self.store.get_entry_downloads(id).await?;
        records.sort_by(|a, b| b.time.cmp(&a.time));

        let downloads = project(&records, unique, self.parser.as_ref());
        debug!(
            entry_id = %id,
            total = records.len(),
            shown = downloads.len(),
            unique,
            "Built download history"
        );

        Ok(DownloadsView {
            entry,
            unique,
            total_downloads: records.len(),
            downloads,
        })
    }
}
