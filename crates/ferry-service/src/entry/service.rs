//! Entry service.

use std::sync::Arc;

use chrono::{DateTime, Utc};
use serde::Serialize;

use ferry_core::error::AppError;
use ferry_core::result::AppResult;
use ferry_core::types::EntryId;
use ferry_database::ShareStore;
use ferry_entity::{FileLifetime, UploadMetadata};

use crate::expiration::{ExpirationOption, owner_options};

/// An entry together with how often it was downloaded.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct EntryInfo {
    /// Entry metadata.
    pub entry: UploadMetadata,
    /// Total number of downloads.
    pub download_count: usize,
}

/// The owner upload form.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct UploadPage {
    /// The administrator's default lifetime.
    pub default_file_lifetime: FileLifetime,
    /// Expiration choices, ending with the custom-date option.
    pub expiration_options: Vec<ExpirationOption>,
}

/// Serves entry-related pages.
#[derive(Debug, Clone)]
pub struct EntryService {
    /// Storage surface.
    store: Arc<dyn ShareStore>,
}

impl EntryService {
    /// Creates a new entry service.
    pub fn new(store: Arc<dyn ShareStore>) -> Self {
        Self { store }
    }

    /// Lists every entry, newest upload first.
    pub async fn index(&self) -> AppResult<Vec<UploadMetadata>> {
        let mut entries = self.store.get_entries_metadata().await?;
        entries.sort_by(|a, b| b.uploaded.cmp(&a.uploaded));
        Ok(entries)
    }

    /// Fetches an entry with its download count.
    pub async fn info(&self, id: &EntryId) -> AppResult<EntryInfo> {
        let entry = self
            .store
            .get_entry_metadata(id)
            .await?
            .ok_or_else(|| AppError::not_found(format!("Entry {id} not found")))?;
        let download_count = self.store.get_entry_downloads(id).await?.len();

        Ok(EntryInfo {
            entry,
            download_count,
        })
    }

    /// Builds the owner upload form from the stored settings.
    pub async fn upload_page(&self, now: DateTime<Utc>) -> AppResult<UploadPage> {
        let settings = self.store.read_settings().await?;
        Ok(UploadPage {
            default_file_lifetime: settings.default_file_lifetime,
            expiration_options: owner_options(settings.default_file_lifetime, now),
        })
    }
}
