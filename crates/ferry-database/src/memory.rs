//! In-process [`ShareStore`] used by tests and local experiments.

use std::collections::HashMap;

use async_trait::async_trait;
use tokio::sync::RwLock;

use ferry_core::error::AppError;
use ferry_core::result::AppResult;
use ferry_core::types::{EntryId, GuestLinkId};
use ferry_entity::{CreateGuestLink, DownloadRecord, GuestLink, Settings, UploadMetadata};

use crate::store::ShareStore;

#[derive(Debug, Default)]
struct Tables {
    guest_links: HashMap<GuestLinkId, GuestLink>,
    entries: HashMap<EntryId, UploadMetadata>,
    downloads: HashMap<EntryId, Vec<DownloadRecord>>,
    settings: Option<Settings>,
}

impl Tables {
    fn uploads_through(&self, id: &GuestLinkId) -> u32 {
        let count = self
            .entries
            .values()
            .filter(|e| e.guest_link_id.as_ref() == Some(id))
            .count();
        u32::try_from(count).unwrap_or(u32::MAX)
    }

    fn with_upload_count(&self, link: &GuestLink) -> GuestLink {
        GuestLink {
            files_uploaded: self.uploads_through(&link.id),
            ..link.clone()
        }
    }
}

/// A [`ShareStore`] that keeps everything in memory.
///
/// Mirrors the PostgreSQL store's constraints: duplicate IDs and
/// references to missing records are rejected, and guest link upload
/// counts are derived from the stored entries.
#[derive(Debug, Default)]
pub struct MemoryStore {
    tables: RwLock<Tables>,
}

impl MemoryStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl ShareStore for MemoryStore {
    async fn get_guest_link(&self, id: &GuestLinkId) -> AppResult<Option<GuestLink>> {
        let tables = self.tables.read().await;
        Ok(tables
            .guest_links
            .get(id)
            .map(|link| tables.with_upload_count(link)))
    }

    async fn get_guest_links(&self) -> AppResult<Vec<GuestLink>> {
        let tables = self.tables.read().await;
        let mut links: Vec<GuestLink> = tables
            .guest_links
            .values()
            .map(|link| tables.with_upload_count(link))
            .collect();
        links.sort_by(|a, b| b.created.cmp(&a.created));
        Ok(links)
    }

    async fn insert_guest_link(&self, data: &CreateGuestLink) -> AppResult<GuestLink> {
        let mut tables = self.tables.write().await;
        if tables.guest_links.contains_key(&data.id) {
            return Err(AppError::database(format!(
                "Guest link {} already exists",
                data.id
            )));
        }
        let link = GuestLink::from(data.clone());
        tables.guest_links.insert(link.id.clone(), link.clone());
        Ok(link)
    }

    async fn read_settings(&self) -> AppResult<Settings> {
        Ok(self.tables.read().await.settings.unwrap_or_default())
    }

    async fn update_settings(&self, settings: &Settings) -> AppResult<()> {
        self.tables.write().await.settings = Some(*settings);
        Ok(())
    }

    async fn get_entry_metadata(&self, id: &EntryId) -> AppResult<Option<UploadMetadata>> {
        Ok(self.tables.read().await.entries.get(id).cloned())
    }

    async fn get_entries_metadata(&self) -> AppResult<Vec<UploadMetadata>> {
        let mut entries: Vec<UploadMetadata> =
            self.tables.read().await.entries.values().cloned().collect();
        entries.sort_by(|a, b| b.uploaded.cmp(&a.uploaded));
        Ok(entries)
    }

    async fn insert_entry(&self, entry: &UploadMetadata) -> AppResult<()> {
        let mut tables = self.tables.write().await;
        if tables.entries.contains_key(&entry.id) {
            return Err(AppError::database(format!(
                "Entry {} already exists",
                entry.id
            )));
        }
        if let Some(link_id) = &entry.guest_link_id {
            if !tables.guest_links.contains_key(link_id) {
                return Err(AppError::database(format!(
                    "Entry references unknown guest link {link_id}"
                )));
            }
        }
        tables.entries.insert(entry.id.clone(), entry.clone());
        Ok(())
    }

    async fn get_entry_downloads(&self, id: &EntryId) -> AppResult<Vec<DownloadRecord>> {
        let tables = self.tables.read().await;
        let mut downloads: Vec<DownloadRecord> = tables
            .downloads
            .get(id)
            .map(|list| list.iter().rev().cloned().collect())
            .unwrap_or_default();
        // Stable, so equal timestamps keep latest-recorded first.
        downloads.sort_by(|a, b| b.time.cmp(&a.time));
        Ok(downloads)
    }

    async fn record_download(&self, id: &EntryId, record: &DownloadRecord) -> AppResult<()> {
        let mut tables = self.tables.write().await;
        if !tables.entries.contains_key(id) {
            return Err(AppError::database(format!(
                "Download references unknown entry {id}"
            )));
        }
        tables
            .downloads
            .entry(id.clone())
            .or_default()
            .push(record.clone());
        Ok(())
    }

    async fn health_check(&self) -> AppResult<bool> {
        Ok(true)
    }
}
