//! The storage surface consumed by the service layer.

use std::fmt::Debug;

use async_trait::async_trait;
use sqlx::PgPool;

use ferry_core::config::DatabaseConfig;
use ferry_core::result::AppResult;
use ferry_core::types::{EntryId, GuestLinkId};
use ferry_entity::{CreateGuestLink, DownloadRecord, GuestLink, Settings, UploadMetadata};

use crate::connection::{apply_migrations, open_pool, ping};
use crate::repositories::{
    DownloadRepository, EntryRepository, GuestLinkRepository, SettingsRepository,
};

/// Read and write access to guest links, entries, downloads and settings.
///
/// Lookups by ID return `Ok(None)` for records that do not exist; an `Err`
/// always means the store itself failed. Listings are ordered newest first.
#[async_trait]
pub trait ShareStore: Send + Sync + Debug + 'static {
    /// Look up a guest link, with its current upload count.
    async fn get_guest_link(&self, id: &GuestLinkId) -> AppResult<Option<GuestLink>>;

    /// List every guest link.
    async fn get_guest_links(&self) -> AppResult<Vec<GuestLink>>;

    /// Persist a new guest link.
    async fn insert_guest_link(&self, data: &CreateGuestLink) -> AppResult<GuestLink>;

    /// Read the settings, or the defaults when none were ever stored.
    async fn read_settings(&self) -> AppResult<Settings>;

    /// Replace the stored settings.
    async fn update_settings(&self, settings: &Settings) -> AppResult<()>;

    /// Look up an entry's metadata.
    async fn get_entry_metadata(&self, id: &EntryId) -> AppResult<Option<UploadMetadata>>;

    /// List metadata for every entry.
    async fn get_entries_metadata(&self) -> AppResult<Vec<UploadMetadata>>;

    /// Persist metadata for a newly uploaded entry.
    async fn insert_entry(&self, entry: &UploadMetadata) -> AppResult<()>;

    /// List an entry's download history.
    async fn get_entry_downloads(&self, id: &EntryId) -> AppResult<Vec<DownloadRecord>>;

    /// Append to an entry's download history.
    async fn record_download(&self, id: &EntryId, record: &DownloadRecord) -> AppResult<()>;

    /// Check that the store is reachable.
    async fn health_check(&self) -> AppResult<bool>;
}

/// PostgreSQL-backed [`ShareStore`].
#[derive(Debug, Clone)]
pub struct PgStore {
    pool: PgPool,
    entries: EntryRepository,
    guest_links: GuestLinkRepository,
    downloads: DownloadRepository,
    settings: SettingsRepository,
}

impl PgStore {
    /// Connect to the configured database.
    pub async fn connect(config: &DatabaseConfig) -> AppResult<Self> {
        Ok(Self::new(open_pool(config).await?))
    }

    /// Build the store and its repositories on top of an open pool.
    pub fn new(pool: PgPool) -> Self {
        Self {
            entries: EntryRepository::new(pool.clone()),
            guest_links: GuestLinkRepository::new(pool.clone()),
            downloads: DownloadRepository::new(pool.clone()),
            settings: SettingsRepository::new(pool.clone()),
            pool,
        }
    }

    /// Bring the schema up to date.
    pub async fn migrate(&self) -> AppResult<()> {
        apply_migrations(&self.pool).await
    }
}

#[async_trait]
impl ShareStore for PgStore {
    async fn get_guest_link(&self, id: &GuestLinkId) -> AppResult<Option<GuestLink>> {
        self.guest_links.find_by_id(id).await
    }

    async fn get_guest_links(&self) -> AppResult<Vec<GuestLink>> {
        self.guest_links.find_all().await
    }

    async fn insert_guest_link(&self, data: &CreateGuestLink) -> AppResult<GuestLink> {
        self.guest_links.create(data).await
    }

    async fn read_settings(&self) -> AppResult<Settings> {
        self.settings.read().await
    }

    async fn update_settings(&self, settings: &Settings) -> AppResult<()> {
        self.settings.update(settings).await
    }

    async fn get_entry_metadata(&self, id: &EntryId) -> AppResult<Option<UploadMetadata>> {
        self.entries.find_by_id(id).await
    }

    async fn get_entries_metadata(&self) -> AppResult<Vec<UploadMetadata>> {
        self.entries.find_all().await
    }

    async fn insert_entry(&self, entry: &UploadMetadata) -> AppResult<()> {
        self.entries.create(entry).await
    }

    async fn get_entry_downloads(&self, id: &EntryId) -> AppResult<Vec<DownloadRecord>> {
        self.downloads.find_by_entry(id).await
    }

    async fn record_download(&self, id: &EntryId, record: &DownloadRecord) -> AppResult<()> {
        self.downloads.record(id, record).await
    }

    async fn health_check(&self) -> AppResult<bool> {
        ping(&self.pool).await
    }
}
