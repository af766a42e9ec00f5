//! Download history repository implementation.

use sqlx::PgPool;

use ferry_core::error::{AppError, ErrorKind};
use ferry_core::result::AppResult;
use ferry_core::types::EntryId;
use ferry_entity::DownloadRecord;

/// Repository for the append-only download log.
#[derive(Debug, Clone)]
pub struct DownloadRepository {
    pool: PgPool,
}

impl DownloadRepository {
    /// Create a new download repository.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// List an entry's downloads, most recent first.
    pub async fn find_by_entry(&self, entry_id: &EntryId) -> AppResult<Vec<DownloadRecord>> {
        sqlx::query_as::<_, DownloadRecord>(
            "SELECT downloaded_at AS time, client_ip, user_agent FROM downloads \
             WHERE entry_id = $1 ORDER BY downloaded_at DESC, id DESC",
        )
        .bind(entry_id.as_str())
        .fetch_all(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to list downloads", e))
    }

    /// Append a download to an entry's history.
    pub async fn record(&self, entry_id: &EntryId, record: &DownloadRecord) -> AppResult<()> {
        sqlx::query(
            "INSERT INTO downloads (entry_id, downloaded_at, client_ip, user_agent) \
             VALUES ($1, $2, $3, $4)",
        )
        .bind(entry_id.as_str())
        .bind(record.time)
        .bind(&record.client_ip)
        .bind(&record.user_agent)
        .execute(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to record download", e))?;

        Ok(())
    }
}
