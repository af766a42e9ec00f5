//! Entry metadata repository implementation.

use chrono::{DateTime, Utc};
use sqlx::{FromRow, PgPool};

use ferry_core::error::{AppError, ErrorKind};
use ferry_core::result::AppResult;
use ferry_core::types::{EntryId, GuestLinkId};
use ferry_entity::{ExpirationTime, FileSize, UploadMetadata};

use super::{column_to_unsigned, unsigned_to_column};

const SELECT_ENTRIES: &str = "SELECT id, filename, content_type, note, uploaded, expires, \
     size_bytes, guest_link_id FROM entries";

/// Raw `entries` row.
#[derive(Debug, FromRow)]
struct EntryRow {
    id: String,
    filename: String,
    content_type: String,
    note: Option<String>,
    uploaded: DateTime<Utc>,
    expires: Option<DateTime<Utc>>,
    size_bytes: i64,
    guest_link_id: Option<String>,
}

impl TryFrom<EntryRow> for UploadMetadata {
    type Error = AppError;

    fn try_from(row: EntryRow) -> Result<Self, Self::Error> {
        let id = EntryId::parse(&row.id)
            .map_err(|e| AppError::database(format!("Stored entry has bad ID: {}", e.message)))?;
        let guest_link_id = row
            .guest_link_id
            .as_deref()
            .map(GuestLinkId::parse)
            .transpose()
            .map_err(|e| {
                AppError::database(format!("Stored entry has bad guest link ID: {}", e.message))
            })?;

        Ok(Self {
            id,
            filename: row.filename,
            content_type: row.content_type,
            note: row.note,
            uploaded: row.uploaded,
            expires: ExpirationTime::from(row.expires),
            size: FileSize(column_to_unsigned(row.size_bytes, "entries.size_bytes")?),
            guest_link_id,
        })
    }
}

/// Repository for uploaded entry metadata.
#[derive(Debug, Clone)]
pub struct EntryRepository {
    pool: PgPool,
}

impl EntryRepository {
    /// Create a new entry repository.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Find an entry's metadata by ID.
    pub async fn find_by_id(&self, id: &EntryId) -> AppResult<Option<UploadMetadata>> {
        let row = sqlx::query_as::<_, EntryRow>(&format!("{SELECT_ENTRIES} WHERE id = $1"))
            .bind(id.as_str())
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to find entry", e))?;

        row.map(UploadMetadata::try_from).transpose()
    }

    /// List metadata for every stored entry, newest upload first.
    pub async fn find_all(&self) -> AppResult<Vec<UploadMetadata>> {
        let rows = sqlx::query_as::<_, EntryRow>(&format!(
            "{SELECT_ENTRIES} ORDER BY uploaded DESC"
        ))
        .fetch_all(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to list entries", e))?;

        rows.into_iter().map(UploadMetadata::try_from).collect()
    }

    /// Insert entry metadata.
    pub async fn create(&self, entry: &UploadMetadata) -> AppResult<()> {
        let size: i64 = unsigned_to_column(entry.size.bytes(), "size")?;

        sqlx::query(
            "INSERT INTO entries (id, filename, content_type, note, uploaded, expires, \
             size_bytes, guest_link_id) VALUES ($1, $2, $3, $4, $5, $6, $7, $8)",
        )
        .bind(entry.id.as_str())
        .bind(&entry.filename)
        .bind(&entry.content_type)
        .bind(&entry.note)
        .bind(entry.uploaded)
        .bind(entry.expires.as_datetime())
        .bind(size)
        .bind(entry.guest_link_id.as_ref().map(|id| id.as_str().to_string()))
        .execute(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to create entry", e))?;

        Ok(())
    }
}
