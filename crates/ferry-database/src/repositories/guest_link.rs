//! Guest link repository implementation.

use chrono::{DateTime, Utc};
use sqlx::{FromRow, PgPool};

use ferry_core::error::{AppError, ErrorKind};
use ferry_core::result::AppResult;
use ferry_core::types::GuestLinkId;
use ferry_entity::{
    CreateGuestLink, ExpirationTime, GuestLink, UploadCountLimit, UploadSizeLimit,
};

use super::{column_to_unsigned, lifetime_from_column, lifetime_to_column, unsigned_to_column};

// The upload count is derived from the entries table so it can never
// drift from what was actually stored.
const SELECT_GUEST_LINKS: &str = "SELECT g.id, g.label, g.created, g.url_expires, \
     g.max_file_lifetime_days, g.max_file_bytes, g.max_file_uploads, \
     (SELECT COUNT(*) FROM entries e WHERE e.guest_link_id = g.id) AS files_uploaded \
     FROM guest_links g";

/// Raw `guest_links` row joined with its upload count.
#[derive(Debug, FromRow)]
struct GuestLinkRow {
    id: String,
    label: Option<String>,
    created: DateTime<Utc>,
    url_expires: Option<DateTime<Utc>>,
    max_file_lifetime_days: Option<i32>,
    max_file_bytes: Option<i64>,
    max_file_uploads: Option<i32>,
    files_uploaded: i64,
}

impl TryFrom<GuestLinkRow> for GuestLink {
    type Error = AppError;

    fn try_from(row: GuestLinkRow) -> Result<Self, Self::Error> {
        let id = GuestLinkId::parse(&row.id).map_err(|e| {
            AppError::database(format!("Stored guest link has bad ID: {}", e.message))
        })?;
        let max_file_bytes: Option<u64> = row
            .max_file_bytes
            .map(|v| column_to_unsigned(v, "guest_links.max_file_bytes"))
            .transpose()?;
        let max_file_uploads: Option<u32> = row
            .max_file_uploads
            .map(|v| column_to_unsigned(v, "guest_links.max_file_uploads"))
            .transpose()?;

        Ok(Self {
            id,
            label: row.label,
            created: row.created,
            url_expires: ExpirationTime::from(row.url_expires),
            max_file_lifetime: lifetime_from_column(
                row.max_file_lifetime_days,
                "guest_links.max_file_lifetime_days",
            )?,
            max_file_bytes: UploadSizeLimit::from(max_file_bytes),
            max_file_uploads: UploadCountLimit::from(max_file_uploads),
            files_uploaded: column_to_unsigned(row.files_uploaded, "files_uploaded")?,
        })
    }
}

/// Repository for guest link records.
#[derive(Debug, Clone)]
pub struct GuestLinkRepository {
    pool: PgPool,
}

impl GuestLinkRepository {
    /// Create a new guest link repository.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Find a guest link by ID.
    pub async fn find_by_id(&self, id: &GuestLinkId) -> AppResult<Option<GuestLink>> {
        let row = sqlx::query_as::<_, GuestLinkRow>(&format!("{SELECT_GUEST_LINKS} WHERE g.id = $1"))
            .bind(id.as_str())
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| {
                AppError::with_source(ErrorKind::Database, "Failed to find guest link", e)
            })?;

        row.map(GuestLink::try_from).transpose()
    }

    /// List every guest link.
    pub async fn find_all(&self) -> AppResult<Vec<GuestLink>> {
        let rows = sqlx::query_as::<_, GuestLinkRow>(&format!(
            "{SELECT_GUEST_LINKS} ORDER BY g.created DESC"
        ))
        .fetch_all(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to list guest links", e))?;

        rows.into_iter().map(GuestLink::try_from).collect()
    }

    /// Insert a new guest link.
    pub async fn create(&self, data: &CreateGuestLink) -> AppResult<GuestLink> {
        let lifetime_days = lifetime_to_column(data.max_file_lifetime, "max_file_lifetime")?;
        let max_bytes: Option<i64> = data
            .max_file_bytes
            .as_max()
            .map(|v| unsigned_to_column(v, "max_file_bytes"))
            .transpose()?;
        let max_uploads: Option<i32> = data
            .max_file_uploads
            .as_max()
            .map(|v| unsigned_to_column(v, "max_file_uploads"))
            .transpose()?;

        sqlx::query(
            "INSERT INTO guest_links (id, label, created, url_expires, max_file_lifetime_days, \
             max_file_bytes, max_file_uploads) VALUES ($1, $2, $3, $4, $5, $6, $7)",
        )
        .bind(data.id.as_str())
        .bind(&data.label)
        .bind(data.created)
        .bind(data.url_expires.as_datetime())
        .bind(lifetime_days)
        .bind(max_bytes)
        .bind(max_uploads)
        .execute(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to create guest link", e))?;

        Ok(GuestLink::from(data.clone()))
    }
}
