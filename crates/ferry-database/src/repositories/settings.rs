//! Settings repository implementation.

use sqlx::PgPool;
use tracing::info;

use ferry_core::error::{AppError, ErrorKind};
use ferry_core::result::AppResult;
use ferry_entity::Settings;

use super::{lifetime_from_column, lifetime_to_column};

/// Repository for the singleton settings row.
#[derive(Debug, Clone)]
pub struct SettingsRepository {
    pool: PgPool,
}

impl SettingsRepository {
    /// Create a new settings repository.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Read the settings, falling back to defaults when none are stored.
    pub async fn read(&self) -> AppResult<Settings> {
        let row: Option<(Option<i32>,)> =
            sqlx::query_as("SELECT default_file_lifetime_days FROM settings WHERE id = 1")
                .fetch_optional(&self.pool)
                .await
                .map_err(|e| {
                    AppError::with_source(ErrorKind::Database, "Failed to read settings", e)
                })?;

        match row {
            Some((days,)) => Ok(Settings {
                default_file_lifetime: lifetime_from_column(
                    days,
                    "settings.default_file_lifetime_days",
                )?,
            }),
            None => Ok(Settings::default()),
        }
    }

    /// Store new settings.
    pub async fn update(&self, settings: &Settings) -> AppResult<()> {
        let days = lifetime_to_column(settings.default_file_lifetime, "default_file_lifetime")?;

        sqlx::query(
            "INSERT INTO settings (id, default_file_lifetime_days) VALUES (1, $1) \
             ON CONFLICT (id) DO UPDATE SET default_file_lifetime_days = EXCLUDED.default_file_lifetime_days",
        )
        .bind(days)
        .execute(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to update settings", e))?;

        info!(
            default_file_lifetime = %settings.default_file_lifetime,
            "Settings updated"
        );
        Ok(())
    }
}
