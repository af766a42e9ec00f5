//! Opening the Ferry database and bringing its schema up to date.

use std::time::Duration;

use sqlx::migrate::Migrator;
use sqlx::postgres::{PgPool, PgPoolOptions};
use tracing::{debug, info};

use ferry_core::config::DatabaseConfig;
use ferry_core::error::{AppError, ErrorKind};
use ferry_core::result::AppResult;

/// The guest link, entry, download and settings tables.
static MIGRATOR: Migrator = sqlx::migrate!("../../migrations");

/// Open a pool against the configured database.
pub(crate) async fn open_pool(config: &DatabaseConfig) -> AppResult<PgPool> {
    info!(
        target = %connection_target(&config.url),
        max_connections = config.max_connections,
        "Opening Ferry database"
    );

    PgPoolOptions::new()
        .max_connections(config.max_connections)
        .min_connections(config.min_connections)
        .acquire_timeout(Duration::from_secs(config.connect_timeout_seconds))
        .idle_timeout(Duration::from_secs(config.idle_timeout_seconds))
        .connect(&config.url)
        .await
        .map_err(|e| {
            AppError::with_source(
                ErrorKind::Database,
                format!("Cannot open database at {}", connection_target(&config.url)),
                e,
            )
        })
}

/// Apply any schema migrations the database has not seen yet.
pub(crate) async fn apply_migrations(pool: &PgPool) -> AppResult<()> {
    debug!(known = MIGRATOR.iter().count(), "Applying schema migrations");
    MIGRATOR.run(pool).await.map_err(|e| {
        AppError::with_source(ErrorKind::Database, "Schema migration failed", e)
    })?;
    info!("Database schema is up to date");
    Ok(())
}

/// Round-trip a trivial query.
pub(crate) async fn ping(pool: &PgPool) -> AppResult<bool> {
    sqlx::query_scalar::<_, i32>("SELECT 1")
        .fetch_one(pool)
        .await
        .map(|v| v == 1)
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Database ping failed", e))
}

/// The host, port and database of a connection URL, without credentials.
fn connection_target(url: &str) -> &str {
    let rest = url.split_once("://").map_or(url, |(_, rest)| rest);
    rest.rsplit_once('@').map_or(rest, |(_, host)| host)
}
