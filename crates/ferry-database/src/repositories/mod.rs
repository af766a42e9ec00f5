//! Per-table repositories backed by PostgreSQL.
//!
//! Each repository reads raw rows and converts them into entity types.
//! A NULL day count means an infinite lifetime; a NULL timestamp means the
//! record never expires.

pub mod download;
pub mod entry;
pub mod guest_link;
pub mod settings;

pub use download::DownloadRepository;
pub use entry::EntryRepository;
pub use guest_link::GuestLinkRepository;
pub use settings::SettingsRepository;

use ferry_core::error::AppError;
use ferry_entity::FileLifetime;

/// Convert a stored, signed column value into its unsigned domain value.
pub(crate) fn column_to_unsigned<S, U>(value: S, column: &str) -> Result<U, AppError>
where
    S: Copy + std::fmt::Display,
    U: TryFrom<S>,
{
    U::try_from(value)
        .map_err(|_| AppError::database(format!("Column {column} holds out-of-range value {value}")))
}

/// Convert an unsigned domain value into a signed column value.
pub(crate) fn unsigned_to_column<U, S>(value: U, column: &str) -> Result<S, AppError>
where
    U: Copy + std::fmt::Display,
    S: TryFrom<U>,
{
    S::try_from(value)
        .map_err(|_| AppError::validation(format!("{column} value {value} is too large to store")))
}

/// Decode a nullable day-count column.
pub(crate) fn lifetime_from_column(days: Option<i32>, column: &str) -> Result<FileLifetime, AppError> {
    match days {
        Some(days) => Ok(FileLifetime::from_days(column_to_unsigned(days, column)?)),
        None => Ok(FileLifetime::Infinite),
    }
}

/// Encode a lifetime as a nullable day-count column.
pub(crate) fn lifetime_to_column(lifetime: FileLifetime, column: &str) -> Result<Option<i32>, AppError> {
    lifetime
        .days()
        .map(|days| unsigned_to_column(days, column))
        .transpose()
}
