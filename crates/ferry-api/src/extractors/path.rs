//! Typed path parameter helpers.

use ferry_core::error::AppError;
use ferry_core::types::{EntryId, GuestLinkId};

/// Parses an entry ID from a path segment.
pub fn parse_entry_id(s: &str) -> Result<EntryId, AppError> {
    EntryId::parse(s).map_err(|e| AppError::validation(format!("Invalid entry ID: {}", e.message)))
}

/// Parses a guest link ID from a path segment.
pub fn parse_guest_link_id(s: &str) -> Result<GuestLinkId, AppError> {
    GuestLinkId::parse(s)
        .map_err(|e| AppError::validation(format!("Invalid guest link ID: {}", e.message)))
}
