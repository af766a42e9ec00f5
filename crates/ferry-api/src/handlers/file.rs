//! File index, file information and download history handlers.

use axum::Json;
use axum::extract::{Path, Query, State};

use ferry_service::entry::EntryInfo;
use ferry_service::format::{format_expiration, human_readable_size};

use crate::dto::request::DownloadsQuery;
use crate::dto::response::{ApiResponse, FileListItem};
use crate::error::ApiError;
use crate::extractors::{OwnerAuth, parse_entry_id};
use crate::state::AppState;

/// GET /api/files
pub async fn list_files(
    State(state): State<AppState>,
    _auth: OwnerAuth,
) -> Result<Json<ApiResponse<Vec<FileListItem>>>, ApiError> {
    let now = state.clock.now();
    let entries = state.entry_service.index().await?;

    let items = entries
        .into_iter()
        .map(|entry| FileListItem {
            size_label: human_readable_size(entry.size.bytes()),
            expires_label: format_expiration(entry.expires, now),
            entry,
        })
        .collect();

    Ok(Json(ApiResponse::ok(items)))
}

/// GET /api/files/{id}
pub async fn get_file(
    State(state): State<AppState>,
    _auth: OwnerAuth,
    Path(id): Path<String>,
) -> Result<Json<ApiResponse<EntryInfo>>, ApiError> {
    let id = parse_entry_id(&id)?;
    let info = state.entry_service.info(&id).await?;
    Ok(Json(ApiResponse::ok(info)))
}

/// GET /api/files/{id}/downloads
pub async fn file_downloads(
    State(state): State<AppState>,
    _auth: OwnerAuth,
    Path(id): Path<String>,
    Query(query): Query<DownloadsQuery>,
) -> Result<Json<serde_json::Value>, ApiError> {
    let id = parse_entry_id(&id)?;
    let view = state.download_service.history(&id, query.unique).await?;
    Ok(Json(serde_json::json!({ "success": true, "data": view })))
}
