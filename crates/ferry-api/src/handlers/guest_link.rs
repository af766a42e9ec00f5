//! Guest link management handlers.

use axum::Json;
use axum::extract::State;
use axum::http::StatusCode;

use ferry_service::format::{format_count_limit, format_expiration, format_size_limit};
use ferry_service::guest::{CreateGuestLinkRequest, GuestLinkForm};

use crate::dto::response::{ApiResponse, GuestLinkListItem};
use crate::error::ApiError;
use crate::extractors::OwnerAuth;
use crate::state::AppState;

/// GET /api/guest-links
pub async fn list_guest_links(
    State(state): State<AppState>,
    _auth: OwnerAuth,
) -> Result<Json<ApiResponse<Vec<GuestLinkListItem>>>, ApiError> {
    let now = state.clock.now();
    let links = state.guest_link_service.list(now).await?;

    let items = links
        .into_iter()
        .map(|summary| GuestLinkListItem {
            url_expires_label: format_expiration(summary.guest_link.url_expires, now),
            max_file_bytes_label: format_size_limit(summary.guest_link.max_file_bytes),
            max_file_uploads_label: format_count_limit(summary.guest_link.max_file_uploads),
            summary,
        })
        .collect();

    Ok(Json(ApiResponse::ok(items)))
}

/// GET /api/guest-links/new
pub async fn new_guest_link_form(
    State(state): State<AppState>,
    _auth: OwnerAuth,
) -> Json<ApiResponse<GuestLinkForm>> {
    let now = state.clock.now();
    Json(ApiResponse::ok(state.guest_link_service.new_form(now)))
}

/// POST /api/guest-links
pub async fn create_guest_link(
    State(state): State<AppState>,
    _auth: OwnerAuth,
    Json(req): Json<CreateGuestLinkRequest>,
) -> Result<(StatusCode, Json<serde_json::Value>), ApiError> {
    let now = state.clock.now();
    let link = state.guest_link_service.create(req, now).await?;
    Ok((
        StatusCode::CREATED,
        Json(serde_json::json!({ "success": true, "data": link })),
    ))
}
