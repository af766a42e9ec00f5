//! Public guest upload page handler.

use axum::Json;
use axum::extract::{Path, State};
use tracing::debug;

use ferry_service::guest::GuestUploadPage;

use crate::dto::response::ApiResponse;
use crate::error::ApiError;
use crate::extractors::parse_guest_link_id;
use crate::state::AppState;

/// GET /api/g/{guest_link_id}
pub async fn guest_upload_page(
    State(state): State<AppState>,
    Path(guest_link_id): Path<String>,
) -> Result<Json<ApiResponse<GuestUploadPage>>, ApiError> {
    let id = parse_guest_link_id(&guest_link_id)?;
    let now = state.clock.now();

    let page = state.guest_link_service.upload_page(&id, now).await?;
    if let GuestUploadPage::Inactive { state: link_state } = &page {
        debug!(guest_link_id = %id, state = ?link_state, "Guest link is inactive");
    }

    Ok(Json(ApiResponse::ok(page)))
}
