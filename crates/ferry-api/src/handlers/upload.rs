//! Owner upload form handler.

use axum::Json;
use axum::extract::State;

use ferry_service::entry::UploadPage;

use crate::dto::response::ApiResponse;
use crate::error::ApiError;
use crate::extractors::OwnerAuth;
use crate::state::AppState;

/// GET /api/upload
pub async fn upload_page(
    State(state): State<AppState>,
    _auth: OwnerAuth,
) -> Result<Json<ApiResponse<UploadPage>>, ApiError> {
    let now = state.clock.now();
    let page = state.entry_service.upload_page(now).await?;
    Ok(Json(ApiResponse::ok(page)))
}
