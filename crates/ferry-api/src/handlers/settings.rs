//! Settings handlers.

use axum::Json;
use axum::extract::State;

use ferry_service::settings::SettingsForm;

use crate::dto::response::ApiResponse;
use crate::error::ApiError;
use crate::extractors::OwnerAuth;
use crate::state::AppState;

/// GET /api/settings
pub async fn get_settings(
    State(state): State<AppState>,
    _auth: OwnerAuth,
) -> Result<Json<ApiResponse<SettingsForm>>, ApiError> {
    let form = state.settings_service.form().await?;
    Ok(Json(ApiResponse::ok(form)))
}

/// PUT /api/settings
pub async fn update_settings(
    State(state): State<AppState>,
    _auth: OwnerAuth,
    Json(form): Json<SettingsForm>,
) -> Result<Json<ApiResponse<SettingsForm>>, ApiError> {
    let settings = state.settings_service.update(form).await?;
    Ok(Json(ApiResponse::ok(SettingsForm::from_settings(&settings))))
}
