//! `OwnerAuth` extractor: checks the bearer token against the owner secret.

use axum::extract::FromRequestParts;
use axum::http::header::AUTHORIZATION;
use axum::http::request::Parts;
use tracing::warn;

use ferry_core::error::AppError;

use crate::error::ApiError;
use crate::state::AppState;

/// Proof that the request was made by the owner.
#[derive(Debug, Clone, Copy)]
pub struct OwnerAuth;

impl FromRequestParts<AppState> for OwnerAuth {
    type Rejection = ApiError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let auth_header = parts
            .headers
            .get(AUTHORIZATION)
            .and_then(|v| v.to_str().ok())
            .ok_or_else(|| AppError::unauthorized("Missing Authorization header"))?;

        let token = auth_header
            .strip_prefix("Bearer ")
            .ok_or_else(|| AppError::unauthorized("Invalid Authorization header format"))?;

        if !constant_time_eq(token.as_bytes(), state.config.auth.shared_secret.as_bytes()) {
            warn!(path = %parts.uri.path(), "Rejected owner request with wrong secret");
            return Err(AppError::unauthorized("Invalid credentials").into());
        }

        Ok(OwnerAuth)
    }
}

fn constant_time_eq(a: &[u8], b: &[u8]) -> bool {
    if a.len() != b.len() {
        return false;
    }
    a.iter().zip(b).fold(0u8, |acc, (x, y)| acc | (x ^ y)) == 0
}
