use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use serde::Deserialize;
use serde::Serialize;

use super::ApiError;
use super::ApiSuccess;
use crate::inbound::http::router::AppState;

pub async fn refresh_token(
    State(state): State<AppState>,
    Json(body): Json<RefreshTokenBody>,
) -> Result<ApiSuccess<AccessTokenData>, ApiError> {
    state
        .auth_service
        .refresh_access_token(&body.refresh_token)
        .await
        .map_err(ApiError::from)
        .map(|access_token| ApiSuccess::new(StatusCode::OK, AccessTokenData { access_token }))
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct RefreshTokenBody {
    pub refresh_token: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AccessTokenData {
    pub access_token: String,
}
