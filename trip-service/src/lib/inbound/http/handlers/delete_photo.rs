use axum::extract::Path;
use axum::extract::State;
use axum::http::StatusCode;

use super::ApiError;
use crate::inbound::http::router::AppState;

pub async fn delete_photo(
    State(state): State<AppState>,
    Path(filename): Path<String>,
) -> Result<StatusCode, ApiError> {
    state
        .photo_service
        .delete(&filename)
        .map_err(ApiError::from)
        .map(|_| StatusCode::NO_CONTENT)
}
