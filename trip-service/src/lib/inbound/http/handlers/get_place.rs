use axum::extract::Path;
use axum::extract::State;
use axum::http::StatusCode;
use axum::Extension;

use super::ApiError;
use super::ApiSuccess;
use super::PlaceData;
use crate::domain::place::models::PlaceId;
use crate::inbound::http::middleware::AuthenticatedUser;
use crate::inbound::http::router::AppState;

pub async fn get_place(
    State(state): State<AppState>,
    Extension(user): Extension<AuthenticatedUser>,
    Path(id): Path<i64>,
) -> Result<ApiSuccess<PlaceData>, ApiError> {
    state
        .place_service
        .get(&user.email, PlaceId(id))
        .await
        .map_err(ApiError::from)
        .map(|ref place| ApiSuccess::new(StatusCode::OK, place.into()))
}
