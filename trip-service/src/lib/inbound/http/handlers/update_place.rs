use axum::extract::Path;
use axum::extract::State;
use axum::http::StatusCode;
use axum::Extension;
use axum::Json;
use serde::Deserialize;

use super::ApiError;
use super::ApiSuccess;
use super::PlaceData;
use crate::domain::place::models::PlaceId;
use crate::domain::place::models::UpdatePlace;
use crate::inbound::http::middleware::AuthenticatedUser;
use crate::inbound::http::router::AppState;

pub async fn update_place(
    State(state): State<AppState>,
    Extension(user): Extension<AuthenticatedUser>,
    Path(id): Path<i64>,
    Json(body): Json<UpdatePlaceBody>,
) -> Result<ApiSuccess<PlaceData>, ApiError> {
    state
        .place_service
        .update(&user.email, PlaceId(id), body.into_command())
        .await
        .map_err(ApiError::from)
        .map(|ref place| ApiSuccess::new(StatusCode::OK, place.into()))
}

/// HTTP request body for updating a place; absent fields stay untouched.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct UpdatePlaceBody {
    name: Option<String>,
    description: Option<String>,
    image_url: Option<String>,
    is_favourite: Option<bool>,
}

impl UpdatePlaceBody {
    fn into_command(self) -> UpdatePlace {
        UpdatePlace {
            name: self.name,
            description: self.description,
            image_url: self.image_url,
            is_favourite: self.is_favourite,
        }
    }
}
