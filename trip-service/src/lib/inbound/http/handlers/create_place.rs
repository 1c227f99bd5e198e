use axum::extract::State;
use axum::http::StatusCode;
use axum::Extension;
use axum::Json;
use serde::Deserialize;

use super::ApiError;
use super::ApiSuccess;
use super::PlaceData;
use crate::domain::place::models::CreatePlace;
use crate::inbound::http::middleware::AuthenticatedUser;
use crate::inbound::http::router::AppState;

pub async fn create_place(
    State(state): State<AppState>,
    Extension(user): Extension<AuthenticatedUser>,
    Json(body): Json<CreatePlaceBody>,
) -> Result<ApiSuccess<PlaceData>, ApiError> {
    state
        .place_service
        .create(&user.email, body.into_command())
        .await
        .map_err(ApiError::from)
        .map(|ref place| ApiSuccess::new(StatusCode::CREATED, place.into()))
}

/// HTTP request body for creating a place (raw JSON)
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct CreatePlaceBody {
    name: String,
    description: Option<String>,
    image_url: Option<String>,
    #[serde(default)]
    is_favourite: bool,
}

impl CreatePlaceBody {
    fn into_command(self) -> CreatePlace {
        CreatePlace {
            name: self.name,
            description: self.description,
            image_url: self.image_url,
            is_favourite: self.is_favourite,
        }
    }
}
