use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use serde::Deserialize;
use serde::Serialize;

use super::ApiError;
use super::ApiSuccess;
use crate::domain::auth::models::TokenPair;
use crate::domain::user::models::EmailAddress;
use crate::inbound::http::router::AppState;

pub async fn register(
    State(state): State<AppState>,
    Json(body): Json<CredentialsBody>,
) -> Result<ApiSuccess<TokenPairData>, ApiError> {
    let email = EmailAddress::new(body.email)?;

    state
        .auth_service
        .register(email, body.password)
        .await
        .map_err(ApiError::from)
        .map(|ref pair| ApiSuccess::new(StatusCode::CREATED, pair.into()))
}

/// HTTP request body shared by registration and login.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct CredentialsBody {
    pub email: String,
    pub password: String,
}

/// Response body carrying both token classes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TokenPairData {
    pub access_token: String,
    pub refresh_token: String,
}

impl From<&TokenPair> for TokenPairData {
    fn from(pair: &TokenPair) -> Self {
        Self {
            access_token: pair.access_token.clone(),
            refresh_token: pair.refresh_token.clone(),
        }
    }
}
