use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;

use super::register::CredentialsBody;
use super::register::TokenPairData;
use super::ApiError;
use super::ApiSuccess;
use crate::domain::user::models::EmailAddress;
use crate::inbound::http::router::AppState;

pub async fn sign_in(
    State(state): State<AppState>,
    Json(body): Json<CredentialsBody>,
) -> Result<ApiSuccess<TokenPairData>, ApiError> {
    let email = EmailAddress::new(body.email)?;

    state
        .auth_service
        .sign_in(email, body.password)
        .await
        .map_err(ApiError::from)
        .map(|ref pair| ApiSuccess::new(StatusCode::OK, pair.into()))
}
