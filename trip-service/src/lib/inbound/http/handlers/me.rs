use axum::http::StatusCode;
use axum::Extension;
use serde::Serialize;

use super::ApiSuccess;
use crate::inbound::http::middleware::AuthenticatedUser;

/// Echo the identity the guard attached for this request.
pub async fn me(Extension(user): Extension<AuthenticatedUser>) -> ApiSuccess<MeData> {
    ApiSuccess::new(
        StatusCode::OK,
        MeData {
            email: user.email.to_string(),
            iat: user.issued_at,
            exp: user.expires_at,
        },
    )
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MeData {
    pub email: String,
    pub iat: i64,
    pub exp: i64,
}
