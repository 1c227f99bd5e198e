use axum::extract::Request;
use axum::extract::State;
use axum::http::{self};
use axum::middleware::Next;
use axum::response::IntoResponse;
use axum::response::Response;

use crate::domain::user::models::EmailAddress;
use crate::inbound::http::handlers::ApiError;
use crate::inbound::http::router::AppState;

/// Extension type carrying the authenticated identity through the request.
#[derive(Debug, Clone)]
pub struct AuthenticatedUser {
    pub email: EmailAddress,
    pub issued_at: i64,
    pub expires_at: i64,
}

/// Middleware gating every protected route on a valid access token.
///
/// Whatever goes wrong - missing header, malformed shape, bad signature,
/// expired token, refresh token in the wrong place - the caller sees the
/// same 401; the cause only reaches the logs.
pub async fn authenticate(
    State(state): State<AppState>,
    mut req: Request,
    next: Next,
) -> Result<Response, Response> {
    let token = extract_bearer_token(&req).ok_or_else(unauthorized)?;

    let claims = state
        .authenticator
        .validate_access_token(token)
        .map_err(|e| {
            tracing::debug!("Access token validation failed: {}", e);
            unauthorized()
        })?;

    let email = EmailAddress::new(claims.payload.email).map_err(|e| {
        tracing::debug!("Access token carries an invalid subject: {}", e);
        unauthorized()
    })?;

    req.extensions_mut().insert(AuthenticatedUser {
        email,
        issued_at: claims.iat,
        expires_at: claims.exp,
    });

    Ok(next.run(req).await)
}

fn unauthorized() -> Response {
    ApiError::Unauthorized("Invalid or missing credentials".to_string()).into_response()
}

/// Accepts exactly `Authorization: Bearer <token>`.
fn extract_bearer_token(req: &Request) -> Option<&str> {
    let header = req
        .headers()
        .get(http::header::AUTHORIZATION)?
        .to_str()
        .ok()?;

    header.strip_prefix("Bearer ")
}
