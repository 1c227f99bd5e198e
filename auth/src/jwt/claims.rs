use chrono::Duration;
use chrono::Utc;
use serde::Deserialize;
use serde::Serialize;

/// Envelope wrapping a token payload with issued-at and expiry timestamps.
///
/// The payload is flattened into the token body, so an access token encodes
/// as `{"email": ..., "iat": ..., "exp": ...}`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct TimedClaims<T> {
    #[serde(flatten)]
    pub payload: T,

    /// Issued at (Unix timestamp)
    pub iat: i64,

    /// Expiration time (Unix timestamp)
    pub exp: i64,
}

impl<T> TimedClaims<T> {
    /// Stamp a payload with the current time and a time-to-live.
    pub fn new(payload: T, ttl: Duration) -> Self {
        let now = Utc::now();

        Self {
            payload,
            iat: now.timestamp(),
            exp: (now + ttl).timestamp(),
        }
    }
}

/// Payload of an access token: the authenticated subject's email.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct AccessClaims {
    pub email: String,
}

/// Payload of a refresh token.
///
/// Deliberately empty: the server-side stored copy, not the token body,
/// identifies the owning user.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct RefreshClaims {}
