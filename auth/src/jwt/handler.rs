use chrono::Duration;
use jsonwebtoken::decode;
use jsonwebtoken::encode;
use jsonwebtoken::errors::ErrorKind;
use jsonwebtoken::Algorithm;
use jsonwebtoken::DecodingKey;
use jsonwebtoken::EncodingKey;
use jsonwebtoken::Header;
use jsonwebtoken::Validation;
use serde::de::DeserializeOwned;
use serde::Serialize;

use super::claims::TimedClaims;
use super::errors::JwtError;

/// JWT token handler for one token class.
///
/// Holds the secret and time-to-live of a single class (access or refresh);
/// the two classes of the system each get their own handler so that tokens
/// are never interchangeable. Uses HS256 (HMAC with SHA-256).
pub struct JwtHandler {
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
    algorithm: Algorithm,
    ttl: Duration,
}

impl JwtHandler {
    /// Create a new JWT handler.
    ///
    /// # Arguments
    /// * `secret` - Secret key for signing tokens (should be stored securely)
    /// * `ttl` - Lifetime applied to every token this handler issues
    ///
    /// # Security Notes
    /// - The secret should be at least 256 bits (32 bytes) for HS256
    /// - Store secrets in environment variables or secure vaults, never in code
    pub fn new(secret: &[u8], ttl: Duration) -> Self {
        Self {
            encoding_key: EncodingKey::from_secret(secret),
            decoding_key: DecodingKey::from_secret(secret),
            algorithm: Algorithm::HS256,
            ttl,
        }
    }

    /// Encode a payload into a signed token carrying issued-at and expiry.
    ///
    /// # Errors
    /// * `EncodingFailed` - Token encoding failed
    pub fn encode<T: Serialize>(&self, payload: T) -> Result<String, JwtError> {
        let header = Header::new(self.algorithm);
        let claims = TimedClaims::new(payload, self.ttl);

        encode(&header, &claims, &self.encoding_key)
            .map_err(|e| JwtError::EncodingFailed(e.to_string()))
    }

    /// Decode and validate a token of this class.
    ///
    /// # Errors
    /// * `TokenExpired` - The expiry timestamp has passed
    /// * `InvalidToken` - Signature mismatch, malformed structure, or a
    ///   payload that does not match this class
    pub fn decode<T: DeserializeOwned>(&self, token: &str) -> Result<TimedClaims<T>, JwtError> {
        let validation = Validation::new(self.algorithm);

        let token_data =
            decode::<TimedClaims<T>>(token, &self.decoding_key, &validation).map_err(|e| {
                match e.kind() {
                    ErrorKind::ExpiredSignature => JwtError::TokenExpired,
                    _ => JwtError::InvalidToken(e.to_string()),
                }
            })?;

        Ok(token_data.claims)
    }
}
