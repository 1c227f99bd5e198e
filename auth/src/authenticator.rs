use chrono::Duration;

use crate::jwt::AccessClaims;
use crate::jwt::JwtError;
use crate::jwt::JwtHandler;
use crate::jwt::RefreshClaims;
use crate::jwt::TimedClaims;
use crate::password::PasswordError;
use crate::password::PasswordHasher;

/// Secret and lifetime of one token class.
#[derive(Debug, Clone, Copy)]
pub struct TokenPolicy<'a> {
    pub secret: &'a [u8],
    pub ttl: Duration,
}

/// Authentication coordinator combining password verification and the two
/// token classes.
///
/// Access and refresh tokens carry distinct secrets and lifetimes, so a
/// token issued as one class is rejected by the validator of the other.
pub struct Authenticator {
    password_hasher: PasswordHasher,
    access_tokens: JwtHandler,
    refresh_tokens: JwtHandler,
}

impl Authenticator {
    /// Create a new authenticator.
    ///
    /// # Arguments
    /// * `access` - Secret and time-to-live for access tokens
    /// * `refresh` - Secret and time-to-live for refresh tokens
    /// * `work_factor` - Optional password-hashing iteration count
    pub fn new(access: TokenPolicy<'_>, refresh: TokenPolicy<'_>, work_factor: Option<u32>) -> Self {
        Self {
            password_hasher: PasswordHasher::new(work_factor),
            access_tokens: JwtHandler::new(access.secret, access.ttl),
            refresh_tokens: JwtHandler::new(refresh.secret, refresh.ttl),
        }
    }

    /// Hash a password for storage.
    ///
    /// # Errors
    /// * `PasswordError` - Hashing operation failed
    pub fn hash_password(&self, password: &str) -> Result<String, PasswordError> {
        self.password_hasher.hash(password)
    }

    /// Verify a password against a stored hash.
    ///
    /// Malformed stored hashes count as a mismatch.
    pub fn verify_password(&self, password: &str, stored_hash: &str) -> bool {
        self.password_hasher.verify(password, stored_hash)
    }

    /// Issue a short-lived access token for the given subject.
    ///
    /// # Errors
    /// * `JwtError` - Token generation failed
    pub fn issue_access_token(&self, email: &str) -> Result<String, JwtError> {
        self.access_tokens.encode(AccessClaims {
            email: email.to_string(),
        })
    }

    /// Issue a long-lived refresh token with an empty payload.
    ///
    /// # Errors
    /// * `JwtError` - Token generation failed
    pub fn issue_refresh_token(&self) -> Result<String, JwtError> {
        self.refresh_tokens.encode(RefreshClaims::default())
    }

    /// Validate and decode an access token.
    ///
    /// # Errors
    /// * `JwtError` - Token validation or decoding failed
    pub fn validate_access_token(
        &self,
        token: &str,
    ) -> Result<TimedClaims<AccessClaims>, JwtError> {
        self.access_tokens.decode(token)
    }

    /// Validate and decode a refresh token.
    ///
    /// # Errors
    /// * `JwtError` - Token validation or decoding failed
    pub fn validate_refresh_token(
        &self,
        token: &str,
    ) -> Result<TimedClaims<RefreshClaims>, JwtError> {
        self.refresh_tokens.decode(token)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_authenticator() -> Authenticator {
        Authenticator::new(
            TokenPolicy {
                secret: b"test_access_secret_at_least_32_bytes!",
                ttl: Duration::minutes(15),
            },
            TokenPolicy {
                secret: b"test_refresh_secret_at_least_32_bytes",
                ttl: Duration::days(7),
            },
            None,
        )
    }

    #[test]
    fn test_password_round_trip() {
        let authenticator = test_authenticator();

        let hash = authenticator
            .hash_password("my_password")
            .expect("Failed to hash password");

        assert!(authenticator.verify_password("my_password", &hash));
        assert!(!authenticator.verify_password("wrong_password", &hash));
    }

    #[test]
    fn test_access_token_round_trip() {
        let authenticator = test_authenticator();

        let token = authenticator
            .issue_access_token("alice@example.com")
            .expect("Failed to issue token");

        let claims = authenticator
            .validate_access_token(&token)
            .expect("Token validation failed");
        assert_eq!(claims.payload.email, "alice@example.com");
        assert_eq!(claims.exp - claims.iat, 15 * 60);
    }

    #[test]
    fn test_token_classes_are_not_interchangeable() {
        let authenticator = test_authenticator();

        let access = authenticator
            .issue_access_token("alice@example.com")
            .expect("Failed to issue token");
        let refresh = authenticator
            .issue_refresh_token()
            .expect("Failed to issue token");

        assert!(authenticator.validate_access_token(&refresh).is_err());
        assert!(authenticator.validate_refresh_token(&access).is_err());
    }

    #[test]
    fn test_validate_garbage_token() {
        let authenticator = test_authenticator();

        assert!(authenticator
            .validate_access_token("invalid.token.here")
            .is_err());
        assert!(authenticator.validate_refresh_token("").is_err());
    }
}
