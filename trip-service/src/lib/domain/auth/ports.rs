use async_trait::async_trait;

use crate::domain::auth::errors::AuthError;
use crate::domain::auth::models::TokenPair;
use crate::domain::user::models::EmailAddress;

/// Port for authentication flows.
#[async_trait]
pub trait AuthServicePort: Send + Sync + 'static {
    /// Register a new account and open a session.
    ///
    /// # Returns
    /// Access and refresh tokens for the new user
    ///
    /// # Errors
    /// * `EmailAlreadyExists` - Email is already registered
    /// * `Database` - Credential store operation failed
    async fn register(&self, email: EmailAddress, password: String)
        -> Result<TokenPair, AuthError>;

    /// Authenticate an existing account.
    ///
    /// Reuses the stored refresh token when one exists, so repeated logins
    /// keep a single long-lived session; a fresh access token is always
    /// minted.
    ///
    /// # Errors
    /// * `UserNotFound` - No account with this email
    /// * `WrongPassword` - Password verification failed
    /// * `Database` - Credential store operation failed
    async fn sign_in(&self, email: EmailAddress, password: String)
        -> Result<TokenPair, AuthError>;

    /// Exchange a refresh token for a new access token.
    ///
    /// # Errors
    /// * `InvalidRefreshToken` - Token fails verification, or no user
    ///   currently stores it (rotated or revoked)
    /// * `Database` - Credential store operation failed
    async fn refresh_access_token(&self, refresh_token: &str) -> Result<String, AuthError>;
}
