use std::sync::Arc;

use async_trait::async_trait;
use auth::Authenticator;

use crate::domain::auth::errors::AuthError;
use crate::domain::auth::models::TokenPair;
use crate::domain::auth::ports::AuthServicePort;
use crate::domain::user::models::EmailAddress;
use crate::domain::user::models::NewUser;
use crate::domain::user::models::User;
use crate::domain::user::ports::UserRepository;

/// Domain service implementation for authentication flows.
///
/// Combines the credential store with password hashing and the two token
/// classes from the auth library.
pub struct AuthService<UR>
where
    UR: UserRepository,
{
    users: Arc<UR>,
    authenticator: Arc<Authenticator>,
}

impl<UR> AuthService<UR>
where
    UR: UserRepository,
{
    /// Create a new auth service with injected dependencies.
    pub fn new(users: Arc<UR>, authenticator: Arc<Authenticator>) -> Self {
        Self {
            users,
            authenticator,
        }
    }

    /// Return the user's long-lived session token, minting and persisting
    /// one only when none is stored. Reuse keeps one session across
    /// repeated logins; clearing the stored copy revokes it server-side.
    async fn obtain_refresh_token(&self, user: &User) -> Result<String, AuthError> {
        if let Some(token) = &user.refresh_token {
            return Ok(token.clone());
        }

        let token = self.authenticator.issue_refresh_token()?;
        self.users.set_refresh_token(user.id, Some(&token)).await?;

        Ok(token)
    }
}

#[async_trait]
impl<UR> AuthServicePort for AuthService<UR>
where
    UR: UserRepository,
{
    async fn register(
        &self,
        email: EmailAddress,
        password: String,
    ) -> Result<TokenPair, AuthError> {
        if self.users.find_by_email(email.as_str()).await?.is_some() {
            return Err(AuthError::EmailAlreadyExists(email.as_str().to_string()));
        }

        let hashed_password = self.authenticator.hash_password(&password)?;

        let user = self
            .users
            .create(NewUser {
                email,
                hashed_password,
            })
            .await?;

        let refresh_token = self.obtain_refresh_token(&user).await?;
        let access_token = self.authenticator.issue_access_token(user.email.as_str())?;

        Ok(TokenPair {
            access_token,
            refresh_token,
        })
    }

    async fn sign_in(&self, email: EmailAddress, password: String) -> Result<TokenPair, AuthError> {
        let user = self
            .users
            .find_by_email(email.as_str())
            .await?
            .ok_or_else(|| AuthError::UserNotFound(email.as_str().to_string()))?;

        if !self
            .authenticator
            .verify_password(&password, &user.hashed_password)
        {
            return Err(AuthError::WrongPassword);
        }

        let refresh_token = self.obtain_refresh_token(&user).await?;
        let access_token = self.authenticator.issue_access_token(user.email.as_str())?;

        Ok(TokenPair {
            access_token,
            refresh_token,
        })
    }

    async fn refresh_access_token(&self, refresh_token: &str) -> Result<String, AuthError> {
        self.authenticator
            .validate_refresh_token(refresh_token)
            .map_err(|e| {
                tracing::debug!("Refresh token validation failed: {}", e);
                AuthError::InvalidRefreshToken
            })?;

        // A cryptographically valid token is still useless unless it is the
        // one currently stored for some user (rotation/revocation).
        let user = self
            .users
            .find_by_refresh_token(refresh_token)
            .await?
            .ok_or(AuthError::InvalidRefreshToken)?;

        Ok(self.authenticator.issue_access_token(user.email.as_str())?)
    }
}
