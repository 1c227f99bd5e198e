use async_trait::async_trait;

use crate::domain::user::errors::UserError;
use crate::domain::user::models::NewUser;
use crate::domain::user::models::User;
use crate::domain::user::models::UserId;

/// Persistence operations for the credential store.
#[async_trait]
pub trait UserRepository: Send + Sync + 'static {
    /// Persist a new user.
    ///
    /// # Errors
    /// * `EmailAlreadyExists` - Email is already registered
    /// * `DatabaseError` - Database operation failed
    async fn create(&self, user: NewUser) -> Result<User, UserError>;

    /// Retrieve a user by email address.
    ///
    /// # Errors
    /// * `DatabaseError` - Database operation failed
    async fn find_by_email(&self, email: &str) -> Result<Option<User>, UserError>;

    /// Retrieve the user currently holding the given refresh token.
    ///
    /// # Errors
    /// * `DatabaseError` - Database operation failed
    async fn find_by_refresh_token(&self, refresh_token: &str)
        -> Result<Option<User>, UserError>;

    /// Store or clear a user's refresh token. Clearing revokes every future
    /// refresh with the previously stored token.
    ///
    /// # Errors
    /// * `NotFound` - User does not exist
    /// * `DatabaseError` - Database operation failed
    async fn set_refresh_token(
        &self,
        id: UserId,
        refresh_token: Option<&str>,
    ) -> Result<(), UserError>;
}
