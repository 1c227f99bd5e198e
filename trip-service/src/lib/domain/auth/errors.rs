use thiserror::Error;

use crate::domain::user::errors::UserError;

/// Top-level error for authentication flows
#[derive(Debug, Clone, Error)]
pub enum AuthError {
    #[error("User with this email already exists: {0}")]
    EmailAlreadyExists(String),

    #[error("No user registered with email: {0}")]
    UserNotFound(String),

    #[error("Wrong password")]
    WrongPassword,

    #[error("Invalid or expired refresh token")]
    InvalidRefreshToken,

    #[error("Password error: {0}")]
    Password(#[from] auth::PasswordError),

    #[error("Token error: {0}")]
    Token(#[from] auth::JwtError),

    #[error("Database error: {0}")]
    Database(String),
}

impl From<UserError> for AuthError {
    fn from(err: UserError) -> Self {
        match err {
            UserError::EmailAlreadyExists(email) => AuthError::EmailAlreadyExists(email),
            UserError::InvalidEmail(_) | UserError::NotFound(_) | UserError::DatabaseError(_) => {
                AuthError::Database(err.to_string())
            }
        }
    }
}
