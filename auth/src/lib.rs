//! Authentication utilities library
//!
//! Provides reusable authentication infrastructure for the service:
//! - Password hashing (Argon2id) with a tunable work factor
//! - JWT generation and validation with an issued-at/expiry envelope
//! - An authentication coordinator holding the two token classes
//!
//! Access and refresh tokens are separate classes: each gets its own secret
//! and time-to-live, so a token of one class never validates as the other.
//!
//! # Examples
//!
//! ## Password Hashing
//! ```
//! use auth::PasswordHasher;
//!
//! let hasher = PasswordHasher::new(None);
//! let hash = hasher.hash("my_password").unwrap();
//! assert!(hasher.verify("my_password", &hash));
//! ```
//!
//! ## JWT Tokens
//! ```
//! use auth::{AccessClaims, JwtHandler};
//! use chrono::Duration;
//!
//! let handler = JwtHandler::new(b"secret_key_at_least_32_bytes_long!", Duration::minutes(15));
//! let token = handler.encode(AccessClaims { email: "alice@example.com".to_string() }).unwrap();
//! let decoded = handler.decode::<AccessClaims>(&token).unwrap();
//! assert_eq!(decoded.payload.email, "alice@example.com");
//! ```
//!
//! ## Complete Authentication Flow
//! ```
//! use auth::{Authenticator, TokenPolicy};
//! use chrono::Duration;
//!
//! let auth = Authenticator::new(
//!     TokenPolicy { secret: b"access_secret_at_least_32_bytes!!", ttl: Duration::minutes(15) },
//!     TokenPolicy { secret: b"refresh_secret_at_least_32_bytes!", ttl: Duration::days(7) },
//!     None,
//! );
//!
//! // Register: hash password
//! let hash = auth.hash_password("password123").unwrap();
//!
//! // Login: verify and generate tokens
//! assert!(auth.verify_password("password123", &hash));
//! let access = auth.issue_access_token("alice@example.com").unwrap();
//! let refresh = auth.issue_refresh_token().unwrap();
//!
//! // Validate the access token
//! let claims = auth.validate_access_token(&access).unwrap();
//! assert_eq!(claims.payload.email, "alice@example.com");
//!
//! // A refresh token is never accepted as an access token
//! assert!(auth.validate_access_token(&refresh).is_err());
//! ```

pub mod authenticator;
pub mod jwt;
pub mod password;

// Re-export commonly used items
pub use authenticator::Authenticator;
pub use authenticator::TokenPolicy;
pub use jwt::AccessClaims;
pub use jwt::JwtError;
pub use jwt::JwtHandler;
pub use jwt::RefreshClaims;
pub use jwt::TimedClaims;
pub use password::PasswordError;
pub use password::PasswordHasher;
