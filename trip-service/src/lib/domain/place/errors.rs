use thiserror::Error;

use crate::domain::place::models::PlaceId;

/// Top-level error for place operations
#[derive(Debug, Clone, Error)]
pub enum PlaceError {
    #[error("Place not found: {0}")]
    NotFound(PlaceId),

    #[error("Place {0} belongs to another user")]
    Forbidden(PlaceId),

    #[error("Photo not found in uploaded photos: {0}")]
    PhotoNotFound(String),

    #[error("Database error: {0}")]
    DatabaseError(String),
}
