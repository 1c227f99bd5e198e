use thiserror::Error;

use crate::domain::task::models::TaskId;

/// Top-level error for task operations
#[derive(Debug, Clone, Error)]
pub enum TaskError {
    #[error("Task not found: {0}")]
    NotFound(TaskId),

    #[error("Task {0} belongs to another user")]
    Forbidden(TaskId),

    #[error("Database error: {0}")]
    DatabaseError(String),
}
