use std::fmt;

use crate::domain::listing::FieldKind;
use crate::domain::listing::FieldSpec;

/// Todo task aggregate entity.
#[derive(Debug, Clone, PartialEq)]
pub struct Task {
    pub id: TaskId,
    pub content: String,
    pub done: bool,
    /// Owning user's email; set at creation, never client-controlled.
    pub owner_email: String,
}

/// Task unique identifier type
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TaskId(pub i64);

impl fmt::Display for TaskId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

/// Fields accepted when creating a task.
#[derive(Debug, Clone)]
pub struct CreateTask {
    pub content: String,
    pub done: bool,
}

/// Partial update: only supplied fields change.
#[derive(Debug, Clone, Default)]
pub struct UpdateTask {
    pub content: Option<String>,
    pub done: Option<bool>,
}

/// Fields tasks can be filtered and sorted by.
pub const TASK_FIELDS: &[FieldSpec] = &[
    FieldSpec {
        name: "id",
        kind: FieldKind::Integer,
    },
    FieldSpec {
        name: "content",
        kind: FieldKind::Text,
    },
    FieldSpec {
        name: "done",
        kind: FieldKind::Boolean,
    },
    FieldSpec {
        name: "owner_email",
        kind: FieldKind::Text,
    },
];
