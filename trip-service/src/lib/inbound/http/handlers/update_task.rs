use axum::extract::Path;
use axum::extract::State;
use axum::http::StatusCode;
use axum::Extension;
use axum::Json;
use serde::Deserialize;

use super::ApiError;
use super::ApiSuccess;
use super::TaskData;
use crate::domain::task::models::TaskId;
use crate::domain::task::models::UpdateTask;
use crate::inbound::http::middleware::AuthenticatedUser;
use crate::inbound::http::router::AppState;

pub async fn update_task(
    State(state): State<AppState>,
    Extension(user): Extension<AuthenticatedUser>,
    Path(id): Path<i64>,
    Json(body): Json<UpdateTaskBody>,
) -> Result<ApiSuccess<TaskData>, ApiError> {
    state
        .task_service
        .update(&user.email, TaskId(id), body.into_command())
        .await
        .map_err(ApiError::from)
        .map(|ref task| ApiSuccess::new(StatusCode::OK, task.into()))
}

/// HTTP request body for updating a task; absent fields stay untouched.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct UpdateTaskBody {
    content: Option<String>,
    done: Option<bool>,
}

impl UpdateTaskBody {
    fn into_command(self) -> UpdateTask {
        UpdateTask {
            content: self.content,
            done: self.done,
        }
    }
}
