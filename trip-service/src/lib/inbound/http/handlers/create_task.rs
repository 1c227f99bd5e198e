use axum::extract::State;
use axum::http::StatusCode;
use axum::Extension;
use axum::Json;
use serde::Deserialize;

use super::ApiError;
use super::ApiSuccess;
use super::TaskData;
use crate::domain::task::models::CreateTask;
use crate::inbound::http::middleware::AuthenticatedUser;
use crate::inbound::http::router::AppState;

pub async fn create_task(
    State(state): State<AppState>,
    Extension(user): Extension<AuthenticatedUser>,
    Json(body): Json<CreateTaskBody>,
) -> Result<ApiSuccess<TaskData>, ApiError> {
    state
        .task_service
        .create(&user.email, body.into_command())
        .await
        .map_err(ApiError::from)
        .map(|ref task| ApiSuccess::new(StatusCode::CREATED, task.into()))
}

/// HTTP request body for creating a task (raw JSON)
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct CreateTaskBody {
    content: String,
    #[serde(default)]
    done: bool,
}

impl CreateTaskBody {
    fn into_command(self) -> CreateTask {
        CreateTask {
            content: self.content,
            done: self.done,
        }
    }
}
