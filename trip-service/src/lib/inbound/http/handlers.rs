use std::collections::HashMap;

use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::response::Response;
use axum::Json;
use serde::Serialize;

use crate::domain::auth::errors::AuthError;
use crate::domain::listing::PageRequest;
use crate::domain::listing::SortDirection;
use crate::domain::photo::errors::PhotoError;
use crate::domain::photo::models::StoredPhoto;
use crate::domain::place::errors::PlaceError;
use crate::domain::place::models::Place;
use crate::domain::task::errors::TaskError;
use crate::domain::task::models::Task;
use crate::domain::user::errors::EmailError;

pub mod create_place;
pub mod create_task;
pub mod delete_photo;
pub mod delete_place;
pub mod delete_task;
pub mod download_photo;
pub mod get_place;
pub mod get_task;
pub mod list_places;
pub mod list_tasks;
pub mod me;
pub mod refresh_token;
pub mod register;
pub mod sign_in;
pub mod update_place;
pub mod update_task;
pub mod upload_photo;

#[derive(Debug, Clone)]
pub struct ApiSuccess<T: Serialize + PartialEq>(StatusCode, Json<ApiResponseBody<T>>);

impl<T> PartialEq for ApiSuccess<T>
where
    T: Serialize + PartialEq,
{
    fn eq(&self, other: &Self) -> bool {
        self.0 == other.0 && self.1 .0 == other.1 .0
    }
}

impl<T: Serialize + PartialEq> ApiSuccess<T> {
    pub fn new(status: StatusCode, data: T) -> Self {
        ApiSuccess(status, Json(ApiResponseBody::new(status, data)))
    }
}

impl<T: Serialize + PartialEq> IntoResponse for ApiSuccess<T> {
    fn into_response(self) -> Response {
        (self.0, self.1).into_response()
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ApiError {
    InternalServerError(String),
    UnprocessableEntity(String),
    BadRequest(String),
    NotFound(String),
    Forbidden(String),
    Conflict(String),
    Unauthorized(String),
}

impl From<anyhow::Error> for ApiError {
    fn from(e: anyhow::Error) -> Self {
        Self::InternalServerError(e.to_string())
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            ApiError::InternalServerError(msg) => (StatusCode::INTERNAL_SERVER_ERROR, msg),
            ApiError::UnprocessableEntity(msg) => (StatusCode::UNPROCESSABLE_ENTITY, msg),
            ApiError::BadRequest(msg) => (StatusCode::BAD_REQUEST, msg),
            ApiError::NotFound(msg) => (StatusCode::NOT_FOUND, msg),
            ApiError::Forbidden(msg) => (StatusCode::FORBIDDEN, msg),
            ApiError::Conflict(msg) => (StatusCode::CONFLICT, msg),
            ApiError::Unauthorized(msg) => (StatusCode::UNAUTHORIZED, msg),
        };

        (status, Json(ApiResponseBody::new_error(status, message))).into_response()
    }
}

impl From<AuthError> for ApiError {
    fn from(err: AuthError) -> Self {
        match err {
            AuthError::EmailAlreadyExists(_) => ApiError::Conflict(err.to_string()),
            AuthError::UserNotFound(_) => ApiError::NotFound(err.to_string()),
            AuthError::WrongPassword | AuthError::InvalidRefreshToken => {
                ApiError::Unauthorized(err.to_string())
            }
            AuthError::Password(_) | AuthError::Token(_) | AuthError::Database(_) => {
                ApiError::InternalServerError(err.to_string())
            }
        }
    }
}

impl From<PlaceError> for ApiError {
    fn from(err: PlaceError) -> Self {
        match err {
            PlaceError::NotFound(_) | PlaceError::PhotoNotFound(_) => {
                ApiError::NotFound(err.to_string())
            }
            PlaceError::Forbidden(_) => ApiError::Forbidden(err.to_string()),
            PlaceError::DatabaseError(_) => ApiError::InternalServerError(err.to_string()),
        }
    }
}

impl From<TaskError> for ApiError {
    fn from(err: TaskError) -> Self {
        match err {
            TaskError::NotFound(_) => ApiError::NotFound(err.to_string()),
            TaskError::Forbidden(_) => ApiError::Forbidden(err.to_string()),
            TaskError::DatabaseError(_) => ApiError::InternalServerError(err.to_string()),
        }
    }
}

impl From<PhotoError> for ApiError {
    fn from(err: PhotoError) -> Self {
        match err {
            PhotoError::NotFound(_) => ApiError::NotFound(err.to_string()),
            PhotoError::MissingFile
            | PhotoError::EmptyFile
            | PhotoError::UnsupportedType(_)
            | PhotoError::TooLarge { .. } => ApiError::BadRequest(err.to_string()),
            PhotoError::Io(_) => ApiError::InternalServerError(err.to_string()),
        }
    }
}

impl From<EmailError> for ApiError {
    fn from(err: EmailError) -> Self {
        ApiError::BadRequest(err.to_string())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ApiResponseBody<T: Serialize + PartialEq> {
    status_code: u16,
    data: T,
}

impl<T: Serialize + PartialEq> ApiResponseBody<T> {
    pub fn new(status_code: StatusCode, data: T) -> Self {
        Self {
            status_code: status_code.as_u16(),
            data,
        }
    }
}

impl ApiResponseBody<ApiErrorData> {
    pub fn new_error(status_code: StatusCode, message: String) -> Self {
        Self {
            status_code: status_code.as_u16(),
            data: ApiErrorData { message },
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ApiErrorData {
    pub message: String,
}

/// One page of serialized results.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PageData<T> {
    pub total: i64,
    pub page: u32,
    pub per_page: u32,
    pub results: Vec<T>,
}

/// Response body shared by the place handlers.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PlaceData {
    pub id: i64,
    pub name: String,
    pub description: Option<String>,
    pub image_url: Option<String>,
    pub is_favourite: bool,
    pub owner_email: String,
}

impl From<&Place> for PlaceData {
    fn from(place: &Place) -> Self {
        Self {
            id: place.id.0,
            name: place.name.clone(),
            description: place.description.clone(),
            image_url: place.image_url.clone(),
            is_favourite: place.is_favourite,
            owner_email: place.owner_email.clone(),
        }
    }
}

/// Response body shared by the task handlers.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TaskData {
    pub id: i64,
    pub content: String,
    pub done: bool,
    pub owner_email: String,
}

impl From<&Task> for TaskData {
    fn from(task: &Task) -> Self {
        Self {
            id: task.id.0,
            content: task.content.clone(),
            done: task.done,
            owner_email: task.owner_email.clone(),
        }
    }
}

/// Response body for photo uploads.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PhotoData {
    pub id: String,
    pub filename: String,
    pub original_name: String,
    pub mime_type: String,
    pub size: u64,
    pub path: String,
    pub created_at: chrono::DateTime<chrono::Utc>,
}

impl From<&StoredPhoto> for PhotoData {
    fn from(photo: &StoredPhoto) -> Self {
        Self {
            id: photo.id.clone(),
            filename: photo.filename.clone(),
            original_name: photo.original_name.clone(),
            mime_type: photo.mime_type.clone(),
            size: photo.size,
            path: photo.path.display().to_string(),
            created_at: photo.created_at,
        }
    }
}

/// Paging, sorting, and raw filter pairs extracted from a list request's
/// query string.
pub(crate) struct ListRequest {
    pub page: PageRequest,
    pub sort_by: Option<String>,
    pub direction: SortDirection,
    pub raw: HashMap<String, String>,
}

/// Parse the reserved list parameters, leaving the rest as filter
/// candidates. Bad numbers and unknown sort directions are client errors;
/// everything else is dealt with by the allow-list.
pub(crate) fn parse_list_request(
    params: HashMap<String, String>,
) -> Result<ListRequest, ApiError> {
    let page = match params.get("page") {
        None => 0,
        Some(value) => value.parse::<u32>().map_err(|_| {
            ApiError::BadRequest("Validation failed (numeric string is expected)".to_string())
        })?,
    };

    let per_page = match params.get("per_page") {
        None => PageRequest::DEFAULT_PER_PAGE,
        Some(value) => value.parse::<u32>().map_err(|_| {
            ApiError::BadRequest("Validation failed (numeric string is expected)".to_string())
        })?,
    };

    let direction = match params.get("sort") {
        None => SortDirection::Asc,
        Some(value) => SortDirection::from_param(value)
            .ok_or_else(|| ApiError::BadRequest("Validation failed".to_string()))?,
    };

    let sort_by = params.get("sort_by").cloned();

    Ok(ListRequest {
        page: PageRequest { page, per_page },
        sort_by,
        direction,
        raw: params,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn params(pairs: &[(&str, &str)]) -> HashMap<String, String> {
        pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    #[test]
    fn test_parse_list_request_defaults() {
        let request = parse_list_request(params(&[])).unwrap();

        assert_eq!(request.page, PageRequest { page: 0, per_page: 10 });
        assert_eq!(request.direction, SortDirection::Asc);
        assert!(request.sort_by.is_none());
    }

    #[test]
    fn test_parse_list_request_rejects_bad_page() {
        let result = parse_list_request(params(&[("page", "two")]));
        assert!(matches!(result, Err(ApiError::BadRequest(_))));
    }

    #[test]
    fn test_parse_list_request_rejects_bad_sort() {
        let result = parse_list_request(params(&[("sort", "sideways")]));
        assert!(matches!(result, Err(ApiError::BadRequest(_))));
    }

    #[test]
    fn test_parse_list_request_keeps_filter_candidates() {
        let request =
            parse_list_request(params(&[("page", "1"), ("done", "true"), ("sort", "desc")]))
                .unwrap();

        assert_eq!(request.page.page, 1);
        assert_eq!(request.direction, SortDirection::Desc);
        assert_eq!(request.raw.get("done").map(String::as_str), Some("true"));
    }
}
