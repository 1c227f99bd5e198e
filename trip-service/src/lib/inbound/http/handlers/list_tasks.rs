use std::collections::HashMap;

use axum::extract::Query;
use axum::extract::State;
use axum::http::StatusCode;
use axum::Extension;

use super::parse_list_request;
use super::ApiError;
use super::ApiSuccess;
use super::PageData;
use super::TaskData;
use crate::domain::listing::ListQuery;
use crate::domain::task::models::TASK_FIELDS;
use crate::inbound::http::middleware::AuthenticatedUser;
use crate::inbound::http::router::AppState;

pub async fn list_tasks(
    State(state): State<AppState>,
    Extension(user): Extension<AuthenticatedUser>,
    Query(params): Query<HashMap<String, String>>,
) -> Result<ApiSuccess<PageData<TaskData>>, ApiError> {
    let request = parse_list_request(params)?;
    let query = ListQuery::from_raw(
        TASK_FIELDS,
        &request.raw,
        request.sort_by.as_deref(),
        request.direction,
    );

    let page = state
        .task_service
        .list(&user.email, query, request.page)
        .await
        .map_err(ApiError::from)?;

    Ok(ApiSuccess::new(
        StatusCode::OK,
        PageData {
            total: page.total,
            page: page.page,
            per_page: page.per_page,
            results: page.results.iter().map(TaskData::from).collect(),
        },
    ))
}
