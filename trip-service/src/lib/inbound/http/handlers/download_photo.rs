use axum::extract::Path;
use axum::extract::State;
use axum::http::header;
use axum::response::IntoResponse;
use axum::response::Response;

use super::ApiError;
use crate::inbound::http::router::AppState;

/// Serve a stored photo inline, typed by its filename extension.
pub async fn download_photo(
    State(state): State<AppState>,
    Path(filename): Path<String>,
) -> Result<Response, ApiError> {
    let (bytes, mime_type) = state.photo_service.download(&filename)?;

    let headers = [
        (header::CONTENT_TYPE, mime_type.to_string()),
        (
            header::CONTENT_DISPOSITION,
            format!("inline; filename=\"{}\"", filename),
        ),
    ];

    Ok((headers, bytes).into_response())
}
