use axum::extract::Multipart;
use axum::extract::State;
use axum::http::StatusCode;

use super::ApiError;
use super::ApiSuccess;
use super::PhotoData;
use crate::domain::photo::models::UploadedFile;
use crate::inbound::http::router::AppState;

/// Accepts a multipart form with a single "file" field.
pub async fn upload_photo(
    State(state): State<AppState>,
    mut multipart: Multipart,
) -> Result<ApiSuccess<PhotoData>, ApiError> {
    let mut uploaded: Option<UploadedFile> = None;

    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| ApiError::BadRequest(e.to_string()))?
    {
        if field.name() != Some("file") {
            continue;
        }

        let original_name = field.file_name().unwrap_or_default().to_string();
        let mime_type = field.content_type().unwrap_or_default().to_string();
        let bytes = field
            .bytes()
            .await
            .map_err(|e| ApiError::BadRequest(e.to_string()))?;

        uploaded = Some(UploadedFile {
            original_name,
            mime_type,
            bytes: bytes.to_vec(),
        });
        break;
    }

    let file = uploaded.ok_or_else(|| ApiError::BadRequest("No file was uploaded".to_string()))?;

    state
        .photo_service
        .upload(file)
        .map_err(ApiError::from)
        .map(|ref photo| ApiSuccess::new(StatusCode::CREATED, photo.into()))
}
