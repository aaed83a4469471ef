use axum::{
    extract::{multipart::MultipartRejection, Multipart, State},
    http::StatusCode,
    Extension, Json,
};
use chrono::Utc;
use serde::Serialize;
use tripdeck_core::{Memory, NewMemory, UploadedImage};
use tripdeck_store::memories::placeholder_image;

use crate::middleware::{RequestId, UserId};

use super::{map_store_error, ApiError, ApiResponse, AppState};

/// Per-file limit for memory uploads.
pub(super) const MAX_IMAGE_BYTES: usize = 10 * 1024 * 1024;

/// Request body cap for the upload route; leaves room for several images.
pub(super) const MAX_UPLOAD_BODY_BYTES: usize = 64 * 1024 * 1024;

#[derive(Debug, Serialize)]
pub(super) struct UploadedImages {
    files: Vec<UploadedImage>,
}

pub(super) async fn list_memories(
    State(state): State<AppState>,
    Extension(req_id): Extension<RequestId>,
    Extension(user): Extension<UserId>,
) -> Json<ApiResponse<Vec<Memory>>> {
    ApiResponse::new(state.store.list_memories(&user.0).await, req_id)
}

pub(super) async fn create_memory(
    State(state): State<AppState>,
    Extension(req_id): Extension<RequestId>,
    Extension(user): Extension<UserId>,
    Json(body): Json<NewMemory>,
) -> Result<(StatusCode, Json<ApiResponse<Memory>>), ApiError> {
    let memory = state
        .store
        .create_memory(&user.0, body)
        .await
        .map_err(|e| map_store_error(&req_id.0, e))?;
    Ok((StatusCode::CREATED, ApiResponse::new(memory, req_id)))
}

/// POST /api/memory/upload: accepts `files` parts of a multipart form.
///
/// Files are not stored; each accepted image gets a placeholder URL.
pub(super) async fn upload_images(
    Extension(req_id): Extension<RequestId>,
    Extension(user): Extension<UserId>,
    multipart: Result<Multipart, MultipartRejection>,
) -> Result<Json<ApiResponse<UploadedImages>>, ApiError> {
    let rejected = |message: String| ApiError::new(&req_id.0, "validation_error", message);

    let mut multipart = multipart.map_err(|e| rejected(e.body_text()))?;
    let stamp = Utc::now().timestamp_millis();
    let mut files = Vec::new();

    while let Some(mut field) = multipart
        .next_field()
        .await
        .map_err(|e| rejected(e.body_text()))?
    {
        if field.name() != Some("files") {
            continue;
        }

        let content_type = field.content_type().unwrap_or_default().to_string();
        if !content_type.starts_with("image/") {
            return Err(rejected("Only image files are allowed".to_string()));
        }
        let name = field.file_name().unwrap_or_default().to_string();

        let mut size = 0;
        while let Some(chunk) = field.chunk().await.map_err(|e| rejected(e.body_text()))? {
            size += chunk.len();
            if size > MAX_IMAGE_BYTES {
                return Err(rejected("File size must be less than 10MB".to_string()));
            }
        }

        let index = files.len();
        files.push(UploadedImage {
            id: format!("upload_{stamp}_{index}"),
            name,
            size,
            content_type,
            url: placeholder_image(stamp, index),
        });
    }

    if files.is_empty() {
        return Err(rejected("No files provided".to_string()));
    }

    tracing::info!(user_id = %user.0, count = files.len(), "memory images accepted");
    Ok(ApiResponse::new(UploadedImages { files }, req_id))
}
