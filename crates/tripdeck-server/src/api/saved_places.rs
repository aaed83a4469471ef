use axum::{
    extract::{Path, State},
    http::StatusCode,
    Extension, Json,
};
use tripdeck_core::{NewSavedPlace, SavedPlace, SavedPlaceUpdate};

use crate::middleware::{RequestId, UserId};

use super::{map_store_error, ApiError, ApiResponse, AppState};

pub(super) async fn list_saved_places(
    State(state): State<AppState>,
    Extension(req_id): Extension<RequestId>,
    Extension(user): Extension<UserId>,
) -> Json<ApiResponse<Vec<SavedPlace>>> {
    ApiResponse::new(state.store.list_saved_places(&user.0).await, req_id)
}

pub(super) async fn save_place(
    State(state): State<AppState>,
    Extension(req_id): Extension<RequestId>,
    Extension(user): Extension<UserId>,
    Json(body): Json<NewSavedPlace>,
) -> Result<(StatusCode, Json<ApiResponse<SavedPlace>>), ApiError> {
    let place = state
        .store
        .save_place(&user.0, body)
        .await
        .map_err(|e| map_store_error(&req_id.0, e))?;
    Ok((StatusCode::CREATED, ApiResponse::new(place, req_id)))
}

/// PATCH /api/saved-places/{id}: status transition and annotations.
pub(super) async fn update_saved_place(
    State(state): State<AppState>,
    Extension(req_id): Extension<RequestId>,
    Extension(user): Extension<UserId>,
    Path(id): Path<String>,
    Json(body): Json<SavedPlaceUpdate>,
) -> Result<Json<ApiResponse<SavedPlace>>, ApiError> {
    let place = state
        .store
        .update_saved_place(&user.0, &id, body)
        .await
        .map_err(|e| map_store_error(&req_id.0, e))?;
    Ok(ApiResponse::new(place, req_id))
}

pub(super) async fn delete_saved_place(
    State(state): State<AppState>,
    Extension(req_id): Extension<RequestId>,
    Extension(user): Extension<UserId>,
    Path(id): Path<String>,
) -> Result<Json<ApiResponse<serde_json::Value>>, ApiError> {
    state
        .store
        .delete_saved_place(&user.0, &id)
        .await
        .map_err(|e| map_store_error(&req_id.0, e))?;
    Ok(ApiResponse::new(serde_json::json!({ "deleted": true }), req_id))
}
