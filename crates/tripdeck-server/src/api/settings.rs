use axum::{extract::State, Extension, Json};
use tripdeck_core::{SettingsUpdate, UserSettings};

use crate::middleware::{RequestId, UserId};

use super::{ApiResponse, AppState};

pub(super) async fn get_settings(
    State(state): State<AppState>,
    Extension(req_id): Extension<RequestId>,
    Extension(user): Extension<UserId>,
) -> Json<ApiResponse<UserSettings>> {
    ApiResponse::new(state.store.get_settings(&user.0).await, req_id)
}

/// PUT /api/settings: each section present in the body replaces the stored one.
pub(super) async fn update_settings(
    State(state): State<AppState>,
    Extension(req_id): Extension<RequestId>,
    Extension(user): Extension<UserId>,
    Json(body): Json<SettingsUpdate>,
) -> Json<ApiResponse<UserSettings>> {
    ApiResponse::new(state.store.update_settings(&user.0, body).await, req_id)
}
