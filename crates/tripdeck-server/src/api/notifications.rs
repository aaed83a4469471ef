use axum::{extract::State, Extension, Json};
use tripdeck_core::Notification;

use crate::middleware::{RequestId, UserId};

use super::{ApiResponse, AppState};

pub(super) async fn list_notifications(
    State(state): State<AppState>,
    Extension(req_id): Extension<RequestId>,
    Extension(user): Extension<UserId>,
) -> Json<ApiResponse<Vec<Notification>>> {
    ApiResponse::new(state.store.list_notifications(&user.0).await, req_id)
}
