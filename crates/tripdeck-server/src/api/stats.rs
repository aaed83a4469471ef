use axum::{extract::State, Extension, Json};
use serde::Serialize;
use tripdeck_core::{UserActivity, UserStats};

use crate::middleware::{RequestId, UserId};

use super::{ApiResponse, AppState};

const RECENT_ACTIVITY_LIMIT: usize = 5;

#[derive(Debug, Serialize)]
pub(super) struct DashboardStats {
    stats: UserStats,
    activities: Vec<UserActivity>,
}

/// GET /api/user/stats: dashboard counters plus the latest activity.
pub(super) async fn user_stats(
    State(state): State<AppState>,
    Extension(req_id): Extension<RequestId>,
    Extension(user): Extension<UserId>,
) -> Json<ApiResponse<DashboardStats>> {
    let stats = state.store.user_stats(&user.0).await;
    let activities = state
        .store
        .recent_activities(&user.0, RECENT_ACTIVITY_LIMIT)
        .await;
    ApiResponse::new(DashboardStats { stats, activities }, req_id)
}
