use axum::{
    extract::{Path, State},
    http::StatusCode,
    Extension, Json,
};
use tripdeck_core::{NewTrip, Trip, TripUpdate};

use crate::middleware::{RequestId, UserId};

use super::{map_store_error, ApiError, ApiResponse, AppState};

/// GET /api/trips: the caller's trips.
pub(super) async fn list_trips(
    State(state): State<AppState>,
    Extension(req_id): Extension<RequestId>,
    Extension(user): Extension<UserId>,
) -> Json<ApiResponse<Vec<Trip>>> {
    ApiResponse::new(state.store.list_trips(&user.0).await, req_id)
}

/// POST /api/trips
pub(super) async fn create_trip(
    State(state): State<AppState>,
    Extension(req_id): Extension<RequestId>,
    Extension(user): Extension<UserId>,
    Json(body): Json<NewTrip>,
) -> Result<(StatusCode, Json<ApiResponse<Trip>>), ApiError> {
    let trip = state
        .store
        .create_trip(&user.0, body)
        .await
        .map_err(|e| map_store_error(&req_id.0, e))?;

    tracing::info!(trip_id = %trip.id, user_id = %user.0, "trip created");
    Ok((StatusCode::CREATED, ApiResponse::new(trip, req_id)))
}

pub(super) async fn get_trip(
    State(state): State<AppState>,
    Extension(req_id): Extension<RequestId>,
    Extension(user): Extension<UserId>,
    Path(id): Path<String>,
) -> Result<Json<ApiResponse<Trip>>, ApiError> {
    let trip = state
        .store
        .get_trip(&user.0, &id)
        .await
        .map_err(|e| map_store_error(&req_id.0, e))?;
    Ok(ApiResponse::new(trip, req_id))
}

/// PUT /api/trips/{id}: sparse update; absent fields are kept.
pub(super) async fn update_trip(
    State(state): State<AppState>,
    Extension(req_id): Extension<RequestId>,
    Extension(user): Extension<UserId>,
    Path(id): Path<String>,
    Json(body): Json<TripUpdate>,
) -> Result<Json<ApiResponse<Trip>>, ApiError> {
    let trip = state
        .store
        .update_trip(&user.0, &id, body)
        .await
        .map_err(|e| map_store_error(&req_id.0, e))?;
    Ok(ApiResponse::new(trip, req_id))
}

pub(super) async fn delete_trip(
    State(state): State<AppState>,
    Extension(req_id): Extension<RequestId>,
    Extension(user): Extension<UserId>,
    Path(id): Path<String>,
) -> Result<Json<ApiResponse<serde_json::Value>>, ApiError> {
    state
        .store
        .delete_trip(&user.0, &id)
        .await
        .map_err(|e| map_store_error(&req_id.0, e))?;
    Ok(ApiResponse::new(serde_json::json!({ "deleted": true }), req_id))
}
