mod chat;
mod memories;
mod notifications;
mod places;
mod saved_places;
mod settings;
mod stats;
mod trips;

use std::sync::Arc;
use std::time::Duration;

use axum::{
    extract::{DefaultBodyLimit, State},
    http::{header, HeaderName, HeaderValue, Method, StatusCode},
    response::IntoResponse,
    routing::{get, patch, post},
    Extension, Json, Router,
};
use chrono::{DateTime, Utc};
use serde::Serialize;
use tower::ServiceBuilder;
use tower_http::{cors::CorsLayer, set_header::SetResponseHeaderLayer, trace::TraceLayer};
use tripdeck_assistant::ChatClient;
use tripdeck_core::AppConfig;
use tripdeck_places::{GooglePlacesClient, NearbyResolver};
use tripdeck_store::{MemoryStore, StoreError};

use crate::middleware::{
    enforce_rate_limit, request_id, require_session, RateLimitState, RequestId, SessionAuth,
};

#[derive(Clone)]
pub struct AppState {
    pub store: Arc<MemoryStore>,
    pub places: Arc<NearbyResolver<GooglePlacesClient>>,
    /// `None` when no chat credential is configured.
    pub chat: Option<Arc<ChatClient>>,
}

#[derive(Debug, Serialize)]
pub struct ApiResponse<T: Serialize> {
    pub data: T,
    pub meta: ResponseMeta,
}

#[derive(Debug, Serialize)]
pub struct ResponseMeta {
    pub request_id: String,
    pub timestamp: DateTime<Utc>,
}

#[derive(Debug, Serialize)]
pub struct ApiError {
    pub error: ErrorBody,
    pub meta: ResponseMeta,
}

#[derive(Debug, Serialize)]
pub struct ErrorBody {
    pub code: String,
    pub message: String,
}

#[derive(Debug, Serialize, PartialEq, Eq)]
struct HealthData {
    status: &'static str,
    places_source: &'static str,
    assistant: &'static str,
}

impl ResponseMeta {
    pub(super) fn new(request_id: String) -> Self {
        Self {
            request_id,
            timestamp: Utc::now(),
        }
    }
}

impl<T: Serialize> ApiResponse<T> {
    pub(super) fn new(data: T, req_id: RequestId) -> Json<Self> {
        Json(Self {
            data,
            meta: ResponseMeta::new(req_id.0),
        })
    }
}

impl ApiError {
    pub fn new(
        request_id: impl Into<String>,
        code: impl Into<String>,
        message: impl Into<String>,
    ) -> Self {
        Self {
            error: ErrorBody {
                code: code.into(),
                message: message.into(),
            },
            meta: ResponseMeta::new(request_id.into()),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> axum::response::Response {
        let status = match self.error.code.as_str() {
            "not_found" => StatusCode::NOT_FOUND,
            "unauthorized" => StatusCode::UNAUTHORIZED,
            "bad_request" | "validation_error" => StatusCode::BAD_REQUEST,
            "conflict" => StatusCode::CONFLICT,
            "rate_limited" => StatusCode::TOO_MANY_REQUESTS,
            "upstream_error" => StatusCode::BAD_GATEWAY,
            "assistant_unavailable" => StatusCode::SERVICE_UNAVAILABLE,
            _ => StatusCode::INTERNAL_SERVER_ERROR,
        };
        (status, Json(self)).into_response()
    }
}

pub(super) fn map_store_error(request_id: &str, error: StoreError) -> ApiError {
    match error {
        StoreError::NotFound(_) => ApiError::new(request_id, "not_found", error.to_string()),
        StoreError::Validation(message) => {
            ApiError::new(request_id, "validation_error", message)
        }
    }
}

fn build_cors() -> CorsLayer {
    CorsLayer::new()
        .allow_origin(tower_http::cors::Any)
        .allow_methods([
            Method::GET,
            Method::POST,
            Method::PUT,
            Method::PATCH,
            Method::DELETE,
        ])
        .allow_headers([
            header::CONTENT_TYPE,
            header::AUTHORIZATION,
            HeaderName::from_static("x-request-id"),
        ])
}

fn session_router(auth: SessionAuth) -> Router<AppState> {
    Router::new()
        .route("/api/trips", get(trips::list_trips).post(trips::create_trip))
        .route(
            "/api/trips/{id}",
            get(trips::get_trip)
                .put(trips::update_trip)
                .delete(trips::delete_trip),
        )
        .route(
            "/api/saved-places",
            get(saved_places::list_saved_places).post(saved_places::save_place),
        )
        .route(
            "/api/saved-places/{id}",
            patch(saved_places::update_saved_place).delete(saved_places::delete_saved_place),
        )
        .route("/api/user/stats", get(stats::user_stats))
        .route(
            "/api/memories",
            get(memories::list_memories).post(memories::create_memory),
        )
        .route(
            "/api/memory/upload",
            post(memories::upload_images)
                .layer(DefaultBodyLimit::max(memories::MAX_UPLOAD_BODY_BYTES)),
        )
        .route("/api/notifications", get(notifications::list_notifications))
        .route(
            "/api/settings",
            get(settings::get_settings).put(settings::update_settings),
        )
        .route("/api/chat", post(chat::chat))
        // Per-user data; never cached.
        .layer(SetResponseHeaderLayer::if_not_present(
            header::CACHE_CONTROL,
            HeaderValue::from_static("no-store"),
        ))
        .layer(axum::middleware::from_fn_with_state(auth, require_session))
}

pub fn build_app(state: AppState, auth: SessionAuth, rate_limit: RateLimitState) -> Router {
    let public_routes = Router::new().route("/api/health", get(health));

    let limited_routes = Router::new()
        .route("/api/places/nearby", get(places::nearby_places))
        .merge(session_router(auth))
        .layer(axum::middleware::from_fn_with_state(
            rate_limit,
            enforce_rate_limit,
        ));

    Router::new()
        .merge(public_routes)
        .merge(limited_routes)
        .layer(
            ServiceBuilder::new()
                .layer(TraceLayer::new_for_http())
                .layer(build_cors())
                .layer(axum::middleware::from_fn(request_id)),
        )
        .with_state(state)
}

async fn health(
    State(state): State<AppState>,
    Extension(req_id): Extension<RequestId>,
) -> impl IntoResponse {
    ApiResponse::new(
        HealthData {
            status: "ok",
            places_source: if state.places.has_live_provider() {
                "google"
            } else {
                "mock"
            },
            assistant: if state.chat.is_some() {
                "configured"
            } else {
                "unconfigured"
            },
        },
        req_id,
    )
}

#[must_use]
pub fn rate_limit_state(config: &AppConfig) -> RateLimitState {
    RateLimitState::new(
        config.rate_limit_max_requests,
        Duration::from_secs(config.rate_limit_window_secs),
    )
}

#[cfg(test)]
#[path = "api_test.rs"]
mod tests;
