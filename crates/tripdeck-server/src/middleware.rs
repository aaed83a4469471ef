use std::{
    collections::HashMap,
    sync::Arc,
    time::{Duration, Instant},
};

use axum::{
    extract::{Request, State},
    http::{header::AUTHORIZATION, HeaderValue},
    middleware::Next,
    response::{IntoResponse, Response},
};
use subtle::ConstantTimeEq;
use tokio::sync::Mutex;
use uuid::Uuid;

use crate::api::ApiError;

/// User id assumed for every request while the session gate is disabled.
pub const DEV_USER_ID: &str = "user_dev";

/// Newtype wrapping a request ID string, stored as a request extension.
#[derive(Debug, Clone)]
pub struct RequestId(pub String);

/// Authenticated user, inserted by [`require_session`].
#[derive(Debug, Clone)]
pub struct UserId(pub String);

/// Session-token lookup standing in for the hosted identity service.
#[derive(Debug, Clone)]
pub struct SessionAuth {
    sessions: Arc<Vec<(String, String)>>,
    pub enabled: bool,
}

impl SessionAuth {
    /// An empty token map disables the gate; every request then runs as
    /// [`DEV_USER_ID`]. Configuration loading refuses that in production.
    #[must_use]
    pub fn new(tokens: &HashMap<String, String>) -> Self {
        if tokens.is_empty() {
            tracing::warn!(
                "TRIPDECK_SESSION_TOKENS not set; session gate disabled, requests run as {DEV_USER_ID}"
            );
        }
        Self {
            sessions: Arc::new(
                tokens
                    .iter()
                    .map(|(token, user)| (token.clone(), user.clone()))
                    .collect(),
            ),
            enabled: !tokens.is_empty(),
        }
    }

    /// Compares against every configured token in constant time.
    fn user_for(&self, token: &str) -> Option<&str> {
        let mut found = None;
        for (candidate, user) in self.sessions.iter() {
            if bool::from(candidate.as_bytes().ct_eq(token.as_bytes())) {
                found = Some(user.as_str());
            }
        }
        found
    }
}

#[derive(Debug, Clone)]
struct RateLimitWindow {
    started_at: Instant,
    count: usize,
}

/// Fixed-window limiter shared by every rate-limited route.
#[derive(Debug, Clone)]
pub struct RateLimitState {
    max_requests: usize,
    window: Duration,
    state: Arc<Mutex<RateLimitWindow>>,
}

impl RateLimitState {
    #[must_use]
    pub fn new(max_requests: usize, window: Duration) -> Self {
        Self {
            max_requests,
            window,
            state: Arc::new(Mutex::new(RateLimitWindow {
                started_at: Instant::now(),
                count: 0,
            })),
        }
    }
}

fn request_id_of(req: &Request) -> String {
    req.extensions()
        .get::<RequestId>()
        .map(|id| id.0.clone())
        .unwrap_or_default()
}

/// Axum middleware that extracts or generates a request ID.
///
/// If the incoming request has an `x-request-id` header, that value is used.
/// Otherwise a new `UUIDv4` is generated. The ID is:
/// - Inserted into request extensions as [`RequestId`]
/// - Set on the response as the `x-request-id` header
pub async fn request_id(mut req: Request, next: Next) -> Response {
    let id = req
        .headers()
        .get("x-request-id")
        .and_then(|v| v.to_str().ok())
        .map_or_else(|| Uuid::new_v4().to_string(), String::from);

    req.extensions_mut().insert(RequestId(id.clone()));

    let mut res = next.run(req).await;

    if let Ok(val) = HeaderValue::from_str(&id) {
        res.headers_mut().insert("x-request-id", val);
    }

    res
}

/// Resolves the bearer session token to a [`UserId`] extension.
pub async fn require_session(
    State(auth): State<SessionAuth>,
    mut req: Request,
    next: Next,
) -> Response {
    if !auth.enabled {
        req.extensions_mut().insert(UserId(DEV_USER_ID.to_string()));
        return next.run(req).await;
    }

    let user = extract_bearer_token(req.headers().get(AUTHORIZATION))
        .and_then(|token| auth.user_for(token))
        .map(ToOwned::to_owned);

    match user {
        Some(user) => {
            req.extensions_mut().insert(UserId(user));
            next.run(req).await
        }
        None => ApiError::new(
            request_id_of(&req),
            "unauthorized",
            "missing or invalid session token",
        )
        .into_response(),
    }
}

/// Middleware enforcing a fixed request-per-window limit.
pub async fn enforce_rate_limit(
    State(rate_limit): State<RateLimitState>,
    req: Request,
    next: Next,
) -> Response {
    let mut window = rate_limit.state.lock().await;
    let elapsed = window.started_at.elapsed();

    if elapsed >= rate_limit.window {
        window.started_at = Instant::now();
        window.count = 0;
    }

    if window.count >= rate_limit.max_requests {
        drop(window);
        tracing::warn!("rate limit exceeded");
        return ApiError::new(request_id_of(&req), "rate_limited", "rate limit exceeded")
            .into_response();
    }

    window.count += 1;
    drop(window);

    next.run(req).await
}

fn extract_bearer_token(value: Option<&HeaderValue>) -> Option<&str> {
    value
        .and_then(|v| v.to_str().ok())
        .and_then(|v| v.strip_prefix("Bearer "))
        .filter(|s| !s.trim().is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn extract_bearer_token_accepts_valid_header() {
        let header = HeaderValue::from_static("Bearer test-token");
        assert_eq!(extract_bearer_token(Some(&header)), Some("test-token"));
    }

    #[test]
    fn extract_bearer_token_rejects_non_bearer_header() {
        let header = HeaderValue::from_static("Basic abc123");
        assert_eq!(extract_bearer_token(Some(&header)), None);
        assert_eq!(extract_bearer_token(None), None);
    }

    #[test]
    fn session_auth_disabled_without_tokens() {
        let auth = SessionAuth::new(&HashMap::new());
        assert!(!auth.enabled);
        assert_eq!(auth.user_for("anything"), None);
    }

    #[test]
    fn session_auth_maps_tokens_to_users() {
        let tokens = HashMap::from([
            ("tok-alice".to_string(), "user_alice".to_string()),
            ("tok-bob".to_string(), "user_bob".to_string()),
        ]);
        let auth = SessionAuth::new(&tokens);
        assert!(auth.enabled);
        assert_eq!(auth.user_for("tok-alice"), Some("user_alice"));
        assert_eq!(auth.user_for("tok-bob"), Some("user_bob"));
        assert_eq!(auth.user_for("tok-alic"), None);
    }
}
