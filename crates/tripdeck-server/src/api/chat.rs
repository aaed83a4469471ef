//! `POST /api/chat`: forwards the conversation to the chat upstream and
//! streams its server-sent events back unchanged.

use axum::{
    body::Body,
    extract::State,
    http::{header, StatusCode},
    response::Response,
    Extension, Json,
};
use serde::Deserialize;
use tripdeck_assistant::{build_system_prompt, ChatLocation, ChatMessage, ChatPreferences, ChatRole};
use tripdeck_core::{ActivityKind, NewActivity};

use crate::middleware::{RequestId, UserId};

use super::{ApiError, AppState};

const ACTIVITY_PREVIEW_CHARS: usize = 60;

#[derive(Debug, Deserialize)]
pub(super) struct ChatRequest {
    messages: Vec<ChatMessage>,
    location: Option<ChatLocation>,
    preferences: Option<ChatPreferences>,
}

fn preview(text: &str) -> String {
    let mut chars = text.chars();
    let head: String = chars.by_ref().take(ACTIVITY_PREVIEW_CHARS).collect();
    if chars.next().is_some() {
        format!("{head}...")
    } else {
        head
    }
}

pub(super) async fn chat(
    State(state): State<AppState>,
    Extension(req_id): Extension<RequestId>,
    Extension(user): Extension<UserId>,
    Json(body): Json<ChatRequest>,
) -> Result<Response, ApiError> {
    let rid = &req_id.0;
    let Some(client) = state.chat.as_ref() else {
        return Err(ApiError::new(
            rid,
            "assistant_unavailable",
            "chat assistant is not configured",
        ));
    };
    if body.messages.is_empty() {
        return Err(ApiError::new(
            rid,
            "validation_error",
            "messages must not be empty",
        ));
    }

    let system = build_system_prompt(body.location.as_ref(), body.preferences.as_ref());
    let upstream = client
        .stream_completion(&system, &body.messages)
        .await
        .map_err(|e| {
            tracing::error!(error = %e, "chat upstream failed");
            ApiError::new(rid, "upstream_error", "chat assistant request failed")
        })?;

    let user_turns: Vec<&ChatMessage> = body
        .messages
        .iter()
        .filter(|m| m.role == ChatRole::User)
        .collect();
    if let [first] = user_turns.as_slice() {
        state
            .store
            .record_activity(
                &user.0,
                NewActivity {
                    kind: ActivityKind::ChatStarted,
                    title: "Started AI Chat".to_string(),
                    description: preview(&first.content),
                    related_id: None,
                },
            )
            .await;
    }

    Response::builder()
        .status(StatusCode::OK)
        .header(header::CONTENT_TYPE, "text/event-stream")
        .header(header::CACHE_CONTROL, "no-cache")
        .body(Body::from_stream(upstream.bytes_stream()))
        .map_err(|e| {
            tracing::error!(error = %e, "could not build chat stream response");
            ApiError::new(rid, "internal_error", "could not stream chat response")
        })
}
