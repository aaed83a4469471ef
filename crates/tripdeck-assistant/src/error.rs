use thiserror::Error;

#[derive(Debug, Error)]
pub enum AssistantError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("chat upstream returned {status}: {body}")]
    UnexpectedStatus { status: u16, body: String },

    #[error("invalid base URL {base_url:?}: {reason}")]
    InvalidBaseUrl { base_url: String, reason: String },
}
