use std::collections::HashMap;
use std::net::SocketAddr;

use crate::ConfigError;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Environment {
    Development,
    Test,
    Production,
}

impl std::fmt::Display for Environment {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Environment::Development => write!(f, "development"),
            Environment::Test => write!(f, "test"),
            Environment::Production => write!(f, "production"),
        }
    }
}

#[derive(Clone)]
pub struct AppConfig {
    pub env: Environment,
    pub bind_addr: SocketAddr,
    pub log_level: String,
    pub user_agent: String,
    /// Live places credential. `None` selects the mock catalog for every request.
    pub google_places_api_key: Option<String>,
    pub places_base_url: String,
    pub places_timeout_secs: u64,
    pub groq_api_key: Option<String>,
    pub chat_base_url: String,
    pub chat_model: String,
    pub chat_timeout_secs: u64,
    pub rate_limit_max_requests: usize,
    pub rate_limit_window_secs: u64,
    /// Session token → user id, standing in for the hosted identity service.
    pub session_tokens: HashMap<String, String>,
}

impl AppConfig {
    #[must_use]
    pub fn is_development(&self) -> bool {
        self.env == Environment::Development
    }

    /// Production servers must not fall back to the shared development user.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::MissingEnvVar`] in production when no session
    /// tokens are configured.
    pub fn require_session_tokens(&self) -> Result<(), ConfigError> {
        if self.env == Environment::Production && self.session_tokens.is_empty() {
            return Err(ConfigError::MissingEnvVar(
                "TRIPDECK_SESSION_TOKENS".to_string(),
            ));
        }
        Ok(())
    }
}

impl std::fmt::Debug for AppConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AppConfig")
            .field("env", &self.env)
            .field("bind_addr", &self.bind_addr)
            .field("log_level", &self.log_level)
            .field("user_agent", &self.user_agent)
            .field(
                "google_places_api_key",
                &self.google_places_api_key.as_ref().map(|_| "[redacted]"),
            )
            .field("places_base_url", &self.places_base_url)
            .field("places_timeout_secs", &self.places_timeout_secs)
            .field(
                "groq_api_key",
                &self.groq_api_key.as_ref().map(|_| "[redacted]"),
            )
            .field("chat_base_url", &self.chat_base_url)
            .field("chat_model", &self.chat_model)
            .field("chat_timeout_secs", &self.chat_timeout_secs)
            .field("rate_limit_max_requests", &self.rate_limit_max_requests)
            .field("rate_limit_window_secs", &self.rate_limit_window_secs)
            .field(
                "session_tokens",
                &format_args!("[{} redacted]", self.session_tokens.len()),
            )
            .finish()
    }
}
