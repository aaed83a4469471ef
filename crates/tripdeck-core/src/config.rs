use std::collections::HashMap;

use crate::app_config::{AppConfig, Environment};
use crate::ConfigError;

pub const DEFAULT_PLACES_BASE_URL: &str = "https://maps.googleapis.com/maps/api/place/";
pub const DEFAULT_CHAT_BASE_URL: &str = "https://api.groq.com/openai/v1/";
pub const DEFAULT_CHAT_MODEL: &str = "gemma2-9b-it";

/// Load application configuration from environment variables.
///
/// Calls `dotenvy::dotenv().ok()` to load `.env` files before reading env vars.
///
/// # Errors
///
/// Returns `ConfigError` if a value is invalid.
pub fn load_app_config() -> Result<AppConfig, ConfigError> {
    dotenvy::dotenv().ok();
    load_app_config_from_env()
}

/// Load application configuration from environment variables already in the process.
///
/// Unlike [`load_app_config`], this does NOT load `.env` files.
///
/// # Errors
///
/// Returns `ConfigError` if a value is invalid.
pub fn load_app_config_from_env() -> Result<AppConfig, ConfigError> {
    build_app_config(|key| std::env::var(key))
}

/// Build application configuration using the provided env-var lookup function.
///
/// Decoupled from the real environment so tests can pass a `HashMap` lookup.
fn build_app_config<F>(lookup: F) -> Result<AppConfig, ConfigError>
where
    F: Fn(&str) -> Result<String, std::env::VarError>,
{
    use std::net::SocketAddr;

    let or_default = |var: &str, default: &str| -> String {
        lookup(var).unwrap_or_else(|_| default.to_string())
    };

    // Blank values count as unset so `GOOGLE_PLACES_API_KEY=` in a .env file
    // still selects mock mode.
    let optional = |var: &str| -> Option<String> {
        lookup(var)
            .ok()
            .map(|v| v.trim().to_string())
            .filter(|v| !v.is_empty())
    };

    let parse_addr = |var: &str, default: &str| -> Result<SocketAddr, ConfigError> {
        let raw = or_default(var, default);
        raw.parse::<SocketAddr>()
            .map_err(|e| ConfigError::InvalidEnvVar {
                var: var.to_string(),
                reason: e.to_string(),
            })
    };

    let parse_u64 = |var: &str, default: &str| -> Result<u64, ConfigError> {
        let raw = or_default(var, default);
        raw.parse::<u64>().map_err(|e| ConfigError::InvalidEnvVar {
            var: var.to_string(),
            reason: e.to_string(),
        })
    };

    let parse_usize = |var: &str, default: &str| -> Result<usize, ConfigError> {
        let raw = or_default(var, default);
        raw.parse::<usize>()
            .map_err(|e| ConfigError::InvalidEnvVar {
                var: var.to_string(),
                reason: e.to_string(),
            })
    };

    let env = parse_environment(&or_default("TRIPDECK_ENV", "development"));
    let bind_addr = parse_addr("TRIPDECK_BIND_ADDR", "0.0.0.0:3000")?;
    let log_level = or_default("TRIPDECK_LOG_LEVEL", "info");
    let user_agent = or_default("TRIPDECK_USER_AGENT", "tripdeck/0.1 (travel-planner)");

    let google_places_api_key = optional("GOOGLE_PLACES_API_KEY");
    let places_base_url = or_default("TRIPDECK_PLACES_BASE_URL", DEFAULT_PLACES_BASE_URL);
    let places_timeout_secs = parse_u64("TRIPDECK_PLACES_TIMEOUT_SECS", "10")?;

    let groq_api_key = optional("GROQ_API_KEY");
    let chat_base_url = or_default("TRIPDECK_CHAT_BASE_URL", DEFAULT_CHAT_BASE_URL);
    let chat_model = or_default("TRIPDECK_CHAT_MODEL", DEFAULT_CHAT_MODEL);
    let chat_timeout_secs = parse_u64("TRIPDECK_CHAT_TIMEOUT_SECS", "30")?;

    let rate_limit_max_requests = parse_usize("TRIPDECK_RATE_LIMIT_MAX_REQUESTS", "120")?;
    let rate_limit_window_secs = parse_u64("TRIPDECK_RATE_LIMIT_WINDOW_SECS", "60")?;
    if rate_limit_window_secs == 0 {
        return Err(ConfigError::InvalidEnvVar {
            var: "TRIPDECK_RATE_LIMIT_WINDOW_SECS".to_string(),
            reason: "window must be at least one second".to_string(),
        });
    }

    let session_tokens = parse_session_tokens(&or_default("TRIPDECK_SESSION_TOKENS", ""))?;

    Ok(AppConfig {
        env,
        bind_addr,
        log_level,
        user_agent,
        google_places_api_key,
        places_base_url,
        places_timeout_secs,
        groq_api_key,
        chat_base_url,
        chat_model,
        chat_timeout_secs,
        rate_limit_max_requests,
        rate_limit_window_secs,
        session_tokens,
    })
}

/// Parse a string into an `Environment` variant.
///
/// Unrecognized values default to `Environment::Development`.
fn parse_environment(s: &str) -> Environment {
    match s {
        "production" => Environment::Production,
        "test" => Environment::Test,
        _ => Environment::Development,
    }
}

/// Parse `token=user_id` pairs separated by commas. Empty segments are skipped.
fn parse_session_tokens(raw: &str) -> Result<HashMap<String, String>, ConfigError> {
    let mut tokens = HashMap::new();
    for pair in raw.split(',').map(str::trim).filter(|s| !s.is_empty()) {
        let (token, user_id) = pair
            .split_once('=')
            .map(|(t, u)| (t.trim(), u.trim()))
            .filter(|(t, u)| !t.is_empty() && !u.is_empty())
            .ok_or_else(|| ConfigError::InvalidEnvVar {
                var: "TRIPDECK_SESSION_TOKENS".to_string(),
                reason: format!("expected token=user_id, got '{pair}'"),
            })?;
        tokens.insert(token.to_string(), user_id.to_string());
    }
    Ok(tokens)
}

#[cfg(test)]
#[path = "config_test.rs"]
mod tests;
