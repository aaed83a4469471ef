mod api;
mod middleware;

use std::sync::Arc;

use tracing_subscriber::EnvFilter;
use tripdeck_assistant::ChatClient;
use tripdeck_places::{GooglePlacesClient, NearbyResolver};
use tripdeck_store::MemoryStore;

use crate::{
    api::{build_app, rate_limit_state, AppState},
    middleware::SessionAuth,
};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    let config = tripdeck_core::load_app_config()?;
    config.require_session_tokens()?;
    let env_filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(config.log_level.clone()))?;
    tracing_subscriber::fmt().with_env_filter(env_filter).init();

    let places_client = config
        .google_places_api_key
        .as_deref()
        .map(|key| {
            GooglePlacesClient::with_base_url(
                key,
                config.places_timeout_secs,
                &config.user_agent,
                &config.places_base_url,
            )
        })
        .transpose()?;
    if places_client.is_none() {
        tracing::warn!("GOOGLE_PLACES_API_KEY not set; nearby places served from mock catalog");
    }

    let chat = config
        .groq_api_key
        .as_deref()
        .map(|key| {
            ChatClient::new(
                key,
                &config.chat_model,
                &config.chat_base_url,
                config.chat_timeout_secs,
                &config.user_agent,
            )
        })
        .transpose()?
        .map(Arc::new);
    if chat.is_none() {
        tracing::warn!("GROQ_API_KEY not set; chat endpoint disabled");
    }

    let state = AppState {
        store: Arc::new(MemoryStore::new()),
        places: Arc::new(NearbyResolver::new(places_client)),
        chat,
    };
    let auth = SessionAuth::new(&config.session_tokens);
    let app = build_app(state, auth, rate_limit_state(&config));

    let listener = tokio::net::TcpListener::bind(config.bind_addr).await?;
    tracing::info!(addr = %config.bind_addr, env = %config.env, "tripdeck server listening");
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;
    Ok(())
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::error!(error = %e, "failed to listen for ctrl-c");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(e) => {
                tracing::error!(error = %e, "failed to install SIGTERM handler");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => {},
        () = terminate => {},
    }

    tracing::info!("received shutdown signal, starting graceful shutdown");
}
