mod catalog;
mod config;
mod errors;
mod extract;
mod generation;
mod llm_client;
mod models;
mod routes;
mod session;
mod state;

use anyhow::Result;
use std::net::SocketAddr;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::{info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use std::sync::Arc;

use crate::config::Config;
use crate::llm_client::{ChatAssistant, LlmClient};
use crate::routes::build_router;
use crate::session::SessionStore;
use crate::state::AppState;

#[tokio::main]
async fn main() -> Result<()> {
    // Load configuration first (fails fast on malformed env vars)
    let config = Config::from_env()?;

    // Initialize structured logging
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::new(format!("{}={}", env!("CARGO_CRATE_NAME"), &config.rust_log))
        }))
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting CFP API v{}", env!("CARGO_PKG_VERSION"));

    // Initialize the assistant, if a key is present. Generation works without it.
    let assistant: Option<Arc<dyn ChatAssistant>> = match &config.openai_api_key {
        Some(key) => {
            let client = LlmClient::new(key.clone(), config.openai_api_url.clone())?;
            info!("LLM client initialized (model: {})", llm_client::MODEL);
            Some(Arc::new(client))
        }
        None => {
            warn!("OPENAI_API_KEY not set; assistant chat is disabled");
            None
        }
    };

    let sessions = SessionStore::new(chrono::Duration::minutes(config.session_ttl_minutes));
    info!("Session TTL: {} minutes", config.session_ttl_minutes);

    // Build app state
    let state = AppState {
        config: config.clone(),
        sessions,
        assistant,
    };

    // Build router
    let app = build_router(state)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive()); // TODO: tighten CORS once the front-end origin is fixed

    let addr: SocketAddr = format!("0.0.0.0:{}", config.port).parse()?;
    info!("Listening on {addr}");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
