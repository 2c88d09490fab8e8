use std::sync::Arc;

use crate::config::Config;
use crate::llm_client::ChatAssistant;
use crate::session::SessionStore;

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    pub config: Config,
    pub sessions: SessionStore,
    /// Chat backend. `None` when no API key is configured; chat routes then
    /// answer "not configured" while everything else keeps working.
    pub assistant: Option<Arc<dyn ChatAssistant>>,
}
