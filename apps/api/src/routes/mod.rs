pub mod conferences;
pub mod health;

use axum::{
    routing::{get, post, put},
    Router,
};

use crate::generation::handlers as ideas;
use crate::session::handlers as sessions;
use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health_handler))
        .route("/api/v1/conferences", get(conferences::list_conferences))
        // Stateless generation
        .route("/api/v1/ideas", post(ideas::handle_generate_ideas))
        .route("/api/v1/ideas/details", post(ideas::handle_idea_detail))
        // Sessions
        .route("/api/v1/sessions", post(sessions::handle_create_session))
        .route(
            "/api/v1/sessions/:id",
            get(sessions::handle_get_session).delete(sessions::handle_delete_session),
        )
        .route(
            "/api/v1/sessions/:id/ideas",
            post(sessions::handle_regenerate_ideas),
        )
        .route(
            "/api/v1/sessions/:id/ideas/:index/select",
            post(sessions::handle_select_idea),
        )
        .route(
            "/api/v1/sessions/:id/ideas/:index/regenerate",
            post(sessions::handle_regenerate_section),
        )
        .route(
            "/api/v1/sessions/:id/ideas/:index/abstract",
            put(sessions::handle_edit_abstract),
        )
        .route("/api/v1/sessions/:id/chat", post(sessions::handle_chat))
        .route(
            "/api/v1/sessions/:id/download",
            get(sessions::handle_download),
        )
        .with_state(state)
}
