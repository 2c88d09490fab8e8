//! Axum route handlers for the stateless Generation API.
//!
//! Each call carries its own profile; nothing is remembered between requests.

use axum::Json;
use rand::rngs::StdRng;
use rand::SeedableRng;
use serde::{Deserialize, Serialize};

use crate::errors::AppError;
use crate::extract::ApiJson;
use crate::generation::generator::{generate_ideas, resolve_count};
use crate::generation::pitch::IdeaDetail;
use crate::models::{Idea, Profile, ProfileRequest};

// ────────────────────────────────────────────────────────────────────────────
// Request / Response types
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Deserialize)]
pub struct GenerateIdeasRequest {
    pub profile: ProfileRequest,
    pub count: Option<usize>,
}

#[derive(Debug, Serialize)]
pub struct GenerateIdeasResponse {
    pub profile: Profile,
    pub ideas: Vec<Idea>,
}

#[derive(Debug, Deserialize)]
pub struct IdeaDetailRequest {
    pub profile: ProfileRequest,
    pub title: String,
}

// ────────────────────────────────────────────────────────────────────────────
// Handlers
// ────────────────────────────────────────────────────────────────────────────

/// POST /api/v1/ideas
///
/// Returns up to `count` (default 8) unique ideas for the given profile.
pub async fn handle_generate_ideas(
    ApiJson(request): ApiJson<GenerateIdeasRequest>,
) -> Result<Json<GenerateIdeasResponse>, AppError> {
    let profile = Profile::from_request(request.profile)?;
    let count = resolve_count(request.count)?;

    let ideas = generate_ideas(&profile, count, &mut StdRng::from_entropy());

    Ok(Json(GenerateIdeasResponse { profile, ideas }))
}

/// POST /api/v1/ideas/details
///
/// Abstract, takeaways and fit reasons for one title.
pub async fn handle_idea_detail(
    ApiJson(request): ApiJson<IdeaDetailRequest>,
) -> Result<Json<IdeaDetail>, AppError> {
    let title = request.title.trim();
    if title.is_empty() {
        return Err(AppError::Validation("title cannot be empty".to_string()));
    }

    let profile = Profile::from_request(request.profile)?;
    let detail = IdeaDetail::generate(title, &profile, &mut StdRng::from_entropy());

    Ok(Json(detail))
}
