//! Axum route handlers for the Session API.

use axum::{
    body::Bytes,
    extract::{Path, State},
    http::{header, HeaderMap, HeaderValue, StatusCode},
    Json,
};
use rand::rngs::StdRng;
use rand::SeedableRng;
use serde::{Deserialize, Serialize};
use tracing::{info, warn};
use uuid::Uuid;

use crate::errors::AppError;
use crate::extract::ApiJson;
use crate::generation::download::{download_filename, render_download};
use crate::generation::generator::{generate_ideas, resolve_count};
use crate::generation::pitch::IdeaDetail;
use crate::llm_client::prompts::{build_system_prompt, QuickPrompt};
use crate::llm_client::ChatMessage;
use crate::models::{Idea, Profile, ProfileRequest};
use crate::session::{DetailSection, Session, SessionView};
use crate::state::AppState;

// ────────────────────────────────────────────────────────────────────────────
// Request / Response types
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Deserialize)]
pub struct CreateSessionRequest {
    pub profile: ProfileRequest,
    pub count: Option<usize>,
}

#[derive(Debug, Default, Deserialize)]
pub struct RegenerateIdeasRequest {
    #[serde(default)]
    pub count: Option<usize>,
}

#[derive(Debug, Deserialize)]
pub struct RegenerateSectionRequest {
    pub section: DetailSection,
}

#[derive(Debug, Deserialize)]
pub struct EditAbstractRequest {
    pub text: String,
}

/// Exactly one of `message` or `quick_prompt`.
#[derive(Debug, Deserialize)]
pub struct ChatRequest {
    pub message: Option<String>,
    pub quick_prompt: Option<QuickPrompt>,
}

#[derive(Debug, Serialize)]
pub struct IdeaDetailResponse {
    pub index: usize,
    pub idea: Idea,
    #[serde(flatten)]
    pub detail: IdeaDetail,
}

#[derive(Debug, Serialize)]
pub struct ChatResponse {
    pub reply: String,
    pub transcript: Vec<ChatMessage>,
}

// ────────────────────────────────────────────────────────────────────────────
// Handlers
// ────────────────────────────────────────────────────────────────────────────

/// POST /api/v1/sessions
///
/// Validates the profile, generates the first idea pool and opens a session.
pub async fn handle_create_session(
    State(state): State<AppState>,
    ApiJson(request): ApiJson<CreateSessionRequest>,
) -> Result<(StatusCode, Json<SessionView>), AppError> {
    let profile = Profile::from_request(request.profile)?;
    let count = resolve_count(request.count)?;

    let ideas = generate_ideas(&profile, count, &mut StdRng::from_entropy());
    let session = Session::new(profile, ideas);
    info!(
        "Created session {} with {} ideas",
        session.id,
        session.ideas.len()
    );

    let view = state.sessions.insert(session).await;
    Ok((StatusCode::CREATED, Json(view)))
}

/// GET /api/v1/sessions/:id
pub async fn handle_get_session(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<SessionView>, AppError> {
    let view = state.sessions.with_session(id, |s| Ok(s.view())).await?;
    Ok(Json(view))
}

/// DELETE /api/v1/sessions/:id
pub async fn handle_delete_session(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<StatusCode, AppError> {
    state.sessions.remove(id).await?;
    info!(
        "Removed session {id} ({} still active)",
        state.sessions.len().await
    );
    Ok(StatusCode::NO_CONTENT)
}

/// POST /api/v1/sessions/:id/ideas
///
/// Draws a fresh pool from the same profile. Selection, cached detail text and
/// the chat transcript are discarded.
pub async fn handle_regenerate_ideas(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    body: Bytes,
) -> Result<Json<SessionView>, AppError> {
    let request = regenerate_ideas_request(&body)?;
    let count = resolve_count(request.count)?;
    let mut rng = StdRng::from_entropy();

    let view = state
        .sessions
        .with_session(id, |session| {
            let ideas = generate_ideas(&session.profile, count, &mut rng);
            session.replace_ideas(ideas);
            Ok(session.view())
        })
        .await?;

    Ok(Json(view))
}

/// POST /api/v1/sessions/:id/ideas/:index/select
///
/// Selects an idea for refinement and returns its detail view.
pub async fn handle_select_idea(
    State(state): State<AppState>,
    Path((id, index)): Path<(Uuid, usize)>,
) -> Result<Json<IdeaDetailResponse>, AppError> {
    let mut rng = StdRng::from_entropy();

    let response = state
        .sessions
        .with_session(id, |session| {
            let detail = session.select(index, &mut rng)?;
            Ok(IdeaDetailResponse {
                index,
                idea: session.idea(index)?.clone(),
                detail,
            })
        })
        .await?;

    Ok(Json(response))
}

/// POST /api/v1/sessions/:id/ideas/:index/regenerate
pub async fn handle_regenerate_section(
    State(state): State<AppState>,
    Path((id, index)): Path<(Uuid, usize)>,
    ApiJson(request): ApiJson<RegenerateSectionRequest>,
) -> Result<Json<IdeaDetailResponse>, AppError> {
    let mut rng = StdRng::from_entropy();

    let response = state
        .sessions
        .with_session(id, |session| {
            let detail = session.regenerate(index, request.section, &mut rng)?;
            Ok(IdeaDetailResponse {
                index,
                idea: session.idea(index)?.clone(),
                detail,
            })
        })
        .await?;

    Ok(Json(response))
}

/// PUT /api/v1/sessions/:id/ideas/:index/abstract
pub async fn handle_edit_abstract(
    State(state): State<AppState>,
    Path((id, index)): Path<(Uuid, usize)>,
    ApiJson(request): ApiJson<EditAbstractRequest>,
) -> Result<Json<IdeaDetailResponse>, AppError> {
    let mut rng = StdRng::from_entropy();

    let response = state
        .sessions
        .with_session(id, |session| {
            let detail = session.edit_abstract(index, request.text, &mut rng)?;
            Ok(IdeaDetailResponse {
                index,
                idea: session.idea(index)?.clone(),
                detail,
            })
        })
        .await?;

    Ok(Json(response))
}

/// POST /api/v1/sessions/:id/chat
///
/// Sends the transcript plus one new user turn to the assistant. The
/// transcript only grows when the assistant answers.
pub async fn handle_chat(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    ApiJson(request): ApiJson<ChatRequest>,
) -> Result<Json<ChatResponse>, AppError> {
    let assistant = state
        .assistant
        .clone()
        .ok_or(AppError::AssistantNotConfigured)?;

    let (messages, user_text, epoch) = state
        .sessions
        .with_session(id, |session| {
            let (index, idea) = session.selected_idea()?;

            let user_text = match (&request.message, request.quick_prompt) {
                (Some(message), None) if !message.trim().is_empty() => message.trim().to_string(),
                (None, Some(prompt)) => prompt.render(
                    &idea.title,
                    session.cached_abstract(index).unwrap_or_default(),
                ),
                _ => {
                    return Err(AppError::Validation(
                        "Provide either a non-empty message or a quick_prompt".to_string(),
                    ))
                }
            };

            let mut messages = Vec::with_capacity(session.transcript.len() + 2);
            messages.push(ChatMessage::system(build_system_prompt(
                &session.profile,
                idea,
            )));
            messages.extend(session.transcript.iter().cloned());
            messages.push(ChatMessage::user(user_text.clone()));

            Ok((messages, user_text, session.selection_epoch()))
        })
        .await?;

    let reply = assistant
        .complete(&messages)
        .await
        .map_err(|e| AppError::Llm(e.to_string()))?;

    let transcript = state
        .sessions
        .with_session(id, |session| {
            let recorded = session.record_exchange(
                epoch,
                ChatMessage::user(user_text),
                ChatMessage::assistant(reply.clone()),
            );
            if !recorded {
                warn!("Session {id}: selection changed during chat, reply not recorded");
            }
            Ok(session.transcript.clone())
        })
        .await?;

    Ok(Json(ChatResponse { reply, transcript }))
}

/// GET /api/v1/sessions/:id/download
///
/// Plain-text export of the current pool, served as an attachment.
pub async fn handle_download(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<(HeaderMap, String), AppError> {
    let mut rng = StdRng::from_entropy();

    let (body, filename) = state
        .sessions
        .with_session(id, |session| {
            Ok((
                render_download(&session.ideas, &session.profile, &mut rng),
                download_filename(&session.profile),
            ))
        })
        .await?;

    let mut headers = HeaderMap::new();
    headers.insert(
        header::CONTENT_TYPE,
        HeaderValue::from_static("text/plain; charset=utf-8"),
    );
    headers.insert(header::CONTENT_DISPOSITION, attachment_header(&filename)?);

    Ok((headers, body))
}

/// The body is optional here; an empty one means "default count".
fn regenerate_ideas_request(body: &[u8]) -> Result<RegenerateIdeasRequest, AppError> {
    if body.iter().all(u8::is_ascii_whitespace) {
        return Ok(RegenerateIdeasRequest::default());
    }
    serde_json::from_slice(body)
        .map_err(|e| AppError::Validation(format!("Failed to parse the request body as JSON: {e}")))
}

/// Header values must be visible ASCII; anything else in a speaker's name
/// becomes an underscore.
fn attachment_header(filename: &str) -> Result<HeaderValue, AppError> {
    let safe: String = filename
        .chars()
        .map(|c| {
            if c.is_ascii_graphic() && c != '"' && c != '\\' {
                c
            } else {
                '_'
            }
        })
        .collect();

    HeaderValue::from_str(&format!("attachment; filename=\"{safe}\""))
        .map_err(|e| AppError::Internal(anyhow::anyhow!("Invalid download header: {e}")))
}
