//! Session-scoped state: one profile, its idea pool, the selected idea, cached
//! per-idea detail text and the assistant transcript.
//!
//! The generation core stays stateless; everything a front end needs to
//! remember between calls lives here, keyed by session id.

pub mod handlers;

use std::collections::hash_map::Entry;
use std::collections::HashMap;
use std::sync::Arc;

use chrono::{DateTime, Duration, Utc};
use rand::Rng;
use serde::{Deserialize, Serialize};
use tokio::sync::RwLock;
use tracing::info;
use uuid::Uuid;

use crate::errors::AppError;
use crate::generation::pitch::{
    generate_abstract, generate_fit_reasons, generate_takeaways, IdeaDetail,
};
use crate::llm_client::ChatMessage;
use crate::models::{Idea, Profile};

/// One section of an idea's detail view.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DetailSection {
    Abstract,
    Takeaways,
    FitReasons,
}

#[derive(Debug, Clone)]
pub struct Session {
    pub id: Uuid,
    pub profile: Profile,
    pub ideas: Vec<Idea>,
    pub selected: Option<usize>,
    /// Bumped on every selection and pool swap. A chat reply is only recorded
    /// if this is unchanged since the request was built.
    selection_epoch: u64,
    /// Detail text per idea index, generated on first view.
    details: HashMap<usize, IdeaDetail>,
    /// Conversation about the selected idea. Reset whenever the selection changes.
    pub transcript: Vec<ChatMessage>,
    pub created_at: DateTime<Utc>,
    pub last_active: DateTime<Utc>,
}

/// What callers see of a session.
#[derive(Debug, Clone, Serialize)]
pub struct SessionView {
    pub id: Uuid,
    pub profile: Profile,
    pub ideas: Vec<Idea>,
    pub selected: Option<usize>,
    pub transcript: Vec<ChatMessage>,
    pub created_at: DateTime<Utc>,
}

impl Session {
    pub fn new(profile: Profile, ideas: Vec<Idea>) -> Self {
        let now = Utc::now();
        Self {
            id: Uuid::new_v4(),
            profile,
            ideas,
            selected: None,
            selection_epoch: 0,
            details: HashMap::new(),
            transcript: Vec::new(),
            created_at: now,
            last_active: now,
        }
    }

    /// Swaps in a new pool. Indices change meaning, so selection, cached
    /// detail text and the transcript are all dropped.
    pub fn replace_ideas(&mut self, ideas: Vec<Idea>) {
        self.ideas = ideas;
        self.selected = None;
        self.selection_epoch += 1;
        self.details.clear();
        self.transcript.clear();
    }

    pub fn idea(&self, index: usize) -> Result<&Idea, AppError> {
        self.ideas.get(index).ok_or_else(|| {
            AppError::NotFound(format!(
                "Idea {index} not found (session has {} ideas)",
                self.ideas.len()
            ))
        })
    }

    /// Cached detail for an idea, generating it on first access.
    pub fn detail<R: Rng + ?Sized>(
        &mut self,
        index: usize,
        rng: &mut R,
    ) -> Result<IdeaDetail, AppError> {
        let title = self.idea(index)?.title.clone();
        let detail = cached_detail(&mut self.details, index, &title, &self.profile, rng);
        Ok(detail.clone())
    }

    /// Selects an idea for refinement and starts a fresh conversation.
    pub fn select<R: Rng + ?Sized>(
        &mut self,
        index: usize,
        rng: &mut R,
    ) -> Result<IdeaDetail, AppError> {
        let detail = self.detail(index, rng)?;
        self.selected = Some(index);
        self.selection_epoch += 1;
        self.transcript.clear();
        Ok(detail)
    }

    /// Redraws one section of an idea's detail, leaving the others untouched.
    pub fn regenerate<R: Rng + ?Sized>(
        &mut self,
        index: usize,
        section: DetailSection,
        rng: &mut R,
    ) -> Result<IdeaDetail, AppError> {
        let title = self.idea(index)?.title.clone();
        let profile = &self.profile;
        let detail = cached_detail(&mut self.details, index, &title, profile, rng);

        match section {
            DetailSection::Abstract => detail.abstract_text = generate_abstract(&title, profile, rng),
            DetailSection::Takeaways => detail.takeaways = generate_takeaways(&title, profile, rng),
            DetailSection::FitReasons => detail.fit_reasons = generate_fit_reasons(&title, profile),
        }

        Ok(detail.clone())
    }

    /// Stores a speaker-edited abstract in place of the generated one.
    pub fn edit_abstract<R: Rng + ?Sized>(
        &mut self,
        index: usize,
        text: String,
        rng: &mut R,
    ) -> Result<IdeaDetail, AppError> {
        let title = self.idea(index)?.title.clone();
        let detail = cached_detail(&mut self.details, index, &title, &self.profile, rng);
        detail.abstract_text = text;
        Ok(detail.clone())
    }

    pub fn cached_abstract(&self, index: usize) -> Option<&str> {
        self.details.get(&index).map(|d| d.abstract_text.as_str())
    }

    pub fn selected_idea(&self) -> Result<(usize, &Idea), AppError> {
        let index = self.selected.ok_or_else(|| {
            AppError::Validation("Select an idea before chatting with the assistant".to_string())
        })?;
        Ok((index, self.idea(index)?))
    }

    pub fn selection_epoch(&self) -> u64 {
        self.selection_epoch
    }

    /// Appends a completed exchange, unless the idea was reselected or the
    /// pool replaced while the assistant was answering. Returns whether it
    /// was recorded.
    pub fn record_exchange(&mut self, epoch: u64, user: ChatMessage, reply: ChatMessage) -> bool {
        if self.selection_epoch != epoch {
            return false;
        }
        self.transcript.push(user);
        self.transcript.push(reply);
        true
    }

    pub fn is_expired(&self, now: DateTime<Utc>, ttl: Duration) -> bool {
        now - self.last_active > ttl
    }

    pub fn view(&self) -> SessionView {
        SessionView {
            id: self.id,
            profile: self.profile.clone(),
            ideas: self.ideas.clone(),
            selected: self.selected,
            transcript: self.transcript.clone(),
            created_at: self.created_at,
        }
    }
}

fn cached_detail<'a, R: Rng + ?Sized>(
    details: &'a mut HashMap<usize, IdeaDetail>,
    index: usize,
    title: &str,
    profile: &Profile,
    rng: &mut R,
) -> &'a mut IdeaDetail {
    match details.entry(index) {
        Entry::Occupied(entry) => entry.into_mut(),
        Entry::Vacant(entry) => entry.insert(IdeaDetail::generate(title, profile, rng)),
    }
}

/// In-memory session map shared by all handlers.
#[derive(Clone)]
pub struct SessionStore {
    sessions: Arc<RwLock<HashMap<Uuid, Session>>>,
    ttl: Duration,
}

impl SessionStore {
    pub fn new(ttl: Duration) -> Self {
        Self {
            sessions: Arc::new(RwLock::new(HashMap::new())),
            ttl,
        }
    }

    /// Stores a new session, purging idle ones first.
    pub async fn insert(&self, session: Session) -> SessionView {
        let now = Utc::now();
        let mut sessions = self.sessions.write().await;

        let before = sessions.len();
        sessions.retain(|_, s| !s.is_expired(now, self.ttl));
        let purged = before - sessions.len();
        if purged > 0 {
            info!("Purged {purged} expired sessions");
        }

        let view = session.view();
        sessions.insert(session.id, session);
        view
    }

    /// Runs `f` against a live session and marks it active.
    pub async fn with_session<T, F>(&self, id: Uuid, f: F) -> Result<T, AppError>
    where
        F: FnOnce(&mut Session) -> Result<T, AppError>,
    {
        let now = Utc::now();
        let mut sessions = self.sessions.write().await;
        let session = sessions
            .get_mut(&id)
            .filter(|s| !s.is_expired(now, self.ttl))
            .ok_or_else(|| AppError::NotFound(format!("Session {id} not found")))?;

        session.last_active = now;
        f(session)
    }

    pub async fn remove(&self, id: Uuid) -> Result<(), AppError> {
        self.sessions
            .write()
            .await
            .remove(&id)
            .map(|_| ())
            .ok_or_else(|| AppError::NotFound(format!("Session {id} not found")))
    }

    pub async fn len(&self) -> usize {
        self.sessions.read().await.len()
    }
}
