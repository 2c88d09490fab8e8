use serde::{Deserialize, Serialize};

use crate::catalog;
use crate::errors::AppError;

/// Topics used when a speaker lists neither expertise nor interests.
pub const DEFAULT_TOPICS: &[&str] = &["technology", "software development", "best practices"];

pub const AUDIENCE_TIERS: &[&str] = &["beginners", "intermediate", "advanced", "mixed"];

pub const DEFAULT_AUDIENCE: &str = "mixed";
pub const DEFAULT_FORMAT: &str = "talk";
pub const DEFAULT_SPEAKER: &str = "Speaker";

/// Only this many recent projects feed experience-based ideas.
pub const MAX_PROJECTS: usize = 3;

/// The speaker's self-described inputs plus optional conference context.
///
/// Built once per session and read-only afterwards. List entries are trimmed
/// and non-empty when constructed through [`Profile::from_request`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Profile {
    pub name: String,
    pub expertise_areas: Vec<String>,
    pub recent_projects: Vec<String>,
    pub interests: Vec<String>,
    pub target_audience: String,
    pub talk_format: String,
    pub conference_name: Option<String>,
    pub conference_track: Option<String>,
}

impl Profile {
    /// Expertise followed by interests, or the default triad when both are empty.
    pub fn all_topics(&self) -> Vec<&str> {
        let topics: Vec<&str> = self
            .expertise_areas
            .iter()
            .chain(self.interests.iter())
            .map(String::as_str)
            .collect();

        if topics.is_empty() {
            DEFAULT_TOPICS.to_vec()
        } else {
            topics
        }
    }

    pub fn story_projects(&self) -> &[String] {
        let end = self.recent_projects.len().min(MAX_PROJECTS);
        &self.recent_projects[..end]
    }

    pub fn track(&self) -> Option<&str> {
        self.conference_track.as_deref()
    }

    pub fn conference(&self) -> Option<&str> {
        self.conference_name.as_deref()
    }

    /// Validates a request and resolves its conference context against the catalog.
    pub fn from_request(request: ProfileRequest) -> Result<Self, AppError> {
        let name = request
            .name
            .as_deref()
            .map(str::trim)
            .filter(|n| !n.is_empty())
            .unwrap_or(DEFAULT_SPEAKER)
            .to_string();

        let target_audience = request
            .target_audience
            .as_deref()
            .map(|a| a.trim().to_lowercase())
            .filter(|a| !a.is_empty())
            .unwrap_or_else(|| DEFAULT_AUDIENCE.to_string());

        if !AUDIENCE_TIERS.contains(&target_audience.as_str()) {
            return Err(AppError::Validation(format!(
                "target_audience must be one of {}, got '{}'",
                AUDIENCE_TIERS.join(", "),
                target_audience
            )));
        }

        let selection = catalog::resolve_selection(
            request.conference.as_deref(),
            request.track.as_deref(),
            request.talk_format.as_deref(),
        )?;

        Ok(Profile {
            name,
            expertise_areas: request.expertise.into_items(),
            recent_projects: request.recent_projects.into_items(),
            interests: request.interests.into_items(),
            target_audience,
            talk_format: selection.talk_format,
            conference_name: selection.conference_name,
            conference_track: selection.conference_track,
        })
    }
}

/// A list field as typed by the speaker: either a JSON array or one
/// comma-separated string.
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum ListInput {
    Items(Vec<String>),
    Text(String),
}

impl Default for ListInput {
    fn default() -> Self {
        ListInput::Items(Vec::new())
    }
}

impl ListInput {
    /// Trims every entry and drops blanks, preserving order.
    pub fn into_items(self) -> Vec<String> {
        let raw: Vec<String> = match self {
            ListInput::Items(items) => items,
            ListInput::Text(text) => text.split(',').map(str::to_string).collect(),
        };

        raw.into_iter()
            .map(|item| item.trim().to_string())
            .filter(|item| !item.is_empty())
            .collect()
    }
}

/// Profile fields as submitted by a front end.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ProfileRequest {
    pub name: Option<String>,
    #[serde(default)]
    pub expertise: ListInput,
    #[serde(default)]
    pub recent_projects: ListInput,
    #[serde(default)]
    pub interests: ListInput,
    pub target_audience: Option<String>,
    pub talk_format: Option<String>,
    pub conference: Option<String>,
    pub track: Option<String>,
}
