use std::fmt;

use serde::{Deserialize, Serialize};

/// Which generation strategy produced an idea.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum IdeaKind {
    AngleBased,
    CrossPollination,
    ExperienceBased,
    FormatSpecific,
    AudienceTargeted,
    TrackAligned,
}

impl IdeaKind {
    /// Every strategy, in the order the pool is built.
    pub const ALL: [IdeaKind; 6] = [
        IdeaKind::AngleBased,
        IdeaKind::CrossPollination,
        IdeaKind::ExperienceBased,
        IdeaKind::FormatSpecific,
        IdeaKind::AudienceTargeted,
        IdeaKind::TrackAligned,
    ];

    pub fn tag(self) -> &'static str {
        match self {
            IdeaKind::AngleBased => "angle-based",
            IdeaKind::CrossPollination => "cross-pollination",
            IdeaKind::ExperienceBased => "experience-based",
            IdeaKind::FormatSpecific => "format-specific",
            IdeaKind::AudienceTargeted => "audience-targeted",
            IdeaKind::TrackAligned => "track-aligned",
        }
    }
}

impl fmt::Display for IdeaKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.tag())
    }
}

/// A candidate talk title. Identity is the lowercased title only.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Idea {
    pub title: String,
    #[serde(rename = "type")]
    pub kind: IdeaKind,
    /// Source topic(s) the title was built from. Informational.
    pub topic: String,
}

impl Idea {
    pub fn new(title: impl Into<String>, kind: IdeaKind, topic: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            kind,
            topic: topic.into(),
        }
    }

    /// Key used for case-insensitive deduplication.
    pub fn dedup_key(&self) -> String {
        self.title.to_lowercase()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_kind_serializes_as_kebab_tag() {
        for kind in IdeaKind::ALL {
            let json = serde_json::to_string(&kind).unwrap();
            assert_eq!(json, format!("\"{}\"", kind.tag()));
        }
    }

    #[test]
    fn test_idea_serializes_kind_under_type_key() {
        let idea = Idea::new("Demystifying Rust", IdeaKind::AngleBased, "Rust");
        let value = serde_json::to_value(&idea).unwrap();
        assert_eq!(value["type"], "angle-based");
        assert_eq!(value["topic"], "Rust");
        assert!(value.get("kind").is_none());
    }

    #[test]
    fn test_dedup_key_ignores_case() {
        let a = Idea::new("Rust For Observability", IdeaKind::TrackAligned, "rust");
        let b = Idea::new("rust for observability", IdeaKind::AngleBased, "Rust");
        assert_eq!(a.dedup_key(), b.dedup_key());
    }
}
