//! Conference catalog — static conference → tracks → formats table.
//!
//! Only the profile-construction step reads this. Generation never does; it
//! receives the already-resolved track and format strings on the `Profile`.

use serde::Serialize;

use crate::errors::AppError;
use crate::models::profile::DEFAULT_FORMAT;

/// Catalog entry for conferences not in the list. Resolves to "no conference name".
pub const CUSTOM_CONFERENCE: &str = "Other / Custom";

#[derive(Debug, Clone, Copy, Serialize)]
pub struct Conference {
    pub name: &'static str,
    pub tracks: &'static [&'static str],
    pub formats: &'static [&'static str],
}

pub const CONFERENCES: &[Conference] = &[
    Conference {
        name: "PyCon US",
        tracks: &[
            "Python Language",
            "Web Development",
            "Data Science & ML",
            "DevOps & Infrastructure",
            "Testing & Quality",
            "Community & Education",
            "Security",
        ],
        formats: &["talk", "tutorial", "lightning", "poster"],
    },
    Conference {
        name: "KubeCon",
        tracks: &[
            "Application Development",
            "CI/CD & GitOps",
            "Customization & Extensibility",
            "Observability",
            "Operations & Performance",
            "Platform Engineering",
            "Security & Identity",
            "Serverless & Edge",
        ],
        formats: &["talk", "tutorial", "lightning"],
    },
    Conference {
        name: "AWS re:Invent",
        tracks: &[
            "Architecture",
            "Compute",
            "Containers",
            "Data & Analytics",
            "Databases",
            "DevOps",
            "Machine Learning",
            "Networking",
            "Security",
            "Serverless",
        ],
        formats: &["talk", "workshop", "chalk talk"],
    },
    Conference {
        name: "Google Cloud Next",
        tracks: &[
            "AI & Machine Learning",
            "Application Development",
            "Data Analytics",
            "Infrastructure & Operations",
            "Security",
            "Collaboration & Productivity",
        ],
        formats: &["talk", "workshop", "lightning"],
    },
    Conference {
        name: "Strange Loop",
        tracks: &[
            "Programming Languages",
            "Distributed Systems",
            "Databases",
            "Security",
            "Developer Experience",
            "Emerging Technology",
        ],
        formats: &["talk", "lightning"],
    },
    Conference {
        name: "DjangoCon",
        tracks: &[
            "Django Internals",
            "Web Development",
            "APIs & Services",
            "Testing & Debugging",
            "Deployment & DevOps",
            "Community & Career",
        ],
        formats: &["talk", "tutorial", "lightning"],
    },
    Conference {
        name: "ReactConf",
        tracks: &[
            "React Core",
            "State Management",
            "Performance",
            "Testing",
            "React Native",
            "Tooling & DX",
        ],
        formats: &["talk", "lightning"],
    },
    Conference {
        name: "DockerCon",
        tracks: &[
            "Container Fundamentals",
            "Docker Compose & Swarm",
            "CI/CD Pipelines",
            "Security & Compliance",
            "Developer Workflows",
            "Production Best Practices",
        ],
        formats: &["talk", "workshop", "lightning"],
    },
    Conference {
        name: CUSTOM_CONFERENCE,
        tracks: &[],
        formats: &["talk", "workshop", "lightning"],
    },
];

pub fn all() -> &'static [Conference] {
    CONFERENCES
}

/// Exact-name lookup.
pub fn find(name: &str) -> Option<&'static Conference> {
    CONFERENCES.iter().find(|c| c.name == name)
}

/// Conference context after validation, ready to copy onto a `Profile`.
#[derive(Debug, Clone, PartialEq)]
pub struct Selection {
    pub conference_name: Option<String>,
    pub conference_track: Option<String>,
    pub talk_format: String,
}

/// Resolves raw conference/track/format input.
///
/// Rules:
/// - no conference: track is free text, any format key is accepted
/// - catalog conference with tracks: track (if given) must be one of them
/// - catalog conference without tracks (custom): track is free text
/// - catalog conference: format must be one it supports
/// - the custom entry resolves to `conference_name = None`
pub fn resolve_selection(
    conference: Option<&str>,
    track: Option<&str>,
    talk_format: Option<&str>,
) -> Result<Selection, AppError> {
    let conference = non_blank(conference);
    let track = non_blank(track);
    let talk_format = non_blank(talk_format)
        .map(|f| f.to_lowercase())
        .unwrap_or_else(|| DEFAULT_FORMAT.to_string());

    let Some(conference) = conference else {
        return Ok(Selection {
            conference_name: None,
            conference_track: track.map(str::to_string),
            talk_format,
        });
    };

    let entry = find(conference)
        .ok_or_else(|| AppError::Validation(format!("Unknown conference '{conference}'")))?;

    if let Some(track) = track {
        if !entry.tracks.is_empty() && !entry.tracks.contains(&track) {
            return Err(AppError::Validation(format!(
                "Track '{track}' is not offered by {}",
                entry.name
            )));
        }
    }

    if !entry.formats.contains(&talk_format.as_str()) {
        return Err(AppError::Validation(format!(
            "Format '{talk_format}' is not supported by {} (supported: {})",
            entry.name,
            entry.formats.join(", ")
        )));
    }

    Ok(Selection {
        conference_name: (entry.name != CUSTOM_CONFERENCE).then(|| entry.name.to_string()),
        conference_track: track.map(str::to_string),
        talk_format,
    })
}

fn non_blank(value: Option<&str>) -> Option<&str> {
    value.map(str::trim).filter(|v| !v.is_empty())
}
