//! Plain-text download of an idea list. Each idea gets a freshly drawn abstract.

use rand::Rng;

use crate::generation::pitch::generate_abstract;
use crate::models::{Idea, Profile};

const RULE_WIDTH: usize = 50;

pub fn render_download<R: Rng + ?Sized>(ideas: &[Idea], profile: &Profile, rng: &mut R) -> String {
    let mut lines = vec![
        format!("CFP Ideas for {}", profile.name),
        format!(
            "Format: {} | Audience: {}",
            profile.talk_format, profile.target_audience
        ),
    ];
    if let Some(conference) = profile.conference() {
        lines.push(format!("Conference: {conference}"));
    }
    if let Some(track) = profile.track() {
        lines.push(format!("Track: {track}"));
    }
    lines.push(format!("{}\n", "=".repeat(RULE_WIDTH)));

    for (i, idea) in ideas.iter().enumerate() {
        lines.push(format!("Idea #{}: {}", i + 1, idea.title));
        lines.push(format!("Type: {} | Topic: {}", idea.kind, idea.topic));
        lines.push(format!(
            "Abstract: {}",
            generate_abstract(&idea.title, profile, rng)
        ));
        lines.push(String::new());
    }

    lines.join("\n")
}

/// `cfp_ideas_<name>.txt`, name lowercased with spaces turned into underscores.
pub fn download_filename(profile: &Profile) -> String {
    format!(
        "cfp_ideas_{}.txt",
        profile.name.to_lowercase().replace(' ', "_")
    )
}
