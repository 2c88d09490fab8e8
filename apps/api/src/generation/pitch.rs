//! Derived text for a single idea: abstract, key takeaways, fit reasons.
//!
//! Stateless. Each function reads only the idea title and the profile; the
//! random ones draw from the supplied source.

use rand::seq::SliceRandom;
use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::models::Profile;

/// Takeaways and fit reasons are both capped at this many entries.
pub const MAX_POINTS: usize = 5;

/// Everything shown on an idea's detail view.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IdeaDetail {
    #[serde(rename = "abstract")]
    pub abstract_text: String,
    pub takeaways: Vec<String>,
    pub fit_reasons: Vec<String>,
}

impl IdeaDetail {
    pub fn generate<R: Rng + ?Sized>(title: &str, profile: &Profile, rng: &mut R) -> Self {
        Self {
            abstract_text: generate_abstract(title, profile, rng),
            takeaways: generate_takeaways(title, profile, rng),
            fit_reasons: generate_fit_reasons(title, profile),
        }
    }
}

/// One of four abstract sentences. Conference and track mentions are left out
/// entirely when unset.
pub fn generate_abstract<R: Rng + ?Sized>(title: &str, profile: &Profile, rng: &mut R) -> String {
    let topic = title.to_lowercase();
    let talk_format = &profile.talk_format;
    let audience = &profile.target_audience;
    let track_mention = profile
        .track()
        .map(|track| format!(" in the {track} space"))
        .unwrap_or_default();
    let conference_mention = profile
        .conference()
        .map(|conference| format!(" at {conference}"))
        .unwrap_or_default();

    let mut abstracts = vec![
        format!(
            "In this {talk_format}, we'll explore {topic}{track_mention} and share practical insights from real-world experience."
        ),
        format!("Join us for an engaging session on {topic}. Perfect for {audience}{conference_mention}."),
        format!("This {talk_format} covers {topic}, with actionable takeaways you can apply immediately."),
        format!(
            "Discover the key concepts behind {topic} and learn how to apply them in your own projects{track_mention}."
        ),
    ];

    let pick = rng.gen_range(0..abstracts.len());
    abstracts.swap_remove(pick)
}

/// Five distinct takeaways sampled from the generic list, extended with
/// tier-specific entries for beginners and advanced audiences.
pub fn generate_takeaways<R: Rng + ?Sized>(
    title: &str,
    profile: &Profile,
    rng: &mut R,
) -> Vec<String> {
    let topic = title.to_lowercase();

    let mut candidates = vec![
        format!("Understand the core principles of {topic}"),
        format!("Learn practical techniques for implementing {topic}"),
        "Identify common pitfalls and how to avoid them".to_string(),
        "Gain hands-on experience with real-world examples".to_string(),
        format!("Develop a framework for evaluating {topic} solutions"),
        "Discover best practices used by industry leaders".to_string(),
        "Walk away with actionable steps to apply immediately".to_string(),
        format!("Build confidence in working with {topic}"),
    ];

    match profile.target_audience.as_str() {
        "beginners" => candidates.extend([
            "Get a solid foundation in fundamental concepts".to_string(),
            "Learn the essential vocabulary and mental models".to_string(),
        ]),
        "advanced" => candidates.extend([
            "Explore edge cases and advanced optimization techniques".to_string(),
            "Deep dive into internals and architecture decisions".to_string(),
        ]),
        _ => {}
    }

    let amount = MAX_POINTS.min(candidates.len());
    candidates.choose_multiple(rng, amount).cloned().collect()
}

/// Conference and track reasons first, then the generic pool, then a
/// format-specific closer; truncated to five in that order.
///
/// With both conference and track set the closer never survives the cut.
pub fn generate_fit_reasons(_title: &str, profile: &Profile) -> Vec<String> {
    let mut reasons = Vec::with_capacity(8);

    if let Some(conference) = profile.conference() {
        reasons.push(format!(
            "Aligns with {conference}'s focus on practical, actionable content"
        ));
    }
    if let Some(track) = profile.track() {
        reasons.push(format!("Directly relevant to the {track} track"));
    }

    reasons.extend([
        "Addresses current industry trends and challenges".to_string(),
        "Provides unique insights from hands-on experience".to_string(),
        format!(
            "Suitable for {} audience with clear learning outcomes",
            profile.target_audience
        ),
        "Combines theoretical foundation with practical application".to_string(),
        "Fills a gap in existing conference content".to_string(),
    ]);

    match profile.talk_format.as_str() {
        "workshop" | "tutorial" => {
            reasons.push("Hands-on format ensures attendees leave with real skills".to_string())
        }
        "lightning" => {
            reasons.push("Concise format delivers high-impact insights quickly".to_string())
        }
        _ => {}
    }

    reasons.truncate(MAX_POINTS);
    reasons
}
