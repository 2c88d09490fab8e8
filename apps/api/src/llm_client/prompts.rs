// Prompt builders for the CFP writing assistant.

use serde::{Deserialize, Serialize};

use crate::models::{Idea, Profile};

const NOT_SPECIFIED: &str = "Not specified";

/// System prompt framing the assistant around one idea and its speaker.
pub fn build_system_prompt(profile: &Profile, idea: &Idea) -> String {
    let expertise = if profile.expertise_areas.is_empty() {
        NOT_SPECIFIED.to_string()
    } else {
        profile.expertise_areas.join(", ")
    };

    format!(
        "You are a helpful CFP (Call for Papers) writing assistant. \
You're helping a speaker named {name} develop their conference talk idea.

Talk Details:
- Title: {title}
- Format: {format}
- Target Audience: {audience}
- Conference: {conference}
- Track: {track}
- Speaker's Expertise: {expertise}

Help them refine their abstract, develop talking points, suggest examples, \
and improve their submission. Be encouraging but also provide constructive feedback.",
        name = profile.name,
        title = idea.title,
        format = profile.talk_format,
        audience = profile.target_audience,
        conference = profile.conference().unwrap_or(NOT_SPECIFIED),
        track = profile.track().unwrap_or(NOT_SPECIFIED),
        expertise = expertise,
    )
}

/// Canned requests offered next to the free-text chat box.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum QuickPrompt {
    ImproveAbstract,
    SuggestExamples,
    SharpenFocus,
    AnticipateQa,
}

impl QuickPrompt {
    /// Renders the user message. `current_abstract` is only read by
    /// `ImproveAbstract`; pass an empty string when none is cached.
    pub fn render(self, title: &str, current_abstract: &str) -> String {
        match self {
            QuickPrompt::ImproveAbstract => format!(
                "Please help me improve this abstract for my talk '{title}': {current_abstract}"
            ),
            QuickPrompt::SuggestExamples => format!(
                "What are some good real-world examples or case studies I could include in my talk about '{title}'?"
            ),
            QuickPrompt::SharpenFocus => format!(
                "How can I make my talk '{title}' more focused and impactful? What should I cut or emphasize?"
            ),
            QuickPrompt::AnticipateQa => format!(
                "What questions might the audience ask after my talk on '{title}'? How should I prepare to answer them?"
            ),
        }
    }
}
