//! Phrase tables used by the idea strategies. Data only.
//!
//! Keyed lookups never fail: unknown format keys fall back to the talk
//! templates and unknown audience tiers fall back to the mixed hooks.

pub const ANGLES: &[&str] = &[
    "lessons learned from",
    "the unexpected benefits of",
    "common mistakes in",
    "a beginner's journey into",
    "scaling challenges with",
    "the future of",
    "demystifying",
    "beyond the basics of",
    "real-world applications of",
    "the hidden complexity of",
    "rethinking",
    "what nobody tells you about",
    "a deep dive into",
    "practical tips for",
    "the evolution of",
];

pub const CONNECTORS: &[&str] = &[
    "meets",
    "for",
    "in the age of",
    "through the lens of",
    "powered by",
    "without",
    "beyond",
    "reimagined with",
];

pub const EXPERIENCE_LEAD_INS: &[&str] = &[
    "How we",
    "Why we",
    "What we learned when we",
    "The story of how we",
];

const TALK_TEMPLATES: &[&str] = &[
    "A {duration}-minute exploration of {topic}",
    "Case study: {topic}",
    "From zero to hero: {topic}",
    "{topic}: A practitioner's perspective",
    "The art and science of {topic}",
];

const WORKSHOP_TEMPLATES: &[&str] = &[
    "Hands-on {topic}: Build your first {artifact}",
    "Workshop: Mastering {topic} in 90 minutes",
    "Interactive session: {topic} for teams",
    "From theory to practice: {topic} workshop",
    "Build, break, learn: {topic}",
];

const TUTORIAL_TEMPLATES: &[&str] = &[
    "Tutorial: {topic} from scratch",
    "Step-by-step guide to {topic}",
    "Building with {topic}: A hands-on tutorial",
    "{topic} bootcamp",
];

const LIGHTNING_TEMPLATES: &[&str] = &[
    "5 things I wish I knew about {topic}",
    "{topic} in 5 minutes",
    "Quick wins with {topic}",
    "The one thing about {topic} that changed everything",
    "{topic}: A lightning tour",
];

const CHALK_TALK_TEMPLATES: &[&str] = &[
    "Architecture deep dive: {topic}",
    "Whiteboard session: Designing {topic}",
    "Interactive discussion: {topic} patterns",
];

const POSTER_TEMPLATES: &[&str] = &["Visualizing {topic}", "{topic}: A visual guide"];

/// Format keys with their own template list.
const FORMAT_TEMPLATES: &[(&str, &[&str])] = &[
    ("talk", TALK_TEMPLATES),
    ("workshop", WORKSHOP_TEMPLATES),
    ("tutorial", TUTORIAL_TEMPLATES),
    ("lightning", LIGHTNING_TEMPLATES),
    ("chalk talk", CHALK_TALK_TEMPLATES),
    ("poster", POSTER_TEMPLATES),
];

/// Title templates for a talk format, talk templates for unknown keys.
/// Placeholders: `{topic}`, `{duration}`, `{artifact}`.
pub fn format_templates(talk_format: &str) -> &'static [&'static str] {
    FORMAT_TEMPLATES
        .iter()
        .find(|(key, _)| *key == talk_format)
        .map(|(_, templates)| *templates)
        .unwrap_or(TALK_TEMPLATES)
}

const BEGINNER_HOOKS: &[&str] = &["getting started", "fundamentals", "first steps", "introduction to"];
const INTERMEDIATE_HOOKS: &[&str] = &[
    "leveling up",
    "best practices",
    "patterns and antipatterns",
    "practical",
];
const ADVANCED_HOOKS: &[&str] = &["deep dive", "internals", "edge cases", "advanced techniques"];
const MIXED_HOOKS: &[&str] = &[
    "for everyone",
    "from basics to advanced",
    "comprehensive guide",
    "all levels",
];

pub fn audience_hooks(target_audience: &str) -> &'static [&'static str] {
    match target_audience {
        "beginners" => BEGINNER_HOOKS,
        "intermediate" => INTERMEDIATE_HOOKS,
        "advanced" => ADVANCED_HOOKS,
        _ => MIXED_HOOKS,
    }
}

/// Fills `{name}` placeholders in a single pass. Substituted values are never
/// rescanned, so a topic containing braces is inserted verbatim. Unknown
/// placeholders are left as written.
pub fn fill_template(template: &str, values: &[(&str, &str)]) -> String {
    let mut out = String::with_capacity(template.len() + 32);
    let mut rest = template;

    while let Some(start) = rest.find('{') {
        out.push_str(&rest[..start]);
        let after = &rest[start + 1..];

        match after.find('}') {
            Some(end) => {
                let key = &after[..end];
                match values.iter().find(|(k, _)| *k == key) {
                    Some((_, value)) => out.push_str(value),
                    None => {
                        out.push('{');
                        out.push_str(key);
                        out.push('}');
                    }
                }
                rest = &after[end + 1..];
            }
            None => {
                out.push_str(&rest[start..]);
                rest = "";
            }
        }
    }

    out.push_str(rest);
    out
}
