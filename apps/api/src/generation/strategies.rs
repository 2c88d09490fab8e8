//! The six idea strategies.
//!
//! Each strategy is a pure function of the profile, the requested count and a
//! random source, producing zero or more raw candidates. The pool generator
//! runs them in [`STRATEGIES`] order; adding or removing one never touches the
//! pooling/dedup logic.

use rand::seq::{index, SliceRandom};
use rand::Rng;

use crate::generation::casing::title_case;
use crate::generation::lexicon::{
    audience_hooks, fill_template, format_templates, ANGLES, CONNECTORS, EXPERIENCE_LEAD_INS,
};
use crate::models::{Idea, IdeaKind, Profile};

/// Strategies in pool-building order.
pub const STRATEGIES: [IdeaKind; 6] = IdeaKind::ALL;

/// Number of leading topics the track-aligned strategy pairs with the track.
const TRACK_TOPIC_LIMIT: usize = 3;

/// Talk durations (minutes) offered for the `{duration}` slot of talk templates.
const TALK_DURATIONS: &[u32] = &[30, 45];
/// Duration used for every non-talk format.
const SESSION_DURATION: u32 = 90;

/// Everything a strategy reads. Built once per `generate_ideas` call.
#[derive(Debug, Clone)]
pub struct StrategyInput<'a> {
    pub profile: &'a Profile,
    /// Expertise ++ interests, or the default triad. Never empty.
    pub topics: Vec<&'a str>,
    pub count: usize,
}

impl<'a> StrategyInput<'a> {
    pub fn new(profile: &'a Profile, count: usize) -> Self {
        Self {
            profile,
            topics: profile.all_topics(),
            count,
        }
    }

    /// `⌊count/3⌋ + 1`
    fn third_runs(&self) -> usize {
        self.count / 3 + 1
    }

    /// `⌊count/4⌋ + 1`
    fn quarter_runs(&self) -> usize {
        self.count / 4 + 1
    }

    /// Topics with exact repeats removed, first occurrence kept.
    fn distinct_topics(&self) -> Vec<&'a str> {
        let mut distinct: Vec<&'a str> = Vec::with_capacity(self.topics.len());
        for &topic in &self.topics {
            if !distinct.contains(&topic) {
                distinct.push(topic);
            }
        }
        distinct
    }
}

/// Runs a single strategy.
pub fn run_strategy<R: Rng + ?Sized>(
    kind: IdeaKind,
    input: &StrategyInput<'_>,
    rng: &mut R,
) -> Vec<Idea> {
    match kind {
        IdeaKind::AngleBased => angle_based(input, rng),
        IdeaKind::CrossPollination => cross_pollination(input, rng),
        IdeaKind::ExperienceBased => experience_based(input, rng),
        IdeaKind::FormatSpecific => format_specific(input, rng),
        IdeaKind::AudienceTargeted => audience_targeted(input, rng),
        IdeaKind::TrackAligned => track_aligned(input),
    }
}

/// "{Angle} {topic}": angle title-cased, topic verbatim.
fn angle_based<R: Rng + ?Sized>(input: &StrategyInput<'_>, rng: &mut R) -> Vec<Idea> {
    let mut ideas = Vec::with_capacity(input.third_runs());

    for _ in 0..input.third_runs() {
        let (Some(topic), Some(angle)) = (input.topics.choose(rng), ANGLES.choose(rng)) else {
            continue;
        };
        ideas.push(Idea::new(
            format!("{} {}", title_case(angle), topic),
            IdeaKind::AngleBased,
            *topic,
        ));
    }

    ideas
}

/// "{Topic one} {connector} {topic two}" over two distinct topics.
/// Skipped entirely when fewer than two distinct topics exist.
fn cross_pollination<R: Rng + ?Sized>(input: &StrategyInput<'_>, rng: &mut R) -> Vec<Idea> {
    let distinct = input.distinct_topics();
    if distinct.len() < 2 {
        return Vec::new();
    }

    let mut ideas = Vec::with_capacity(input.third_runs());

    for _ in 0..input.third_runs() {
        let picked = index::sample(rng, distinct.len(), 2);
        let (first, second) = (distinct[picked.index(0)], distinct[picked.index(1)]);
        let Some(connector) = CONNECTORS.choose(rng) else {
            continue;
        };
        ideas.push(Idea::new(
            format!("{} {} {}", title_case(first), connector, second),
            IdeaKind::CrossPollination,
            format!("{first} + {second}"),
        ));
    }

    ideas
}

/// One story per recent project (first three only), lead-in + project verbatim.
fn experience_based<R: Rng + ?Sized>(input: &StrategyInput<'_>, rng: &mut R) -> Vec<Idea> {
    let projects = input.profile.story_projects();
    let mut ideas = Vec::with_capacity(projects.len());

    for project in projects {
        let Some(lead_in) = EXPERIENCE_LEAD_INS.choose(rng) else {
            continue;
        };
        ideas.push(Idea::new(
            format!("{lead_in} {project}"),
            IdeaKind::ExperienceBased,
            project.as_str(),
        ));
    }

    ideas
}

/// Fills a template from the profile's format (talk templates when unknown).
fn format_specific<R: Rng + ?Sized>(input: &StrategyInput<'_>, rng: &mut R) -> Vec<Idea> {
    let talk_format = input.profile.talk_format.as_str();
    let templates = format_templates(talk_format);
    let mut ideas = Vec::with_capacity(input.quarter_runs());

    for _ in 0..input.quarter_runs() {
        let (Some(topic), Some(template)) = (input.topics.choose(rng), templates.choose(rng))
        else {
            continue;
        };
        let duration = if talk_format == "talk" {
            TALK_DURATIONS.choose(rng).copied().unwrap_or(TALK_DURATIONS[0])
        } else {
            SESSION_DURATION
        };
        let duration = duration.to_string();
        let artifact = format!("{topic} project");

        let title = fill_template(
            template,
            &[
                ("topic", *topic),
                ("duration", duration.as_str()),
                ("artifact", artifact.as_str()),
            ],
        );
        ideas.push(Idea::new(title, IdeaKind::FormatSpecific, *topic));
    }

    ideas
}

/// "{Topic}: {Hook}" with both parts title-cased; hooks keyed by audience tier.
fn audience_targeted<R: Rng + ?Sized>(input: &StrategyInput<'_>, rng: &mut R) -> Vec<Idea> {
    let hooks = audience_hooks(&input.profile.target_audience);
    let mut ideas = Vec::with_capacity(input.quarter_runs());

    for _ in 0..input.quarter_runs() {
        let (Some(topic), Some(hook)) = (input.topics.choose(rng), hooks.choose(rng)) else {
            continue;
        };
        ideas.push(Idea::new(
            format!("{}: {}", title_case(topic), title_case(hook)),
            IdeaKind::AudienceTargeted,
            *topic,
        ));
    }

    ideas
}

/// Two fixed variants per leading topic, only when a track is set. No randomness.
fn track_aligned(input: &StrategyInput<'_>) -> Vec<Idea> {
    let Some(track) = input.profile.track() else {
        return Vec::new();
    };

    input
        .topics
        .iter()
        .take(TRACK_TOPIC_LIMIT)
        .flat_map(|&topic| {
            let cased = title_case(topic);
            [
                Idea::new(format!("{cased} for {track}"), IdeaKind::TrackAligned, topic),
                Idea::new(
                    format!("{track}: A {cased} Perspective"),
                    IdeaKind::TrackAligned,
                    topic,
                ),
            ]
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn make_profile(expertise: &[&str], interests: &[&str], projects: &[&str]) -> Profile {
        Profile {
            name: "Test User".to_string(),
            expertise_areas: expertise.iter().map(|s| s.to_string()).collect(),
            recent_projects: projects.iter().map(|s| s.to_string()).collect(),
            interests: interests.iter().map(|s| s.to_string()).collect(),
            target_audience: "intermediate".to_string(),
            talk_format: "talk".to_string(),
            conference_name: None,
            conference_track: None,
        }
    }

    fn rng() -> StdRng {
        StdRng::seed_from_u64(7)
    }

    #[test]
    fn test_angle_based_run_count_and_shape() {
        let profile = make_profile(&["Python", "machine learning"], &[], &[]);
        let input = StrategyInput::new(&profile, 10);
        let ideas = run_strategy(IdeaKind::AngleBased, &input, &mut rng());

        assert_eq!(ideas.len(), 10 / 3 + 1);
        for idea in &ideas {
            assert_eq!(idea.kind, IdeaKind::AngleBased);
            assert!(
                idea.title.ends_with(&format!(" {}", idea.topic)),
                "topic must be appended verbatim: {}",
                idea.title
            );
            let angle = &idea.title[..idea.title.len() - idea.topic.len() - 1];
            assert!(
                ANGLES.iter().any(|a| title_case(a) == angle),
                "unexpected angle prefix '{angle}'"
            );
        }
    }

    #[test]
    fn test_angle_based_keeps_topic_case() {
        let profile = make_profile(&["kubernetes"], &[], &[]);
        let input = StrategyInput::new(&profile, 1);
        let ideas = run_strategy(IdeaKind::AngleBased, &input, &mut rng());
        assert!(ideas[0].title.ends_with(" kubernetes"));
    }

    #[test]
    fn test_cross_pollination_uses_two_distinct_topics() {
        let profile = make_profile(&["Python", "Kubernetes"], &["open source"], &[]);
        let input = StrategyInput::new(&profile, 12);
        let mut rng = rng();

        for _ in 0..20 {
            let ideas = run_strategy(IdeaKind::CrossPollination, &input, &mut rng);
            assert_eq!(ideas.len(), 12 / 3 + 1);
            for idea in ideas {
                let (first, second) = idea.topic.split_once(" + ").unwrap();
                assert_ne!(first, second, "cross-pollination must pair distinct topics");
                assert!(idea.title.starts_with(&title_case(first)));
                assert!(idea.title.ends_with(second));
            }
        }
    }

    #[test]
    fn test_cross_pollination_skipped_with_single_topic() {
        let profile = make_profile(&["Python"], &[], &[]);
        let input = StrategyInput::new(&profile, 20);
        assert!(run_strategy(IdeaKind::CrossPollination, &input, &mut rng()).is_empty());
    }

    #[test]
    fn test_cross_pollination_skipped_with_repeated_topic() {
        let profile = make_profile(&["Python"], &["Python"], &[]);
        let input = StrategyInput::new(&profile, 20);
        assert!(
            run_strategy(IdeaKind::CrossPollination, &input, &mut rng()).is_empty(),
            "two copies of one topic are not two distinct topics"
        );
    }

    #[test]
    fn test_experience_based_one_per_project_up_to_three() {
        let profile = make_profile(&["Rust"], &[], &["a", "b", "c", "d"]);
        let input = StrategyInput::new(&profile, 1);
        let ideas = run_strategy(IdeaKind::ExperienceBased, &input, &mut rng());

        let topics: Vec<&str> = ideas.iter().map(|i| i.topic.as_str()).collect();
        assert_eq!(topics, vec!["a", "b", "c"]);
        for idea in &ideas {
            assert!(EXPERIENCE_LEAD_INS
                .iter()
                .any(|lead| idea.title == format!("{lead} {}", idea.topic)));
        }
    }

    #[test]
    fn test_experience_based_keeps_project_text_verbatim() {
        let profile = make_profile(&[], &[], &["migrated to microservices"]);
        let input = StrategyInput::new(&profile, 1);
        let ideas = run_strategy(IdeaKind::ExperienceBased, &input, &mut rng());
        assert!(ideas[0].title.ends_with(" migrated to microservices"));
    }

    #[test]
    fn test_format_specific_talk_durations() {
        let profile = make_profile(&["Rust"], &[], &[]);
        let input = StrategyInput::new(&profile, 20);
        let mut rng = rng();

        for _ in 0..50 {
            for idea in run_strategy(IdeaKind::FormatSpecific, &input, &mut rng) {
                assert!(!idea.title.contains('{'), "unfilled template: {}", idea.title);
                if idea.title.contains("-minute") {
                    assert!(
                        idea.title.starts_with("A 30-minute") || idea.title.starts_with("A 45-minute"),
                        "talk durations are 30 or 45: {}",
                        idea.title
                    );
                }
            }
        }
    }

    #[test]
    fn test_format_specific_fills_artifact_for_workshops() {
        let mut profile = make_profile(&["Rust"], &[], &[]);
        profile.talk_format = "workshop".to_string();
        let input = StrategyInput::new(&profile, 20);
        let mut rng = rng();

        let titles: Vec<String> = (0..50)
            .flat_map(|_| run_strategy(IdeaKind::FormatSpecific, &input, &mut rng))
            .map(|i| i.title)
            .collect();
        assert!(titles.contains(&"Hands-on Rust: Build your first Rust project".to_string()));
        assert!(titles.iter().all(|t| format_templates("workshop")
            .iter()
            .any(|tpl| fill_template(tpl, &[("topic", "Rust"), ("artifact", "Rust project")]) == *t)));
    }

    #[test]
    fn test_format_specific_unknown_format_uses_talk_templates_with_fixed_duration() {
        let mut profile = make_profile(&["Rust"], &[], &[]);
        profile.talk_format = "keynote".to_string();
        assert_eq!(format_templates("keynote"), format_templates("talk"));
        let input = StrategyInput::new(&profile, 20);
        let mut rng = rng();

        for _ in 0..50 {
            for idea in run_strategy(IdeaKind::FormatSpecific, &input, &mut rng) {
                if idea.title.contains("-minute") {
                    assert_eq!(idea.title, "A 90-minute exploration of Rust");
                }
            }
        }
    }

    #[test]
    fn test_audience_targeted_uses_tier_hooks() {
        let mut profile = make_profile(&["rust"], &[], &[]);
        profile.target_audience = "advanced".to_string();
        let input = StrategyInput::new(&profile, 8);
        let ideas = run_strategy(IdeaKind::AudienceTargeted, &input, &mut rng());

        assert_eq!(ideas.len(), 8 / 4 + 1);
        for idea in ideas {
            let hook = idea.title.strip_prefix("Rust: ").unwrap();
            assert!(audience_hooks("advanced").iter().any(|h| title_case(h) == hook));
        }
    }

    #[test]
    fn test_audience_targeted_unknown_tier_uses_mixed_hooks() {
        let mut profile = make_profile(&["rust"], &[], &[]);
        profile.target_audience = "experts".to_string();
        let input = StrategyInput::new(&profile, 20);
        for idea in run_strategy(IdeaKind::AudienceTargeted, &input, &mut rng()) {
            let hook = idea.title.strip_prefix("Rust: ").unwrap();
            assert!(audience_hooks("mixed").iter().any(|h| title_case(h) == hook));
        }
    }

    #[test]
    fn test_track_aligned_two_variants_per_leading_topic() {
        let mut profile = make_profile(&["Python", "Kubernetes"], &["open source", "mentoring"], &[]);
        profile.conference_track = Some("Observability".to_string());
        let input = StrategyInput::new(&profile, 10);
        let ideas = run_strategy(IdeaKind::TrackAligned, &input, &mut rng());

        let titles: Vec<&str> = ideas.iter().map(|i| i.title.as_str()).collect();
        assert_eq!(
            titles,
            vec![
                "Python for Observability",
                "Observability: A Python Perspective",
                "Kubernetes for Observability",
                "Observability: A Kubernetes Perspective",
                "Open Source for Observability",
                "Observability: A Open Source Perspective",
            ]
        );
        assert!(ideas.iter().all(|i| i.kind == IdeaKind::TrackAligned));
    }

    #[test]
    fn test_track_aligned_absent_without_track() {
        let profile = make_profile(&["Python", "Kubernetes"], &[], &[]);
        let input = StrategyInput::new(&profile, 10);
        assert!(run_strategy(IdeaKind::TrackAligned, &input, &mut rng()).is_empty());
    }

    #[test]
    fn test_default_topics_feed_strategies() {
        let profile = make_profile(&[], &[], &[]);
        let input = StrategyInput::new(&profile, 5);
        assert_eq!(input.topics.len(), 3);
        assert!(!run_strategy(IdeaKind::CrossPollination, &input, &mut rng()).is_empty());
    }
}
