//! Idea pool generator — runs every strategy, pools, shuffles, dedupes, truncates.
//!
//! Flow: strategies (in order) → shuffle → drop case-insensitive duplicate
//! titles (first in shuffle order wins) → truncate to `count`.
//!
//! The contract is "at most `count`, no duplicates", never "exactly `count`":
//! a small topic pool can legitimately yield fewer unique titles.

use std::collections::HashSet;

use rand::seq::SliceRandom;
use rand::Rng;
use tracing::debug;

use crate::errors::AppError;
use crate::generation::strategies::{run_strategy, StrategyInput, STRATEGIES};
use crate::models::{Idea, Profile};

pub const MIN_IDEAS: usize = 1;
pub const MAX_IDEAS: usize = 20;
/// Used when a caller does not ask for a specific count.
pub const DEFAULT_IDEAS: usize = 8;

/// Generates up to `count` unique ideas for the profile in random order.
pub fn generate_ideas<R: Rng + ?Sized>(profile: &Profile, count: usize, rng: &mut R) -> Vec<Idea> {
    let input = StrategyInput::new(profile, count);

    let mut pool = Vec::new();
    for kind in STRATEGIES {
        pool.extend(run_strategy(kind, &input, rng));
    }

    pool.shuffle(rng);
    let raw_size = pool.len();

    let mut ideas = dedupe_titles(pool);
    debug!(
        "Idea pool: {} raw candidates, {} duplicates dropped, {} requested",
        raw_size,
        raw_size - ideas.len(),
        count
    );

    ideas.truncate(count);
    ideas
}

/// Drops ideas whose lowercased title was already seen. Order is preserved.
pub fn dedupe_titles(ideas: Vec<Idea>) -> Vec<Idea> {
    let mut seen = HashSet::with_capacity(ideas.len());
    ideas
        .into_iter()
        .filter(|idea| seen.insert(idea.dedup_key()))
        .collect()
}

/// Boundary check for a requested idea count.
pub fn resolve_count(count: Option<usize>) -> Result<usize, AppError> {
    match count {
        None => Ok(DEFAULT_IDEAS),
        Some(n) if (MIN_IDEAS..=MAX_IDEAS).contains(&n) => Ok(n),
        Some(n) => Err(AppError::Validation(format!(
            "count must be between {MIN_IDEAS} and {MAX_IDEAS}, got {n}"
        ))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::IdeaKind;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn sample_profile() -> Profile {
        Profile {
            name: "Test User".to_string(),
            expertise_areas: vec!["Python".to_string(), "machine learning".to_string()],
            recent_projects: vec!["built a chatbot".to_string(), "deployed ML model".to_string()],
            interests: vec!["open source".to_string(), "AI ethics".to_string()],
            target_audience: "intermediate".to_string(),
            talk_format: "talk".to_string(),
            conference_name: Some("PyCon US".to_string()),
            conference_track: Some("Data Science & ML".to_string()),
        }
    }

    fn minimal_profile(expertise: &[&str]) -> Profile {
        Profile {
            name: "User".to_string(),
            expertise_areas: expertise.iter().map(|s| s.to_string()).collect(),
            recent_projects: vec![],
            interests: vec![],
            target_audience: "mixed".to_string(),
            talk_format: "talk".to_string(),
            conference_name: None,
            conference_track: None,
        }
    }

    fn lower_titles(ideas: &[Idea]) -> Vec<String> {
        ideas.iter().map(|i| i.title.to_lowercase()).collect()
    }

    #[test]
    fn test_never_exceeds_count_and_titles_unique() {
        let profile = sample_profile();
        let mut rng = StdRng::seed_from_u64(1);

        for count in MIN_IDEAS..=MAX_IDEAS {
            for _ in 0..10 {
                let ideas = generate_ideas(&profile, count, &mut rng);
                assert!(ideas.len() <= count, "got {} ideas for count {count}", ideas.len());

                let titles = lower_titles(&ideas);
                let unique: HashSet<_> = titles.iter().collect();
                assert_eq!(unique.len(), titles.len(), "duplicate titles: {titles:?}");
            }
        }
    }

    #[test]
    fn test_rich_profile_fills_requested_count() {
        let profile = sample_profile();
        let mut rng = StdRng::seed_from_u64(2);
        for count in [5, 10, 15] {
            let ideas = generate_ideas(&profile, count, &mut rng);
            assert_eq!(ideas.len(), count);
        }
    }

    #[test]
    fn test_count_one_returns_exactly_one() {
        let mut rng = StdRng::seed_from_u64(3);
        for profile in [sample_profile(), minimal_profile(&[]), minimal_profile(&["Rust"])] {
            assert_eq!(generate_ideas(&profile, 1, &mut rng).len(), 1);
        }
    }

    #[test]
    fn test_empty_topics_use_defaults() {
        let profile = minimal_profile(&[]);
        let mut rng = StdRng::seed_from_u64(4);
        let ideas = generate_ideas(&profile, 5, &mut rng);

        assert!(!ideas.is_empty());
        assert!(ideas.iter().all(|i| !i.title.is_empty()));
        assert!(ideas.iter().any(|i| {
            ["technology", "software development", "best practices"]
                .iter()
                .any(|t| i.topic.contains(t))
        }));
    }

    #[test]
    fn test_single_topic_may_return_fewer_than_count() {
        // One topic, talk format, mixed hooks: the unique title space is small
        // enough that twenty distinct titles cannot always be reached.
        let profile = minimal_profile(&["Rust"]);
        let mut rng = StdRng::seed_from_u64(5);
        let ideas = generate_ideas(&profile, 20, &mut rng);

        assert!(ideas.len() < 20, "expected a short pool, got {}", ideas.len());
        assert!(!ideas.is_empty());
    }

    #[test]
    fn test_track_aligned_present_iff_track_set() {
        let mut rng = StdRng::seed_from_u64(6);

        let with_track = sample_profile();
        let seen_with = (0..20)
            .flat_map(|_| generate_ideas(&with_track, 20, &mut rng))
            .any(|i| i.kind == IdeaKind::TrackAligned);
        assert!(seen_with, "track-aligned ideas expected when a track is set");

        let mut without_track = sample_profile();
        without_track.conference_track = None;
        let seen_without = (0..20)
            .flat_map(|_| generate_ideas(&without_track, 20, &mut rng))
            .any(|i| i.kind == IdeaKind::TrackAligned);
        assert!(!seen_without, "track-aligned ideas must not appear without a track");
    }

    #[test]
    fn test_no_cross_pollination_with_one_distinct_topic() {
        let mut profile = minimal_profile(&["Python"]);
        profile.interests = vec!["Python".to_string()];
        let mut rng = StdRng::seed_from_u64(7);

        for _ in 0..20 {
            let ideas = generate_ideas(&profile, 20, &mut rng);
            assert!(ideas.iter().all(|i| i.kind != IdeaKind::CrossPollination));
        }
    }

    #[test]
    fn test_example_profile_spans_every_strategy() {
        let profile = Profile {
            name: "Speaker".to_string(),
            expertise_areas: vec!["Python".to_string(), "Kubernetes".to_string()],
            recent_projects: vec!["migrated to microservices".to_string()],
            interests: vec![],
            target_audience: "advanced".to_string(),
            talk_format: "talk".to_string(),
            conference_name: None,
            conference_track: Some("Observability".to_string()),
        };
        let mut rng = StdRng::seed_from_u64(8);

        let mut kinds = HashSet::new();
        for _ in 0..50 {
            let ideas = generate_ideas(&profile, 10, &mut rng);
            assert!(ideas.len() <= 10);
            kinds.extend(ideas.into_iter().map(|i| i.kind));
        }

        for kind in IdeaKind::ALL {
            assert!(kinds.contains(&kind), "{kind} never appeared across trials");
        }
    }

    #[test]
    fn test_same_seed_same_output() {
        let profile = sample_profile();
        let a = generate_ideas(&profile, 10, &mut StdRng::seed_from_u64(42));
        let b = generate_ideas(&profile, 10, &mut StdRng::seed_from_u64(42));
        assert_eq!(a, b);
    }

    #[test]
    fn test_dedupe_keeps_first_occurrence() {
        let ideas = vec![
            Idea::new("Rust For Everyone", IdeaKind::AudienceTargeted, "rust"),
            Idea::new("rust for everyone", IdeaKind::AngleBased, "Rust"),
            Idea::new("Demystifying Rust", IdeaKind::AngleBased, "Rust"),
        ];
        let unique = dedupe_titles(ideas);
        assert_eq!(unique.len(), 2);
        assert_eq!(unique[0].kind, IdeaKind::AudienceTargeted);
        assert_eq!(unique[1].title, "Demystifying Rust");
    }

    #[test]
    fn test_resolve_count_bounds() {
        assert_eq!(resolve_count(None).unwrap(), DEFAULT_IDEAS);
        assert_eq!(resolve_count(Some(1)).unwrap(), 1);
        assert_eq!(resolve_count(Some(20)).unwrap(), 20);
        assert!(matches!(resolve_count(Some(0)), Err(AppError::Validation(_))));
        assert!(matches!(resolve_count(Some(21)), Err(AppError::Validation(_))));
    }
}
