//! Property tests for the decision core.
//!
//! Checks the validator against the neighbor-inequality rule and the
//! scoring pipeline against its monotonicity guarantees over randomized
//! inputs.

use proptest::prelude::*;

use chronodeck::cards::{Anchor, Card, CardId, Category, Tier};
use chronodeck::core::{GameConfig, GameDifficulty};
use chronodeck::rules::{calculate_score, validate_placement};
use chronodeck::timeline::Timeline;

fn point_card(year: i32, category: Category) -> Card {
    Card::new(
        CardId::new(1),
        "Probe",
        "Artist",
        category,
        Tier::Low,
        Anchor::year(year),
    )
}

fn timeline_of(mut years: Vec<i32>) -> (Timeline, Vec<i32>) {
    years.sort_unstable();
    let mut timeline = Timeline::new();
    for (i, &year) in years.iter().enumerate() {
        timeline.insert_at(
            i,
            Card::new(
                CardId::new(100 + i as u32),
                format!("Placed {}", i),
                "Artist",
                Category::Basic,
                Tier::Low,
                Anchor::year(year),
            ),
        );
    }
    (timeline, years)
}

proptest! {
    /// Point-anchor placement is correct exactly when both neighbor
    /// inequalities hold.
    #[test]
    fn point_placement_matches_neighbor_inequalities(
        years in prop::collection::vec(1500i32..2030, 1..12),
        year in 1500i32..2030,
        index_seed in any::<usize>(),
    ) {
        let (timeline, years) = timeline_of(years);
        let index = index_seed % (years.len() + 1);

        let outcome = validate_placement(&point_card(year, Category::Basic), &timeline, index);

        let lower_ok = index == 0 || years[index - 1] <= year;
        let upper_ok = index == years.len() || year <= years[index];
        prop_assert_eq!(outcome.is_correct, lower_ok && upper_ok);
    }

    /// The three point categories validate identically.
    #[test]
    fn point_categories_agree(
        years in prop::collection::vec(1500i32..2030, 1..8),
        year in 1500i32..2030,
        index_seed in any::<usize>(),
    ) {
        let (timeline, years) = timeline_of(years);
        let index = index_seed % (years.len() + 1);

        let basic = validate_placement(&point_card(year, Category::Basic), &timeline, index);
        let recognition =
            validate_placement(&point_card(year, Category::Recognition), &timeline, index);
        let content = validate_placement(&point_card(year, Category::Content), &timeline, index);

        prop_assert_eq!(basic.is_correct, recognition.is_correct);
        prop_assert_eq!(basic.is_correct, content.is_correct);
    }

    /// Wildcards never fail, anywhere.
    #[test]
    fn wildcard_is_always_correct(
        years in prop::collection::vec(1500i32..2030, 0..10),
        year in 1500i32..2030,
    ) {
        let (timeline, _) = timeline_of(years);
        let card = point_card(year, Category::Wildcard);

        for index in 0..=timeline.len() {
            prop_assert!(validate_placement(&card, &timeline, index).is_correct);
        }
    }

    /// Period placement is correct exactly when the range overlaps the
    /// admissible window between the neighbors.
    #[test]
    fn period_placement_matches_window_overlap(
        years in prop::collection::vec(1500i32..2030, 1..10),
        start in 1500i32..2030,
        width in 0i32..80,
        index_seed in any::<usize>(),
    ) {
        let (timeline, years) = timeline_of(years);
        let index = index_seed % (years.len() + 1);
        let end = start + width;

        let card = Card::new(
            CardId::new(2),
            "Probe Period",
            "Various",
            Category::Period,
            Tier::Low,
            Anchor::range(start, end),
        );
        let outcome = validate_placement(&card, &timeline, index);

        let lower = if index == 0 { i32::MIN } else { years[index - 1] };
        let upper = if index == years.len() { i32::MAX } else { years[index] };
        prop_assert_eq!(outcome.is_correct, start <= upper && end >= lower);
    }

    /// A correct point placement, once inserted, keeps the timeline
    /// ordered.
    #[test]
    fn correct_placement_preserves_order(
        years in prop::collection::vec(1500i32..2030, 1..10),
        year in 1500i32..2030,
        index_seed in any::<usize>(),
    ) {
        let (mut timeline, years) = timeline_of(years);
        let index = index_seed % (years.len() + 1);
        let card = point_card(year, Category::Basic);

        if validate_placement(&card, &timeline, index).is_correct {
            timeline.insert_at(index, card);
            prop_assert!(timeline.is_ordered());
        }
    }

    /// Scoring is monotone non-decreasing in the streak count.
    #[test]
    fn score_is_monotone_in_streak(
        streak_lo in 0u32..30,
        bump in 0u32..30,
        answered in any::<bool>(),
    ) {
        let config = GameConfig::default();
        let card = point_card(1990, Category::Content);

        for difficulty in GameDifficulty::ALL {
            let lo = calculate_score(&config, &card, streak_lo, difficulty, answered);
            let hi = calculate_score(&config, &card, streak_lo + bump, difficulty, answered);
            prop_assert!(hi.total_points >= lo.total_points);
        }
    }

    /// Score events always sum to the reported total.
    #[test]
    fn score_events_sum_to_total(
        streak in 0u32..12,
        answered in any::<bool>(),
        tier_seed in 0usize..3,
    ) {
        let config = GameConfig::default();
        let tier = [Tier::Low, Tier::Medium, Tier::High][tier_seed];

        for category in [
            Category::Basic,
            Category::Recognition,
            Category::Content,
            Category::Wildcard,
        ] {
            let card = Card::new(
                CardId::new(3),
                "Probe",
                "Artist",
                category,
                tier,
                Anchor::year(1990),
            );
            for difficulty in GameDifficulty::ALL {
                let breakdown = calculate_score(&config, &card, streak, difficulty, answered);
                let sum: i64 = breakdown.events.iter().map(|e| e.points).sum();
                prop_assert_eq!(sum, breakdown.total_points);
            }
        }
    }
}
