//! Score calculation for correct placements.
//!
//! One fixed pipeline converts a validated placement into points:
//!
//! 1. base points (always)
//! 2. question bonus (Content card, question answered)
//! 3. recognition bonus (Recognition card)
//! 4. card-tier multiplier
//! 5. streak multiplier
//! 6. game-difficulty multiplier
//!
//! Additive steps come first; each multiplicative step rounds the
//! running total and compounds on everything before it, so the order is
//! load-bearing. Every contributing step is reported as a `ScoreEvent`
//! for display - a multiplier of exactly 1 contributes nothing and
//! emits no event.
//!
//! Rounding: half away from zero, at every multiplicative step.
//!
//! Pure functions of their arguments; scoring assumes the placement was
//! already validated and does not re-validate.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::cards::{Card, Category};
use crate::core::config::{GameConfig, GameDifficulty, ScoringConfig};

/// Kind tag for one scoring contribution.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ScoreEventKind {
    /// Fixed base points.
    Base,
    /// Bonus for a correctly answered Content question.
    QuestionBonus,
    /// Category-driven bonus: recognition bonus or card-tier bonus.
    Category,
    /// Streak multiplier payout.
    Streak,
    /// Game-difficulty multiplier payout.
    Difficulty,
}

/// One scoring contribution: kind, signed point delta, display message.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScoreEvent {
    pub kind: ScoreEventKind,
    pub points: i64,
    pub message: String,
}

impl ScoreEvent {
    fn new(kind: ScoreEventKind, points: i64, message: String) -> Self {
        Self {
            kind,
            points,
            message,
        }
    }
}

/// Total awarded points plus the ordered contributions.
///
/// The pipeline emits at most one event per step, so the list stays
/// inline on the stack.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScoreBreakdown {
    /// Running total after the last pipeline step.
    pub total_points: i64,

    /// Contributing steps, in pipeline order.
    pub events: SmallVec<[ScoreEvent; 5]>,
}

/// Round half away from zero. Totals here are non-negative, so this is
/// plain round-half-up.
fn round_points(value: f64) -> i64 {
    value.round() as i64
}

/// Compute the score for one correct placement.
///
/// `streak` is the player's streak *including* this placement.
///
/// ## Example
///
/// ```
/// use chronodeck::cards::{Anchor, Card, CardId, Category, Tier};
/// use chronodeck::core::{GameConfig, GameDifficulty};
/// use chronodeck::rules::calculate_score;
///
/// let card = Card::new(
///     CardId::new(1), "10.000 redenen", "Matt Redman",
///     Category::Basic, Tier::Low, Anchor::year(2012),
/// );
///
/// let breakdown = calculate_score(
///     &GameConfig::default(), &card, 1, GameDifficulty::Easy, false,
/// );
/// assert_eq!(breakdown.total_points, 10);
/// assert_eq!(breakdown.events.len(), 1);
/// ```
#[must_use]
pub fn calculate_score(
    config: &GameConfig,
    card: &Card,
    streak: u32,
    difficulty: GameDifficulty,
    answered_question: bool,
) -> ScoreBreakdown {
    let scoring = &config.scoring;
    let mut events: SmallVec<[ScoreEvent; 5]> = SmallVec::new();
    let mut total: i64 = 0;

    // 1. Base points
    total += scoring.base_points;
    events.push(ScoreEvent::new(
        ScoreEventKind::Base,
        scoring.base_points,
        format!("+{} points", scoring.base_points),
    ));

    // 2. Question bonus (Content cards)
    if card.category == Category::Content && answered_question {
        total += scoring.question_bonus;
        events.push(ScoreEvent::new(
            ScoreEventKind::QuestionBonus,
            scoring.question_bonus,
            format!("+{} question bonus", scoring.question_bonus),
        ));
    }

    // 3. Recognition bonus
    if card.category == Category::Recognition {
        total += scoring.recognition_bonus;
        events.push(ScoreEvent::new(
            ScoreEventKind::Category,
            scoring.recognition_bonus,
            format!("+{} recognition bonus", scoring.recognition_bonus),
        ));
    }

    // 4. Card-tier multiplier, emitted as a delta on the running total
    let tier_multiplier = scoring.tier_multiplier(card.tier);
    if tier_multiplier > 1.0 {
        let bonus = round_points(total as f64 * (tier_multiplier - 1.0));
        total += bonus;
        events.push(ScoreEvent::new(
            ScoreEventKind::Category,
            bonus,
            format!("+{} {} card", bonus, card.tier),
        ));
    }

    // 5. Streak multiplier
    let streak_multiplier = scoring.streak_multiplier(streak);
    if streak_multiplier > 1.0 {
        let new_total = round_points(total as f64 * streak_multiplier);
        let bonus = new_total - total;
        total = new_total;
        events.push(ScoreEvent::new(
            ScoreEventKind::Streak,
            bonus,
            format!("x{} streak! (+{})", streak_multiplier, bonus),
        ));
    }

    // 6. Game-difficulty multiplier
    let settings = config.difficulty(difficulty);
    if settings.score_multiplier > 1.0 {
        let new_total = round_points(total as f64 * settings.score_multiplier);
        let bonus = new_total - total;
        total = new_total;
        events.push(ScoreEvent::new(
            ScoreEventKind::Difficulty,
            bonus,
            format!("+{} {} mode", bonus, settings.label.to_lowercase()),
        ));
    }

    ScoreBreakdown {
        total_points: total,
        events,
    }
}

/// Check if a streak count qualifies for any streak multiplier.
///
/// Same threshold semantics as the scoring pipeline.
#[must_use]
pub fn has_streak_bonus(scoring: &ScoringConfig, streak: u32) -> bool {
    streak >= scoring.streak_threshold_1
}

/// Streak tier description for display, or `None` below the first
/// threshold. Returns `Some` exactly when `has_streak_bonus` is true.
#[must_use]
pub fn streak_text(scoring: &ScoringConfig, streak: u32) -> Option<String> {
    if streak >= scoring.streak_threshold_2 {
        Some(format!(
            "{}x STREAK! ({}x points)",
            streak, scoring.streak_multiplier_2
        ))
    } else if streak >= scoring.streak_threshold_1 {
        Some(format!(
            "{}x streak ({}x points)",
            streak, scoring.streak_multiplier_1
        ))
    } else {
        None
    }
}
