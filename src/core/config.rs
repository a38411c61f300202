//! Game configuration types.
//!
//! Sessions configure the engine at startup by providing:
//! - `ScoringConfig`: base points, bonuses, thresholds, multipliers
//! - `DifficultyConfig`: per-difficulty lives, allowed card tiers,
//!   score multiplier
//! - `GameConfig`: combines all configuration
//!
//! All values ship with reference defaults; nothing is read from files
//! or the environment. Configuration is always passed in explicitly -
//! there is no process-wide settings singleton.

use serde::{Deserialize, Serialize};

use crate::cards::Tier;

/// Session-wide difficulty setting, distinct from per-card `Tier`.
///
/// Controls lives, which card tiers are dealt, and a score multiplier.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum GameDifficulty {
    Easy,
    Medium,
    Hard,
}

impl GameDifficulty {
    /// All difficulties, in ascending order.
    pub const ALL: [GameDifficulty; 3] =
        [GameDifficulty::Easy, GameDifficulty::Medium, GameDifficulty::Hard];
}

impl std::fmt::Display for GameDifficulty {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            GameDifficulty::Easy => "Easy",
            GameDifficulty::Medium => "Medium",
            GameDifficulty::Hard => "Hard",
        };
        write!(f, "{}", name)
    }
}

/// Settings for a single game difficulty.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct DifficultyConfig {
    /// Human-readable label ("Easy", "Medium", "Hard").
    pub label: String,

    /// Short description for selection screens.
    pub description: String,

    /// Lives each player starts with.
    pub lives: u8,

    /// Card tiers dealt at this difficulty. Wildcards are always dealt.
    pub allowed_tiers: Vec<Tier>,

    /// Multiplier applied as the final scoring step. 1.0 is a no-op.
    pub score_multiplier: f64,
}

impl DifficultyConfig {
    /// Create a new difficulty configuration.
    ///
    /// Panics on zero lives, an empty tier list, or a multiplier below 1.
    pub fn new(
        label: impl Into<String>,
        description: impl Into<String>,
        lives: u8,
        allowed_tiers: Vec<Tier>,
        score_multiplier: f64,
    ) -> Self {
        assert!(lives > 0, "Difficulty must grant at least 1 life");
        assert!(!allowed_tiers.is_empty(), "Difficulty must allow at least one tier");
        assert!(score_multiplier >= 1.0, "Score multiplier must be at least 1.0");

        Self {
            label: label.into(),
            description: description.into(),
            lives,
            allowed_tiers,
            score_multiplier,
        }
    }

    /// Check whether cards of the given tier are dealt at this difficulty.
    #[must_use]
    pub fn allows(&self, tier: Tier) -> bool {
        self.allowed_tiers.contains(&tier)
    }
}

/// Scoring constants: one fixed pipeline, configured here.
///
/// See `rules::calculate_score` for the pipeline order.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ScoringConfig {
    /// Points awarded for every correct placement.
    pub base_points: i64,

    /// Flat bonus for a correctly answered Content question.
    pub question_bonus: i64,

    /// Flat bonus for correctly placed Recognition cards.
    pub recognition_bonus: i64,

    /// Running-total multiplier for Medium-tier cards.
    pub medium_tier_multiplier: f64,

    /// Running-total multiplier for High-tier cards.
    pub high_tier_multiplier: f64,

    /// Streak length activating the first streak multiplier.
    pub streak_threshold_1: u32,

    /// Streak length activating the second streak multiplier.
    pub streak_threshold_2: u32,

    /// Multiplier at the first streak threshold.
    pub streak_multiplier_1: f64,

    /// Multiplier at the second streak threshold.
    pub streak_multiplier_2: f64,
}

impl Default for ScoringConfig {
    fn default() -> Self {
        Self {
            base_points: 10,
            question_bonus: 5,
            recognition_bonus: 2,
            medium_tier_multiplier: 1.25,
            high_tier_multiplier: 1.5,
            streak_threshold_1: 3,
            streak_threshold_2: 5,
            streak_multiplier_1: 1.5,
            streak_multiplier_2: 2.0,
        }
    }
}

impl ScoringConfig {
    /// Running-total multiplier for a card tier. Low tier is a no-op.
    #[must_use]
    pub fn tier_multiplier(&self, tier: Tier) -> f64 {
        match tier {
            Tier::Low => 1.0,
            Tier::Medium => self.medium_tier_multiplier,
            Tier::High => self.high_tier_multiplier,
        }
    }

    /// Streak multiplier for a streak count (including the placement
    /// being scored). Below the first threshold this is a no-op.
    #[must_use]
    pub fn streak_multiplier(&self, streak: u32) -> f64 {
        if streak >= self.streak_threshold_2 {
            self.streak_multiplier_2
        } else if streak >= self.streak_threshold_1 {
            self.streak_multiplier_1
        } else {
            1.0
        }
    }

    fn validate(&self) {
        assert!(self.base_points > 0, "Base points must be positive");
        assert!(
            self.streak_threshold_1 < self.streak_threshold_2,
            "Streak thresholds must be ascending"
        );
        assert!(
            self.medium_tier_multiplier >= 1.0
                && self.high_tier_multiplier >= 1.0
                && self.streak_multiplier_1 >= 1.0
                && self.streak_multiplier_2 >= 1.0,
            "Multipliers must be at least 1.0"
        );
    }
}

/// Complete game configuration.
///
/// ## Example
///
/// ```
/// use chronodeck::core::{GameConfig, GameDifficulty};
///
/// let config = GameConfig::default();
/// assert_eq!(config.difficulty(GameDifficulty::Medium).lives, 3);
/// assert_eq!(config.scoring.base_points, 10);
/// ```
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct GameConfig {
    /// Scoring constants.
    pub scoring: ScoringConfig,

    easy: DifficultyConfig,
    medium: DifficultyConfig,
    hard: DifficultyConfig,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            scoring: ScoringConfig::default(),
            easy: DifficultyConfig::new(
                "Easy",
                "More lives, only the best-known songs",
                5,
                vec![Tier::Low],
                1.0,
            ),
            medium: DifficultyConfig::new(
                "Medium",
                "Fewer lives, trickier songs, 1.5x points",
                3,
                vec![Tier::Low, Tier::Medium],
                1.5,
            ),
            hard: DifficultyConfig::new(
                "Hard",
                "Two lives, every song in the box, 2x points",
                2,
                vec![Tier::Low, Tier::Medium, Tier::High],
                2.0,
            ),
        }
    }
}

impl GameConfig {
    /// Create the reference configuration.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the scoring constants.
    ///
    /// Panics if the constants are internally inconsistent.
    #[must_use]
    pub fn with_scoring(mut self, scoring: ScoringConfig) -> Self {
        scoring.validate();
        self.scoring = scoring;
        self
    }

    /// Replace the settings for one difficulty.
    #[must_use]
    pub fn with_difficulty(mut self, difficulty: GameDifficulty, config: DifficultyConfig) -> Self {
        match difficulty {
            GameDifficulty::Easy => self.easy = config,
            GameDifficulty::Medium => self.medium = config,
            GameDifficulty::Hard => self.hard = config,
        }
        self
    }

    /// Get the settings for a difficulty.
    #[must_use]
    pub fn difficulty(&self, difficulty: GameDifficulty) -> &DifficultyConfig {
        match difficulty {
            GameDifficulty::Easy => &self.easy,
            GameDifficulty::Medium => &self.medium,
            GameDifficulty::Hard => &self.hard,
        }
    }
}
