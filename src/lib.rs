//! # chronodeck
//!
//! A turn-based timeline card game engine: players place song cards
//! onto a shared chronological timeline, guessing each card's year (or
//! year range) relative to the cards already placed.
//!
//! ## Design Principles
//!
//! 1. **Pure Decision Core**: Placement validation and score
//!    calculation are stateless functions of their arguments. They read
//!    the timeline, decide, and return - all mutation happens in the
//!    game controller.
//!
//! 2. **Closed Enums**: Card categories, tiers, and difficulties are
//!    exhaustively matched. Adding a category is a compile-time-checked
//!    change, never a string comparison.
//!
//! 3. **No Global State**: Configuration and session state are explicit
//!    values passed in. Two games, or two speculative clones of one
//!    game, never interfere.
//!
//! ## Architecture
//!
//! - **Persistent Data Structures**: timeline, deck, and snapshots use
//!   `im` for O(1) cloning, so speculative placement evaluation against
//!   a copy is cheap.
//!
//! - **Deterministic Shuffling**: all randomness flows through a seeded
//!   `GameRng`; identical seeds produce identical games.
//!
//! ## Modules
//!
//! - `core`: Player identity and state, configuration, RNG
//! - `cards`: Card data, registry, and deck construction
//! - `timeline`: The shared chronological timeline
//! - `rules`: Placement validation and score calculation
//! - `game`: Turn-based session controller and snapshots

pub mod cards;
pub mod core;
pub mod game;
pub mod rules;
pub mod timeline;

// Re-export commonly used types
pub use crate::core::{
    DifficultyConfig, GameConfig, GameDifficulty, GameRng, GameRngState, Player, PlayerId,
    ScoringConfig, PLAYER_COLORS,
};

pub use crate::cards::{Anchor, Card, CardId, CardRegistry, Category, Deck, Tier};

pub use crate::timeline::Timeline;

pub use crate::rules::{
    calculate_score, has_streak_bonus, streak_text, validate_placement, PlacementOutcome,
    ScoreBreakdown, ScoreEvent, ScoreEventKind,
};

pub use crate::game::{Game, GameBuilder, GameSnapshot, GameStatus};
