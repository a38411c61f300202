//! The decision core: placement validation and score calculation.
//!
//! Both components are pure, stateless functions of their arguments -
//! no randomness, no I/O, no shared state. The game controller calls
//! `validate_placement` first and, only for a correct placement,
//! `calculate_score`.
//!
//! ## Key Types
//!
//! - `PlacementOutcome`: correctness flag plus display message
//! - `ScoreBreakdown`: total points plus ordered `ScoreEvent`s

pub mod placement;
pub mod scoring;

pub use placement::{validate_placement, PlacementOutcome};
pub use scoring::{
    calculate_score, has_streak_bonus, streak_text, ScoreBreakdown, ScoreEvent, ScoreEventKind,
};
