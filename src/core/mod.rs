//! Core types: players, configuration, deterministic RNG.

pub mod config;
pub mod player;
pub mod rng;

pub use config::{DifficultyConfig, GameConfig, GameDifficulty, ScoringConfig};
pub use player::{Player, PlayerId, PLAYER_COLORS};
pub use rng::{GameRng, GameRngState};
