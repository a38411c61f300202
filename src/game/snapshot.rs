//! Session snapshots.
//!
//! A `GameSnapshot` captures the complete runtime state of a session -
//! including the RNG word position - so a restored game continues with
//! identical behavior. Card content and configuration are static and
//! stay outside the snapshot; pass them back to `Game::restore`.
//!
//! Binary encoding uses `bincode`.

use serde::{Deserialize, Serialize};

use crate::cards::{Card, Deck};
use crate::core::config::GameDifficulty;
use crate::core::player::{Player, PlayerId};
use crate::core::rng::GameRngState;
use crate::rules::ScoreBreakdown;
use crate::timeline::Timeline;

use super::session::GameStatus;

/// Serializable session state.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct GameSnapshot {
    pub difficulty: GameDifficulty,
    pub status: GameStatus,
    pub players: Vec<Player>,
    pub current_player: usize,
    pub timeline: Timeline,
    pub deck: Deck,
    pub active_card: Option<Card>,
    pub pending_answer: bool,
    pub feedback: Option<String>,
    pub last_score: Option<ScoreBreakdown>,
    pub winner: Option<PlayerId>,
    pub rng: GameRngState,
}

impl GameSnapshot {
    /// Encode to compact binary.
    pub fn to_bytes(&self) -> bincode::Result<Vec<u8>> {
        bincode::serialize(self)
    }

    /// Decode from binary produced by `to_bytes`.
    pub fn from_bytes(bytes: &[u8]) -> bincode::Result<Self> {
        bincode::deserialize(bytes)
    }
}
