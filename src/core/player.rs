//! Player identification and per-player game data.
//!
//! ## PlayerId
//!
//! Type-safe player identifier supporting 1-4 players.
//!
//! ## Player
//!
//! Per-player runtime state: score, remaining lives, current streak of
//! consecutive correct placements, and elimination flag. Owned and
//! mutated by the game controller, never by the rules functions.

use serde::{Deserialize, Serialize};

/// Display colors assigned to players in seat order.
pub const PLAYER_COLORS: [&str; 4] = ["#3b82f6", "#ef4444", "#10b981", "#f59e0b"];

/// Player identifier.
///
/// Player indices are 0-based: the first player is `PlayerId(0)`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PlayerId(pub u8);

impl PlayerId {
    /// Create a new player ID.
    #[must_use]
    pub const fn new(id: u8) -> Self {
        Self(id)
    }

    /// Get the raw player index (0-based).
    #[must_use]
    pub const fn index(self) -> usize {
        self.0 as usize
    }

    /// Iterate over all player IDs for a game with `player_count` players.
    pub fn all(player_count: usize) -> impl Iterator<Item = PlayerId> {
        (0..player_count as u8).map(PlayerId)
    }
}

impl std::fmt::Display for PlayerId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Player {}", self.0)
    }
}

/// Per-player runtime state.
///
/// ## Example
///
/// ```
/// use chronodeck::core::{Player, PlayerId};
///
/// let mut player = Player::new(PlayerId::new(0), "Anna", "#3b82f6", 3);
///
/// player.record_correct(29);
/// assert_eq!(player.score, 29);
/// assert_eq!(player.streak, 1);
///
/// player.record_wrong();
/// assert_eq!(player.streak, 0);
/// assert_eq!(player.lives, 2);
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Player {
    /// Seat identifier.
    pub id: PlayerId,

    /// Display name.
    pub name: String,

    /// Display color (hex).
    pub color: String,

    /// Total points scored.
    pub score: i64,

    /// Remaining lives. Zero means eliminated.
    pub lives: u8,

    /// Consecutive correct placements; resets to zero on any wrong one.
    pub streak: u32,

    /// Set once `lives` reaches zero; eliminated players are skipped in
    /// the turn order.
    pub eliminated: bool,
}

impl Player {
    /// Create a new player with full lives and an empty score.
    ///
    /// Panics if `lives` is zero.
    #[must_use]
    pub fn new(id: PlayerId, name: impl Into<String>, color: impl Into<String>, lives: u8) -> Self {
        assert!(lives > 0, "Players must start with at least 1 life");
        Self {
            id,
            name: name.into(),
            color: color.into(),
            score: 0,
            lives,
            streak: 0,
            eliminated: false,
        }
    }

    /// Record a correct placement: add points, extend the streak.
    pub fn record_correct(&mut self, points: i64) {
        self.score += points;
        self.streak += 1;
    }

    /// Record a wrong placement: lose a life, reset the streak,
    /// eliminate at zero lives.
    pub fn record_wrong(&mut self) {
        self.lives -= 1;
        self.streak = 0;
        if self.lives == 0 {
            self.eliminated = true;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_player_id_basics() {
        let p0 = PlayerId::new(0);
        let p1 = PlayerId::new(1);

        assert_eq!(p0.index(), 0);
        assert_eq!(p1.index(), 1);
        assert_eq!(format!("{}", p0), "Player 0");
    }

    #[test]
    fn test_player_id_all() {
        let players: Vec<_> = PlayerId::all(4).collect();
        assert_eq!(players.len(), 4);
        assert_eq!(players[0], PlayerId::new(0));
        assert_eq!(players[3], PlayerId::new(3));
    }

    #[test]
    fn test_correct_placement_extends_streak() {
        let mut player = Player::new(PlayerId::new(0), "Anna", PLAYER_COLORS[0], 3);

        player.record_correct(10);
        player.record_correct(15);

        assert_eq!(player.score, 25);
        assert_eq!(player.streak, 2);
        assert_eq!(player.lives, 3);
        assert!(!player.eliminated);
    }

    #[test]
    fn test_wrong_placement_resets_streak() {
        let mut player = Player::new(PlayerId::new(0), "Anna", PLAYER_COLORS[0], 3);

        player.record_correct(10);
        player.record_wrong();

        assert_eq!(player.score, 10);
        assert_eq!(player.streak, 0);
        assert_eq!(player.lives, 2);
        assert!(!player.eliminated);
    }

    #[test]
    fn test_elimination_at_zero_lives() {
        let mut player = Player::new(PlayerId::new(1), "Ben", PLAYER_COLORS[1], 2);

        player.record_wrong();
        assert!(!player.eliminated);

        player.record_wrong();
        assert!(player.eliminated);
        assert_eq!(player.lives, 0);
    }

    #[test]
    #[should_panic(expected = "at least 1 life")]
    fn test_zero_lives_panics() {
        Player::new(PlayerId::new(0), "Anna", PLAYER_COLORS[0], 0);
    }

    #[test]
    fn test_player_serialization() {
        let player = Player::new(PlayerId::new(2), "Cas", PLAYER_COLORS[2], 3);
        let json = serde_json::to_string(&player).unwrap();
        let deserialized: Player = serde_json::from_str(&json).unwrap();
        assert_eq!(player, deserialized);
    }
}
