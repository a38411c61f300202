//! Turn-based game session.
//!
//! `Game` owns everything a running session needs: the roster, the
//! timeline, the draw pile, the active card, and the RNG. It drives the
//! `playing -> correct|wrong -> playing` loop by calling the pure rules
//! functions and applying their decisions; the rules never mutate
//! anything themselves.
//!
//! There is no global state - a `Game` is a plain value, and cloning
//! one is cheap thanks to the persistent collections underneath.

use serde::{Deserialize, Serialize};

use crate::cards::{Card, CardRegistry, Deck};
use crate::core::config::{GameConfig, GameDifficulty};
use crate::core::player::{Player, PlayerId, PLAYER_COLORS};
use crate::core::rng::GameRng;
use crate::rules::{calculate_score, validate_placement, PlacementOutcome, ScoreBreakdown};
use crate::timeline::Timeline;

use super::snapshot::GameSnapshot;

/// Session status.
///
/// `Correct` and `Wrong` are the feedback pauses between a placement
/// and `next_turn`; the pre-game screens live in the presentation layer
/// and configure the session through `GameBuilder` instead.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameStatus {
    /// Waiting for the current player to place the active card.
    Playing,
    /// Last placement was correct; awaiting `next_turn`.
    Correct,
    /// Last placement was wrong; awaiting `next_turn`.
    Wrong,
    /// No active players left, or the deck ran out.
    GameOver,
}

/// A running game session.
#[derive(Clone, Debug)]
pub struct Game {
    config: GameConfig,
    registry: CardRegistry,
    difficulty: GameDifficulty,
    status: GameStatus,
    players: Vec<Player>,
    current_player: usize,
    timeline: Timeline,
    deck: Deck,
    active_card: Option<Card>,
    pending_answer: bool,
    feedback: Option<String>,
    last_score: Option<ScoreBreakdown>,
    winner: Option<PlayerId>,
    rng: GameRng,
}

/// Builder for creating a `Game`.
///
/// ## Example
///
/// ```no_run
/// use chronodeck::cards::CardRegistry;
/// use chronodeck::core::GameDifficulty;
/// use chronodeck::game::GameBuilder;
///
/// let registry = CardRegistry::new(); // load cards here
/// let game = GameBuilder::new(registry)
///     .difficulty(GameDifficulty::Hard)
///     .player("Anna")
///     .player("Ben")
///     .build(42);
/// ```
pub struct GameBuilder {
    registry: CardRegistry,
    config: GameConfig,
    difficulty: GameDifficulty,
    player_names: Vec<String>,
}

impl GameBuilder {
    /// Start building a session over a card registry.
    #[must_use]
    pub fn new(registry: CardRegistry) -> Self {
        Self {
            registry,
            config: GameConfig::default(),
            difficulty: GameDifficulty::Medium,
            player_names: Vec::new(),
        }
    }

    /// Replace the default configuration.
    #[must_use]
    pub fn config(mut self, config: GameConfig) -> Self {
        self.config = config;
        self
    }

    /// Set the game difficulty.
    #[must_use]
    pub fn difficulty(mut self, difficulty: GameDifficulty) -> Self {
        self.difficulty = difficulty;
        self
    }

    /// Add a player. Blank names get a seat-numbered default.
    #[must_use]
    pub fn player(mut self, name: impl Into<String>) -> Self {
        self.player_names.push(name.into());
        self
    }

    /// Build the session and deal the opening cards.
    ///
    /// The deck is filtered and shuffled, one card seeds the timeline,
    /// and the next becomes the first player's active card.
    ///
    /// Panics without 1-4 players, or if the filtered deck has fewer
    /// than two cards.
    #[must_use]
    pub fn build(self, seed: u64) -> Game {
        assert!(
            (1..=4).contains(&self.player_names.len()),
            "Games support 1-4 players"
        );

        let settings = self.config.difficulty(self.difficulty);
        let mut rng = GameRng::new(seed);
        let mut deck = Deck::build(&self.registry, settings, &mut rng);

        assert!(
            deck.len() >= 2,
            "Deck has {} cards after filtering; need at least 2",
            deck.len()
        );

        let players: Vec<Player> = self
            .player_names
            .iter()
            .enumerate()
            .map(|(index, name)| {
                let name = if name.trim().is_empty() {
                    format!("Player {}", index + 1)
                } else {
                    name.trim().to_string()
                };
                Player::new(
                    PlayerId::new(index as u8),
                    name,
                    PLAYER_COLORS[index],
                    settings.lives,
                )
            })
            .collect();

        let mut timeline = Timeline::new();
        let first = deck.draw().expect("deck has at least 2 cards");
        timeline.insert_at(0, self.registry.get_unchecked(first).clone());

        let active = deck.draw().expect("deck has at least 2 cards");
        let active_card = Some(self.registry.get_unchecked(active).clone());

        Game {
            config: self.config,
            registry: self.registry,
            difficulty: self.difficulty,
            status: GameStatus::Playing,
            players,
            current_player: 0,
            timeline,
            deck,
            active_card,
            pending_answer: false,
            feedback: None,
            last_score: None,
            winner: None,
            rng,
        }
    }
}

impl Game {
    /// Record the current player's answer to the active Content card's
    /// question. Cleared after every placement; ignored by scoring for
    /// cards without a question bonus.
    ///
    /// Panics outside `Playing`.
    pub fn answer_question(&mut self, correct: bool) {
        assert!(
            self.status == GameStatus::Playing,
            "Questions can only be answered while playing"
        );
        self.pending_answer = correct;
    }

    /// Place the active card at a timeline position.
    ///
    /// Validates the placement; on success scores it, applies the
    /// points, and inserts the card. On failure the player loses a life
    /// and their streak. Either way the session moves to the feedback
    /// status and waits for `next_turn`.
    ///
    /// Panics outside `Playing` or on an out-of-range index.
    pub fn place_card(&mut self, insert_index: usize) -> PlacementOutcome {
        assert!(
            self.status == GameStatus::Playing,
            "Cards can only be placed while playing"
        );
        let card = self
            .active_card
            .clone()
            .expect("active card present while playing");

        let outcome = validate_placement(&card, &self.timeline, insert_index);
        let player = &mut self.players[self.current_player];

        if outcome.is_correct {
            let breakdown = calculate_score(
                &self.config,
                &card,
                player.streak + 1,
                self.difficulty,
                self.pending_answer,
            );
            player.record_correct(breakdown.total_points);
            self.timeline.insert_at(insert_index, card);
            self.status = GameStatus::Correct;
            self.last_score = Some(breakdown);
        } else {
            player.record_wrong();
            self.status = GameStatus::Wrong;
            self.last_score = None;
        }

        self.feedback = Some(outcome.message.clone());
        self.pending_answer = false;
        outcome
    }

    /// Advance to the next turn: rotate to the next non-eliminated
    /// player and draw their card, or end the game when no active
    /// players or cards remain.
    ///
    /// Panics unless the session is in a feedback status.
    pub fn next_turn(&mut self) {
        assert!(
            matches!(self.status, GameStatus::Correct | GameStatus::Wrong),
            "next_turn is only legal after a placement"
        );

        let active_players = self.players.iter().filter(|p| !p.eliminated).count();
        if active_players == 0 || self.deck.is_empty() {
            self.finish();
            return;
        }

        let mut next = (self.current_player + 1) % self.players.len();
        while self.players[next].eliminated {
            next = (next + 1) % self.players.len();
        }

        if let Some(id) = self.deck.draw() {
            self.active_card = Some(self.registry.get_unchecked(id).clone());
            self.current_player = next;
            self.status = GameStatus::Playing;
            self.feedback = None;
            self.last_score = None;
            self.pending_answer = false;
        } else {
            self.finish();
        }
    }

    /// End the session and pick the winner: highest score among active
    /// players (among everyone if all are eliminated); earliest seat
    /// wins ties.
    fn finish(&mut self) {
        let any_active = self.players.iter().any(|p| !p.eliminated);
        let mut best: Option<&Player> = None;

        for player in &self.players {
            if any_active && player.eliminated {
                continue;
            }
            if best.map_or(true, |b| player.score > b.score) {
                best = Some(player);
            }
        }

        self.winner = best.map(|p| p.id);
        self.status = GameStatus::GameOver;
        self.active_card = None;
    }

    // === Accessors ===

    /// Current session status.
    #[must_use]
    pub fn status(&self) -> GameStatus {
        self.status
    }

    /// Active game difficulty.
    #[must_use]
    pub fn difficulty(&self) -> GameDifficulty {
        self.difficulty
    }

    /// All players, in seat order.
    #[must_use]
    pub fn players(&self) -> &[Player] {
        &self.players
    }

    /// The player whose turn it is.
    #[must_use]
    pub fn current_player(&self) -> &Player {
        &self.players[self.current_player]
    }

    /// The shared timeline.
    #[must_use]
    pub fn timeline(&self) -> &Timeline {
        &self.timeline
    }

    /// The card being placed, if the session is still running.
    #[must_use]
    pub fn active_card(&self) -> Option<&Card> {
        self.active_card.as_ref()
    }

    /// Cards left in the draw pile.
    #[must_use]
    pub fn remaining_cards(&self) -> usize {
        self.deck.len()
    }

    /// Feedback message from the last placement.
    #[must_use]
    pub fn feedback(&self) -> Option<&str> {
        self.feedback.as_deref()
    }

    /// Score breakdown of the last correct placement.
    #[must_use]
    pub fn last_score(&self) -> Option<&ScoreBreakdown> {
        self.last_score.as_ref()
    }

    /// The winner, once the session is over.
    #[must_use]
    pub fn winner(&self) -> Option<PlayerId> {
        self.winner
    }

    /// Capture the full session state for serialization.
    #[must_use]
    pub fn snapshot(&self) -> GameSnapshot {
        GameSnapshot {
            difficulty: self.difficulty,
            status: self.status,
            players: self.players.clone(),
            current_player: self.current_player,
            timeline: self.timeline.clone(),
            deck: self.deck.clone(),
            active_card: self.active_card.clone(),
            pending_answer: self.pending_answer,
            feedback: self.feedback.clone(),
            last_score: self.last_score.clone(),
            winner: self.winner,
            rng: self.rng.state(),
        }
    }

    /// Rebuild a session from a snapshot.
    ///
    /// The registry and configuration are static content and are not
    /// part of the snapshot; pass the same ones the session was built
    /// with.
    #[must_use]
    pub fn restore(snapshot: GameSnapshot, config: GameConfig, registry: CardRegistry) -> Self {
        Self {
            config,
            registry,
            difficulty: snapshot.difficulty,
            status: snapshot.status,
            players: snapshot.players,
            current_player: snapshot.current_player,
            timeline: snapshot.timeline,
            deck: snapshot.deck,
            active_card: snapshot.active_card,
            pending_answer: snapshot.pending_answer,
            feedback: snapshot.feedback,
            last_score: snapshot.last_score,
            winner: snapshot.winner,
            rng: GameRng::from_state(&snapshot.rng),
        }
    }
}
