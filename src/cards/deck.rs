//! Deck construction and drawing.
//!
//! A `Deck` is the shuffled draw pile for one session: card IDs from a
//! `CardRegistry`, filtered by the active difficulty's allowed tiers
//! (wildcards always make the cut), shuffled with the session `GameRng`.
//!
//! Backed by `im::Vector` so cloning a mid-game deck is O(1).

use im::Vector;
use serde::{Deserialize, Serialize};

use crate::core::config::DifficultyConfig;
use crate::core::rng::GameRng;

use super::card::{CardId, Category};
use super::registry::CardRegistry;

/// Shuffled draw pile of card IDs.
///
/// ## Example
///
/// ```
/// use chronodeck::cards::{Anchor, Card, CardId, CardRegistry, Category, Deck, Tier};
/// use chronodeck::core::{GameConfig, GameDifficulty, GameRng};
///
/// let mut registry = CardRegistry::new();
/// registry.register(Card::new(
///     CardId::new(1), "A", "X", Category::Basic, Tier::Low, Anchor::year(1980),
/// ));
/// registry.register(Card::new(
///     CardId::new(2), "B", "Y", Category::Basic, Tier::High, Anchor::year(1990),
/// ));
///
/// let config = GameConfig::default();
/// let mut rng = GameRng::new(7);
/// let deck = Deck::build(
///     &registry,
///     config.difficulty(GameDifficulty::Easy),
///     &mut rng,
/// );
///
/// // High-tier card filtered out on Easy
/// assert_eq!(deck.len(), 1);
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Deck {
    draw_pile: Vector<CardId>,
}

impl Deck {
    /// Build a shuffled deck for one session.
    ///
    /// Filters the registry by the difficulty's allowed tiers (wildcards
    /// always pass), then shuffles deterministically with `rng`. The
    /// candidate list is sorted by ID before shuffling so the result
    /// depends only on the seed, not on hash-map iteration order.
    #[must_use]
    pub fn build(registry: &CardRegistry, settings: &DifficultyConfig, rng: &mut GameRng) -> Self {
        let mut ids: Vec<CardId> = registry
            .find(|card| settings.allows(card.tier) || card.category == Category::Wildcard)
            .map(|card| card.id)
            .collect();

        ids.sort_by_key(|id| id.raw());
        rng.shuffle(&mut ids);

        Self {
            draw_pile: ids.into_iter().collect(),
        }
    }

    /// Draw the top card. Returns `None` when the deck is exhausted.
    pub fn draw(&mut self) -> Option<CardId> {
        self.draw_pile.pop_back()
    }

    /// Number of cards left to draw.
    #[must_use]
    pub fn len(&self) -> usize {
        self.draw_pile.len()
    }

    /// Check if the deck is exhausted.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.draw_pile.is_empty()
    }

    /// Iterate over the remaining cards, bottom to top.
    pub fn iter(&self) -> impl Iterator<Item = &CardId> {
        self.draw_pile.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cards::{Anchor, Card, Tier};
    use crate::core::config::{GameConfig, GameDifficulty};

    fn registry() -> CardRegistry {
        let mut registry = CardRegistry::new();
        registry.register(Card::new(
            CardId::new(1),
            "Low Song",
            "A",
            Category::Basic,
            Tier::Low,
            Anchor::year(1980),
        ));
        registry.register(Card::new(
            CardId::new(2),
            "Medium Song",
            "B",
            Category::Basic,
            Tier::Medium,
            Anchor::year(1990),
        ));
        registry.register(Card::new(
            CardId::new(3),
            "High Song",
            "C",
            Category::Basic,
            Tier::High,
            Anchor::year(2000),
        ));
        registry.register(Card::new(
            CardId::new(4),
            "Joker",
            "Free Points",
            Category::Wildcard,
            Tier::High,
            Anchor::year(1995),
        ));
        registry
    }

    #[test]
    fn test_easy_deck_filters_tiers_but_keeps_wildcards() {
        let registry = registry();
        let config = GameConfig::default();
        let mut rng = GameRng::new(42);

        let deck = Deck::build(&registry, config.difficulty(GameDifficulty::Easy), &mut rng);

        let ids: Vec<_> = deck.iter().map(|id| id.raw()).collect();
        assert_eq!(deck.len(), 2);
        assert!(ids.contains(&1)); // Low tier
        assert!(ids.contains(&4)); // Wildcard, despite High tier
    }

    #[test]
    fn test_hard_deck_takes_everything() {
        let registry = registry();
        let config = GameConfig::default();
        let mut rng = GameRng::new(42);

        let deck = Deck::build(&registry, config.difficulty(GameDifficulty::Hard), &mut rng);
        assert_eq!(deck.len(), 4);
    }

    #[test]
    fn test_same_seed_same_order() {
        let registry = registry();
        let config = GameConfig::default();

        let deck1 = Deck::build(
            &registry,
            config.difficulty(GameDifficulty::Hard),
            &mut GameRng::new(7),
        );
        let deck2 = Deck::build(
            &registry,
            config.difficulty(GameDifficulty::Hard),
            &mut GameRng::new(7),
        );

        assert_eq!(deck1, deck2);
    }

    #[test]
    fn test_draw_exhausts_deck() {
        let registry = registry();
        let config = GameConfig::default();
        let mut rng = GameRng::new(7);
        let mut deck = Deck::build(&registry, config.difficulty(GameDifficulty::Hard), &mut rng);

        let mut drawn = Vec::new();
        while let Some(id) = deck.draw() {
            drawn.push(id);
        }

        assert_eq!(drawn.len(), 4);
        assert!(deck.is_empty());
        assert_eq!(deck.draw(), None);
    }
}
