//! Card registry for definition lookup.
//!
//! The `CardRegistry` stores every card available to a session and
//! provides fast lookup by `CardId`. Decks are built from a registry by
//! filtering on difficulty settings (see `cards::deck`).

use rustc_hash::FxHashMap;

use super::card::{Card, CardId};

/// Registry of cards.
///
/// ## Example
///
/// ```
/// use chronodeck::cards::{Anchor, Card, CardId, CardRegistry, Category, Tier};
///
/// let mut registry = CardRegistry::new();
///
/// registry.register(Card::new(
///     CardId::new(1),
///     "Stille nacht",
///     "Joseph Mohr",
///     Category::Basic,
///     Tier::Low,
///     Anchor::year(1818),
/// ));
///
/// let found = registry.get(CardId::new(1)).unwrap();
/// assert_eq!(found.title, "Stille nacht");
/// ```
#[derive(Clone, Debug, Default)]
pub struct CardRegistry {
    cards: FxHashMap<CardId, Card>,
}

impl CardRegistry {
    /// Create a new empty registry.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a card.
    ///
    /// Panics if a card with the same ID already exists.
    pub fn register(&mut self, card: Card) {
        if self.cards.contains_key(&card.id) {
            panic!("Card with ID {:?} already registered", card.id);
        }
        self.cards.insert(card.id, card);
    }

    /// Get a card by ID.
    #[must_use]
    pub fn get(&self, id: CardId) -> Option<&Card> {
        self.cards.get(&id)
    }

    /// Get a card by ID, panicking if not found.
    ///
    /// Use when you're certain the card exists (e.g. an ID drawn from a
    /// deck built over this registry).
    #[must_use]
    pub fn get_unchecked(&self, id: CardId) -> &Card {
        self.cards.get(&id).expect("Card not found in registry")
    }

    /// Check if a card ID is registered.
    #[must_use]
    pub fn contains(&self, id: CardId) -> bool {
        self.cards.contains_key(&id)
    }

    /// Get the number of registered cards.
    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    /// Check if the registry is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Iterate over all cards.
    pub fn iter(&self) -> impl Iterator<Item = &Card> {
        self.cards.values()
    }

    /// Find cards matching a predicate.
    pub fn find<F>(&self, predicate: F) -> impl Iterator<Item = &Card>
    where
        F: Fn(&Card) -> bool,
    {
        self.cards.values().filter(move |c| predicate(c))
    }
}
