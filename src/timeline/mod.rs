//! The shared chronological timeline.
//!
//! An ordered sequence of placed cards, ascending by `sort_year`. The
//! rules functions only read it; insertion is performed by the game
//! controller after a placement has been validated.
//!
//! Backed by `im::Vector` for O(1) cloning, so callers can cheaply
//! evaluate speculative placements against a copy.
//!
//! ## Ordering caveat
//!
//! Wildcard placements are accepted at any position, so a timeline
//! containing wildcards may locally violate the ascending order (the
//! wildcard's own anchor is kept as its sort key). `is_ordered` reports
//! whether the invariant currently holds.

use im::Vector;
use serde::{Deserialize, Serialize};

use crate::cards::Card;

/// Ordered sequence of placed cards.
///
/// ## Example
///
/// ```
/// use chronodeck::cards::{Anchor, Card, CardId, Category, Tier};
/// use chronodeck::timeline::Timeline;
///
/// let mut timeline = Timeline::new();
/// timeline.insert_at(0, Card::new(
///     CardId::new(1), "Oceans", "Hillsong United",
///     Category::Basic, Tier::Low, Anchor::year(2013),
/// ));
/// timeline.insert_at(0, Card::new(
///     CardId::new(2), "Abba Vader", "Opwekking 136",
///     Category::Basic, Tier::Medium, Anchor::year(1980),
/// ));
///
/// assert_eq!(timeline.len(), 2);
/// assert!(timeline.is_ordered());
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Timeline {
    cards: Vector<Card>,
}

impl Timeline {
    /// Create an empty timeline.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of placed cards.
    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    /// Check if the timeline is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Get the card at an index.
    #[must_use]
    pub fn get(&self, index: usize) -> Option<&Card> {
        self.cards.get(index)
    }

    /// First (oldest) card.
    #[must_use]
    pub fn first(&self) -> Option<&Card> {
        self.cards.front()
    }

    /// Last (newest) card.
    #[must_use]
    pub fn last(&self) -> Option<&Card> {
        self.cards.back()
    }

    /// Iterate over the cards in timeline order.
    pub fn iter(&self) -> impl Iterator<Item = &Card> {
        self.cards.iter()
    }

    /// Insert a card at a position.
    ///
    /// Positions are gaps: 0 = before the first card,
    /// `len()` = after the last. Panics on an out-of-range index.
    pub fn insert_at(&mut self, index: usize, card: Card) {
        assert!(
            index <= self.cards.len(),
            "Insert index {} out of range for timeline of {} cards",
            index,
            self.cards.len()
        );
        self.cards.insert(index, card);
    }

    /// Check the ascending-order invariant over adjacent pairs.
    ///
    /// Holds for any timeline built from validated placements without
    /// wildcards; wildcards may break it.
    #[must_use]
    pub fn is_ordered(&self) -> bool {
        self.cards
            .iter()
            .zip(self.cards.iter().skip(1))
            .all(|(a, b)| a.sort_year() <= b.sort_year())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cards::{Anchor, CardId, Category, Tier};

    fn card(id: u32, year: i32) -> Card {
        Card::new(
            CardId::new(id),
            format!("Song {}", id),
            "Artist",
            Category::Basic,
            Tier::Low,
            Anchor::year(year),
        )
    }

    #[test]
    fn test_empty_timeline() {
        let timeline = Timeline::new();
        assert!(timeline.is_empty());
        assert_eq!(timeline.len(), 0);
        assert!(timeline.first().is_none());
        assert!(timeline.is_ordered());
    }

    #[test]
    fn test_insert_positions() {
        let mut timeline = Timeline::new();
        timeline.insert_at(0, card(1, 1990));
        timeline.insert_at(1, card(2, 2010));
        timeline.insert_at(1, card(3, 2000));

        let years: Vec<_> = timeline.iter().map(Card::sort_year).collect();
        assert_eq!(years, vec![1990, 2000, 2010]);
        assert_eq!(timeline.first().unwrap().id, CardId::new(1));
        assert_eq!(timeline.last().unwrap().id, CardId::new(2));
        assert!(timeline.is_ordered());
    }

    #[test]
    fn test_is_ordered_detects_violation() {
        let mut timeline = Timeline::new();
        timeline.insert_at(0, card(1, 2010));
        timeline.insert_at(1, card(2, 1990));

        assert!(!timeline.is_ordered());
    }

    #[test]
    #[should_panic(expected = "out of range")]
    fn test_insert_out_of_range_panics() {
        let mut timeline = Timeline::new();
        timeline.insert_at(1, card(1, 1990));
    }

    #[test]
    fn test_clone_is_independent() {
        let mut timeline = Timeline::new();
        timeline.insert_at(0, card(1, 1990));

        let snapshot = timeline.clone();
        timeline.insert_at(1, card(2, 2000));

        assert_eq!(snapshot.len(), 1);
        assert_eq!(timeline.len(), 2);
    }

    #[test]
    fn test_timeline_serialization() {
        let mut timeline = Timeline::new();
        timeline.insert_at(0, card(1, 1990));
        timeline.insert_at(1, card(2, 2000));

        let json = serde_json::to_string(&timeline).unwrap();
        let deserialized: Timeline = serde_json::from_str(&json).unwrap();
        assert_eq!(timeline, deserialized);
    }
}
