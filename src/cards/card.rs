//! Card definitions - static card data.
//!
//! A `Card` holds the immutable properties of one playable item:
//! identity, category, difficulty tier, chronological anchor, and an
//! optional quiz question. Cards are created once at deck-load time and
//! never mutated afterwards - runtime state (timeline position, player
//! scores) lives elsewhere.

use serde::{Deserialize, Serialize};

/// Unique identifier for a card.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CardId(pub u32);

impl CardId {
    /// Create a new card ID.
    #[must_use]
    pub const fn new(id: u32) -> Self {
        Self(id)
    }

    /// Get the raw ID value.
    #[must_use]
    pub const fn raw(self) -> u32 {
        self.0
    }
}

impl std::fmt::Display for CardId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Card({})", self.0)
    }
}

/// Card category - determines validation strategy and scoring bonuses.
///
/// Exhaustively matched everywhere it is consumed, so adding a category
/// is a compile-time-checked change.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Category {
    /// Plain year-guessing card.
    Basic,
    /// Card anchored to an inclusive year range instead of a single year.
    Period,
    /// Recognition card - small flat bonus when placed correctly.
    Recognition,
    /// Card with an attached quiz question for a separate bonus.
    Content,
    /// Free card - valid at any timeline position.
    Wildcard,
}

/// Per-card difficulty tier, independent of the session's game difficulty.
///
/// Affects the score multiplier and which decks the card is dealt into.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Tier {
    Low,
    Medium,
    High,
}

impl std::fmt::Display for Tier {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Tier::Low => "low",
            Tier::Medium => "medium",
            Tier::High => "high",
        };
        write!(f, "{}", name)
    }
}

/// Chronological anchor: a point-in-time year, or an inclusive year range.
///
/// Every card has exactly one anchor. `Category::Period` cards carry a
/// range, all other categories a single year - `Card::new` enforces this,
/// so malformed cards are unrepresentable.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Anchor {
    /// Single year.
    Year(i32),
    /// Inclusive year range with `start <= end`.
    Range { start: i32, end: i32 },
}

impl Anchor {
    /// Create a single-year anchor.
    #[must_use]
    pub const fn year(year: i32) -> Self {
        Self::Year(year)
    }

    /// Create a year-range anchor.
    ///
    /// Panics if `start > end`.
    #[must_use]
    pub fn range(start: i32, end: i32) -> Self {
        assert!(start <= end, "Range start {} is after end {}", start, end);
        Self::Range { start, end }
    }

    /// Effective sort key on the timeline.
    ///
    /// Range anchors sort by the midpoint of their range.
    #[must_use]
    pub fn sort_year(self) -> i32 {
        match self {
            Anchor::Year(year) => year,
            Anchor::Range { start, end } => (start + end).div_euclid(2),
        }
    }
}

impl std::fmt::Display for Anchor {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Anchor::Year(year) => write!(f, "{}", year),
            Anchor::Range { start, end } => write!(f, "{}-{}", start, end),
        }
    }
}

/// Static card data.
///
/// ## Example
///
/// ```
/// use chronodeck::cards::{Anchor, Card, CardId, Category, Tier};
///
/// let card = Card::new(
///     CardId::new(1),
///     "Amazing Grace",
///     "John Newton",
///     Category::Content,
///     Tier::Low,
///     Anchor::year(1779),
/// )
/// .with_question("Which hymn was written by a former slave trader?");
///
/// assert_eq!(card.sort_year(), 1779);
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Card {
    /// Unique identifier.
    pub id: CardId,

    /// Song title (shown in placement feedback).
    pub title: String,

    /// Performing or writing artist.
    pub artist: String,

    /// Category - drives validation and scoring.
    pub category: Category,

    /// Difficulty tier.
    pub tier: Tier,

    /// Chronological anchor.
    pub anchor: Anchor,

    /// Quiz question, only meaningful for `Category::Content`.
    pub question: Option<String>,
}

impl Card {
    /// Create a new card.
    ///
    /// Panics if the anchor shape does not match the category:
    /// `Period` cards require a range anchor, every other category a
    /// single-year anchor.
    #[must_use]
    pub fn new(
        id: CardId,
        title: impl Into<String>,
        artist: impl Into<String>,
        category: Category,
        tier: Tier,
        anchor: Anchor,
    ) -> Self {
        match (category, anchor) {
            (Category::Period, Anchor::Range { .. }) => {}
            (Category::Period, Anchor::Year(_)) => {
                panic!("Period cards require a range anchor")
            }
            (_, Anchor::Range { .. }) => {
                panic!("Only Period cards may carry a range anchor")
            }
            (_, Anchor::Year(_)) => {}
        }

        Self {
            id,
            title: title.into(),
            artist: artist.into(),
            category,
            tier,
            anchor,
            question: None,
        }
    }

    /// Attach a quiz question (builder pattern).
    #[must_use]
    pub fn with_question(mut self, question: impl Into<String>) -> Self {
        self.question = Some(question.into());
        self
    }

    /// Effective chronological sort key (see `Anchor::sort_year`).
    #[must_use]
    pub fn sort_year(&self) -> i32 {
        self.anchor.sort_year()
    }
}
