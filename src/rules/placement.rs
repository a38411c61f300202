//! Placement validation.
//!
//! Decides whether inserting a card at a given timeline position keeps
//! the ascending-chronological-order invariant, and explains which
//! neighbor was violated when it does not.
//!
//! Pure and deterministic: no state, no randomness, no side effects.
//! The timeline is only read - the controller performs the actual
//! insertion after a correct validation.

use serde::{Deserialize, Serialize};

use crate::cards::{Anchor, Card, Category};
use crate::timeline::Timeline;

/// Result of a validation call.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlacementOutcome {
    /// Whether the placement keeps chronological order.
    pub is_correct: bool,

    /// Display message: a success phrase, or a failure phrase naming
    /// the conflicting neighbor and its anchor.
    pub message: String,
}

impl PlacementOutcome {
    fn correct(message: impl Into<String>) -> Self {
        Self {
            is_correct: true,
            message: message.into(),
        }
    }

    fn incorrect(message: impl Into<String>) -> Self {
        Self {
            is_correct: false,
            message: message.into(),
        }
    }
}

/// Validate inserting `card` at position `insert_index`.
///
/// Positions are gaps: 0 = before the first card, `timeline.len()` =
/// after the last. Panics on an index outside `[0, len]` - that is a
/// caller bug, not a wrong guess.
///
/// Strategy by category:
/// - `Wildcard`: always correct, at any position.
/// - `Period`: correct iff the card's year range overlaps the open
///   window between the neighboring cards.
/// - everything else: the card's year must lie between its neighbors.
///
/// ## Example
///
/// ```
/// use chronodeck::cards::{Anchor, Card, CardId, Category, Tier};
/// use chronodeck::rules::validate_placement;
/// use chronodeck::timeline::Timeline;
///
/// let mut timeline = Timeline::new();
/// timeline.insert_at(0, Card::new(
///     CardId::new(1), "U zij de glorie", "Edmond Budry",
///     Category::Basic, Tier::Low, Anchor::year(1885),
/// ));
///
/// let card = Card::new(
///     CardId::new(2), "Way Maker", "Sinach",
///     Category::Basic, Tier::Low, Anchor::year(2019),
/// );
///
/// assert!(validate_placement(&card, &timeline, 1).is_correct);
/// assert!(!validate_placement(&card, &timeline, 0).is_correct);
/// ```
#[must_use]
pub fn validate_placement(card: &Card, timeline: &Timeline, insert_index: usize) -> PlacementOutcome {
    assert!(
        insert_index <= timeline.len(),
        "Insert index {} out of range for timeline of {} cards",
        insert_index,
        timeline.len()
    );

    match card.category {
        Category::Wildcard => PlacementOutcome::correct("Wildcard placed!"),
        Category::Period => validate_period(card, timeline, insert_index),
        Category::Basic | Category::Recognition | Category::Content => {
            validate_year(card, timeline, insert_index)
        }
    }
}

/// Point-anchor validation for Basic, Recognition, and Content cards.
fn validate_year(card: &Card, timeline: &Timeline, insert_index: usize) -> PlacementOutcome {
    let year = card.sort_year();

    // Empty timeline - any position is valid
    if timeline.is_empty() {
        return PlacementOutcome::correct("Well done!");
    }

    // Inserting at the beginning
    if insert_index == 0 {
        let first = timeline.first().expect("timeline is non-empty");
        if year <= first.sort_year() {
            return PlacementOutcome::correct("Well done!");
        }
        return PlacementOutcome::incorrect(format!(
            "Wrong! \"{}\" ({}) belongs after \"{}\" ({}).",
            card.title,
            year,
            first.title,
            first.sort_year()
        ));
    }

    // Inserting at the end
    if insert_index == timeline.len() {
        let last = timeline.last().expect("timeline is non-empty");
        if year >= last.sort_year() {
            return PlacementOutcome::correct("Well done!");
        }
        return PlacementOutcome::incorrect(format!(
            "Wrong! \"{}\" ({}) belongs before \"{}\" ({}).",
            card.title,
            year,
            last.title,
            last.sort_year()
        ));
    }

    // Inserting in the middle
    let prev = timeline.get(insert_index - 1).expect("index checked above");
    let next = timeline.get(insert_index).expect("index checked above");

    if prev.sort_year() <= year && year <= next.sort_year() {
        return PlacementOutcome::correct("Well done!");
    }

    // Exactly one of the two bounds is violated here
    if year < prev.sort_year() {
        PlacementOutcome::incorrect(format!(
            "Wrong! \"{}\" ({}) is older than \"{}\" ({}).",
            card.title,
            year,
            prev.title,
            prev.sort_year()
        ))
    } else {
        PlacementOutcome::incorrect(format!(
            "Wrong! \"{}\" ({}) is newer than \"{}\" ({}).",
            card.title,
            year,
            next.title,
            next.sort_year()
        ))
    }
}

/// Range-overlap validation for Period cards.
///
/// The placement is correct iff the card's range intersects the open
/// window between the neighbors - overlap, not containment, so a wide
/// period still fits a narrow gap it straddles.
fn validate_period(card: &Card, timeline: &Timeline, insert_index: usize) -> PlacementOutcome {
    let (start, end) = match card.anchor {
        Anchor::Range { start, end } => (start, end),
        // Card::new rejects Period cards without a range anchor
        Anchor::Year(_) => unreachable!("Period card without a range anchor"),
    };

    // Empty timeline - any position is valid
    if timeline.is_empty() {
        return PlacementOutcome::correct("Well done!");
    }

    let lower = if insert_index > 0 {
        timeline
            .get(insert_index - 1)
            .expect("index in range")
            .sort_year()
    } else {
        i32::MIN
    };
    let upper = if insert_index < timeline.len() {
        timeline.get(insert_index).expect("index in range").sort_year()
    } else {
        i32::MAX
    };

    if start <= upper && end >= lower {
        return PlacementOutcome::correct("Well done!");
    }

    PlacementOutcome::incorrect(format!(
        "Wrong! The period {}-{} does not fit here.",
        start, end
    ))
}
