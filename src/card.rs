//! Card names and their classification.
//!
//! A card is identified only by its rank token. The closed set of valid
//! tokens lives in a single table, and every predicate in this module is a
//! view over [`classify`].

use core::fmt;
use core::str::FromStr;

use log::debug;

use crate::error::CardError;

/// Category of a card name.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Category {
    /// The ace ("A").
    Ace,
    /// A face card ("J", "Q" or "K").
    Face,
    /// A number card ("2" through "10").
    Number,
    /// Text that is not a card name.
    Invalid,
}

/// Number of distinct card names.
pub const CARD_COUNT: usize = 13;

#[derive(Debug, PartialEq, Eq, Hash)]
struct Entry {
    name: &'static str,
    category: Category,
    points: u8,
}

const fn entry(name: &'static str, category: Category, points: u8) -> Entry {
    Entry {
        name,
        category,
        points,
    }
}

// Rank order. Aces count 1 here; the hand bonus is applied in `hand`.
static TABLE: [Entry; CARD_COUNT] = [
    entry("A", Category::Ace, 1),
    entry("2", Category::Number, 2),
    entry("3", Category::Number, 3),
    entry("4", Category::Number, 4),
    entry("5", Category::Number, 5),
    entry("6", Category::Number, 6),
    entry("7", Category::Number, 7),
    entry("8", Category::Number, 8),
    entry("9", Category::Number, 9),
    entry("10", Category::Number, 10),
    entry("J", Category::Face, 10),
    entry("Q", Category::Face, 10),
    entry("K", Category::Face, 10),
];

/// All valid card names in rank order.
pub const CARD_NAMES: [&str; CARD_COUNT] = [
    "A", "2", "3", "4", "5", "6", "7", "8", "9", "10", "J", "Q", "K",
];

fn lookup(name: &str) -> Option<&'static Entry> {
    TABLE.iter().find(|entry| entry.name == name)
}

/// Classifies a card name.
///
/// Matching is exact: surrounding whitespace or a different letter case makes
/// the name [`Category::Invalid`].
///
/// # Example
///
/// ```
/// use bjhand::{Category, classify};
///
/// assert_eq!(classify("A"), Category::Ace);
/// assert_eq!(classify("10"), Category::Number);
/// assert_eq!(classify("q"), Category::Invalid);
/// ```
#[must_use]
pub fn classify(name: &str) -> Category {
    lookup(name).map_or(Category::Invalid, |entry| entry.category)
}

/// Returns whether `name` is the ace.
#[must_use]
pub fn is_ace(name: &str) -> bool {
    classify(name) == Category::Ace
}

/// Returns whether `name` is a face card ("J", "Q" or "K").
#[must_use]
pub fn is_face_card(name: &str) -> bool {
    classify(name) == Category::Face
}

/// Returns whether `name` is a number card ("2" through "10").
#[must_use]
pub fn is_number_card(name: &str) -> bool {
    classify(name) == Category::Number
}

/// Returns whether `name` is any valid card name.
#[must_use]
pub fn is_card_name(name: &str) -> bool {
    classify(name) != Category::Invalid
}

/// Returns the point value of a single card.
///
/// An ace is worth 1, a face card 10 and a number card its own value.
///
/// # Errors
///
/// Returns [`CardError::InvalidName`] if `name` is not a card name.
///
/// # Example
///
/// ```
/// use bjhand::{CardError, card_points};
///
/// assert_eq!(card_points("4"), Ok(4));
/// assert_eq!(card_points("K"), Ok(10));
/// assert_eq!(card_points("1"), Err(CardError::InvalidName));
/// ```
pub fn card_points(name: &str) -> Result<u8, CardError> {
    Card::parse(name).map(Card::points)
}

/// A validated card name.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Card {
    entry: &'static Entry,
}

impl Card {
    /// Parses a card name.
    ///
    /// # Errors
    ///
    /// Returns [`CardError::InvalidName`] if `name` is not a card name.
    pub fn parse(name: &str) -> Result<Self, CardError> {
        lookup(name).map(|entry| Self { entry }).ok_or_else(|| {
            debug!("rejected card name {name:?}");
            CardError::InvalidName
        })
    }

    /// Returns an iterator over every card in rank order.
    pub fn all() -> impl Iterator<Item = Self> {
        TABLE.iter().map(|entry| Self { entry })
    }

    /// Returns the card name token.
    #[must_use]
    pub const fn name(self) -> &'static str {
        self.entry.name
    }

    /// Returns the card category. Never [`Category::Invalid`].
    #[must_use]
    pub const fn category(self) -> Category {
        self.entry.category
    }

    /// Returns the base point value (ace = 1).
    #[must_use]
    pub const fn points(self) -> u8 {
        self.entry.points
    }

    /// Returns whether this card is the ace.
    #[must_use]
    pub const fn is_ace(self) -> bool {
        matches!(self.entry.category, Category::Ace)
    }
}

impl FromStr for Card {
    type Err = CardError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl fmt::Display for Card {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.entry.name)
    }
}
