//! Two-card hand scoring.

use log::trace;

use crate::card::Card;
use crate::error::CardError;
use crate::options::ScoreRules;

fn evaluate(first: Card, second: Card, rules: &ScoreRules) -> (u8, bool) {
    let base = first.points() + second.points();
    if !(first.is_ace() || second.is_ace()) {
        return (base, false);
    }

    // One bonus per hand, however many aces.
    let bonus = base.saturating_add(rules.ace_bonus);
    if rules.ace_bonus > 0 && bonus <= rules.bust_limit {
        trace!("{first} {second}: ace bonus applied, {base} -> {bonus}");
        (bonus, true)
    } else {
        trace!("{first} {second}: ace bonus skipped, score {base}");
        (base, false)
    }
}

/// Returns whether a score is a bust (greater than 21).
///
/// # Example
///
/// ```
/// use bjhand::is_bust;
///
/// assert!(!is_bust(21));
/// assert!(is_bust(22));
/// ```
#[must_use]
pub fn is_bust(score: i32) -> bool {
    ScoreRules::default().is_bust(score)
}

/// Calculates the score of a hand made of two card names.
///
/// Each card scores its points. If the hand holds an ace, the score is raised
/// by 10 unless that would take it over 21.
///
/// # Errors
///
/// Returns [`CardError::InvalidName`] if either name is not a card name.
///
/// # Example
///
/// ```
/// use bjhand::two_card_hand_score;
///
/// assert_eq!(two_card_hand_score("A", "K"), Ok(21));
/// assert_eq!(two_card_hand_score("A", "A"), Ok(12));
/// assert_eq!(two_card_hand_score("10", "J"), Ok(20));
/// ```
pub fn two_card_hand_score(card_1: &str, card_2: &str) -> Result<u8, CardError> {
    Ok(TwoCardHand::parse(card_1, card_2)?.score())
}

/// A hand of exactly two cards.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TwoCardHand {
    cards: [Card; 2],
}

impl TwoCardHand {
    /// Creates a hand from two cards.
    #[must_use]
    pub const fn new(first: Card, second: Card) -> Self {
        Self {
            cards: [first, second],
        }
    }

    /// Creates a hand from two card names.
    ///
    /// # Errors
    ///
    /// Returns [`CardError::InvalidName`] if either name is not a card name.
    pub fn parse(card_1: &str, card_2: &str) -> Result<Self, CardError> {
        Ok(Self::new(Card::parse(card_1)?, Card::parse(card_2)?))
    }

    /// Returns the cards in the hand.
    #[must_use]
    pub const fn cards(&self) -> &[Card; 2] {
        &self.cards
    }

    /// Calculates the score with the standard rules.
    #[must_use]
    pub fn score(&self) -> u8 {
        self.score_with(&ScoreRules::default())
    }

    /// Calculates the score with custom rules.
    #[must_use]
    pub fn score_with(&self, rules: &ScoreRules) -> u8 {
        evaluate(self.cards[0], self.cards[1], rules).0
    }

    /// Returns whether the ace bonus counts toward the score.
    #[must_use]
    pub fn is_soft(&self) -> bool {
        self.is_soft_with(&ScoreRules::default())
    }

    /// Returns whether the ace bonus counts toward the score under `rules`.
    #[must_use]
    pub fn is_soft_with(&self, rules: &ScoreRules) -> bool {
        evaluate(self.cards[0], self.cards[1], rules).1
    }

    /// Returns whether the hand is a natural: an ace with a ten-point card.
    #[must_use]
    pub fn is_blackjack(&self) -> bool {
        let rules = ScoreRules::default();
        let (score, soft) = evaluate(self.cards[0], self.cards[1], &rules);
        soft && score == rules.bust_limit
    }

    /// Returns whether the hand is bust under the standard rules.
    #[must_use]
    pub fn is_bust(&self) -> bool {
        self.is_bust_with(&ScoreRules::default())
    }

    /// Returns whether the hand is bust under `rules`.
    ///
    /// Two cards never bust under the standard rules, but a lowered
    /// bust limit can make them.
    #[must_use]
    pub fn is_bust_with(&self, rules: &ScoreRules) -> bool {
        rules.is_bust(i32::from(self.score_with(rules)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn hand(a: &str, b: &str) -> TwoCardHand {
        TwoCardHand::parse(a, b).unwrap()
    }

    #[test]
    fn bonus_disabled_by_zero() {
        let rules = ScoreRules::default().with_ace_bonus(0);
        assert_eq!(hand("A", "5").score_with(&rules), 6);
        assert!(!hand("A", "5").is_soft_with(&rules));
    }

    #[test]
    fn bonus_respects_custom_limit() {
        let rules = ScoreRules::default().with_bust_limit(15);
        assert_eq!(hand("A", "4").score_with(&rules), 15);
        assert_eq!(hand("A", "5").score_with(&rules), 6);
        assert!(hand("9", "7").is_bust_with(&rules));
        assert!(!hand("9", "6").is_bust_with(&rules));
    }

    #[test]
    fn blackjack_needs_ace_and_ten() {
        assert!(hand("A", "10").is_blackjack());
        assert!(hand("Q", "A").is_blackjack());
        assert!(!hand("K", "Q").is_blackjack());
        assert!(!hand("A", "9").is_blackjack());
    }
}
