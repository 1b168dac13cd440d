//! Scoring configuration.

/// Threshold above which a hand is bust.
pub const BUST_LIMIT: u8 = 21;

/// Points added to a hand holding an ace when it does not cause a bust.
pub const ACE_BONUS: u8 = 10;

/// Rules used to score a two-card hand.
///
/// Use the builder pattern to customize rules:
///
/// ```
/// use bjhand::ScoreRules;
///
/// let rules = ScoreRules::default()
///     .with_bust_limit(31)
///     .with_ace_bonus(10);
/// assert_eq!(rules.bust_limit, 31);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ScoreRules {
    /// Highest score that is not a bust.
    pub bust_limit: u8,
    /// Bonus for a hand containing at least one ace.
    pub ace_bonus: u8,
}

impl Default for ScoreRules {
    fn default() -> Self {
        Self {
            bust_limit: BUST_LIMIT,
            ace_bonus: ACE_BONUS,
        }
    }
}

impl ScoreRules {
    /// Sets the bust limit.
    ///
    /// # Example
    ///
    /// ```
    /// use bjhand::ScoreRules;
    ///
    /// let rules = ScoreRules::default().with_bust_limit(15);
    /// assert_eq!(rules.bust_limit, 15);
    /// ```
    #[must_use]
    pub const fn with_bust_limit(mut self, bust_limit: u8) -> Self {
        self.bust_limit = bust_limit;
        self
    }

    /// Sets the ace bonus. Zero disables it.
    #[must_use]
    pub const fn with_ace_bonus(mut self, ace_bonus: u8) -> Self {
        self.ace_bonus = ace_bonus;
        self
    }

    /// Returns whether `score` is over the bust limit.
    #[must_use]
    pub fn is_bust(&self, score: i32) -> bool {
        score > i32::from(self.bust_limit)
    }
}
