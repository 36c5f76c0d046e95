//! Game configuration options.

/// Highest dealer stand threshold accepted by [`GameOptions`].
pub const MAX_DEALER_STANDS_AT: u8 = 21;

/// Configuration options for a game.
///
/// Use the builder pattern to customize options:
///
/// ```
/// use bjtable::GameOptions;
///
/// let options = GameOptions::default()
///     .with_dealer_stands_at(17)
///     .with_evaluate_after_deal(false);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct GameOptions {
    /// The dealer keeps drawing while their score is below this value.
    ///
    /// It is also the lowest dealer score that is compared against the
    /// player's score to settle a round.
    pub dealer_stands_at: u8,
    /// Whether the outcome is evaluated straight after the initial deal, so a
    /// dealt 21 (or two aces) ends the round before any action.
    pub evaluate_after_deal: bool,
}

impl Default for GameOptions {
    fn default() -> Self {
        Self {
            dealer_stands_at: 17,
            evaluate_after_deal: true,
        }
    }
}

impl GameOptions {
    /// Sets the dealer stand threshold, clamped to at most 21.
    ///
    /// # Example
    ///
    /// ```
    /// use bjtable::GameOptions;
    ///
    /// let options = GameOptions::default().with_dealer_stands_at(30);
    /// assert_eq!(options.dealer_stands_at, 21);
    /// ```
    #[must_use]
    pub const fn with_dealer_stands_at(mut self, value: u8) -> Self {
        self.dealer_stands_at = if value > MAX_DEALER_STANDS_AT {
            MAX_DEALER_STANDS_AT
        } else {
            value
        };
        self
    }

    /// Sets whether the outcome is evaluated right after the deal.
    ///
    /// # Example
    ///
    /// ```
    /// use bjtable::GameOptions;
    ///
    /// let options = GameOptions::default().with_evaluate_after_deal(false);
    /// assert!(!options.evaluate_after_deal);
    /// ```
    #[must_use]
    pub const fn with_evaluate_after_deal(mut self, evaluate: bool) -> Self {
        self.evaluate_after_deal = evaluate;
        self
    }
}
