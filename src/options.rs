//! Game configuration options.

/// How a hand's cards add up to a score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[non_exhaustive]
pub enum ScoringRule {
    /// Two through ten count face value, jack, queen and king count 10, and an
    /// ace counts 11 unless that would take the hand over 21, then 1.
    #[default]
    Standard,
    /// Every card counts its rank ordinal (Ace = 1 through King = 13).
    Ordinal,
    /// Like [`ScoringRule::Ordinal`] but an ace counts 14.
    OrdinalAceHigh,
}

/// Configuration options for a game.
///
/// Use the builder pattern to customize options:
///
/// ```
/// use twentyone::{GameOptions, ScoringRule};
///
/// let options = GameOptions::default()
///     .with_scoring(ScoringRule::Ordinal)
///     .with_initial_cards(2)
///     .with_shuffle_seats(false);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GameOptions {
    /// Scoring rule applied to every hand.
    pub scoring: ScoringRule,
    /// Cards dealt to each player before anyone decides.
    pub initial_cards: u8,
    /// Whether seats are shuffled into a random turn order when the game is
    /// created. When disabled, players act in the order they were given.
    pub shuffle_seats: bool,
}

impl Default for GameOptions {
    fn default() -> Self {
        Self {
            scoring: ScoringRule::Standard,
            initial_cards: 2,
            shuffle_seats: true,
        }
    }
}

impl GameOptions {
    /// Sets the scoring rule.
    ///
    /// # Example
    ///
    /// ```
    /// use twentyone::{GameOptions, ScoringRule};
    ///
    /// let options = GameOptions::default().with_scoring(ScoringRule::Ordinal);
    /// assert_eq!(options.scoring, ScoringRule::Ordinal);
    /// ```
    #[must_use]
    pub const fn with_scoring(mut self, scoring: ScoringRule) -> Self {
        self.scoring = scoring;
        self
    }

    /// Sets the number of cards dealt to each player.
    ///
    /// # Example
    ///
    /// ```
    /// use twentyone::GameOptions;
    ///
    /// let options = GameOptions::default().with_initial_cards(1);
    /// assert_eq!(options.initial_cards, 1);
    /// ```
    #[must_use]
    pub const fn with_initial_cards(mut self, cards: u8) -> Self {
        self.initial_cards = cards;
        self
    }

    /// Sets whether seats are shuffled into a random turn order.
    ///
    /// # Example
    ///
    /// ```
    /// use twentyone::GameOptions;
    ///
    /// let options = GameOptions::default().with_shuffle_seats(false);
    /// assert!(!options.shuffle_seats);
    /// ```
    #[must_use]
    pub const fn with_shuffle_seats(mut self, shuffle: bool) -> Self {
        self.shuffle_seats = shuffle;
        self
    }

    /// Returns the largest number of players a single deck can deal to.
    #[must_use]
    pub const fn max_players(&self) -> usize {
        match crate::card::DECK_SIZE.checked_div(self.initial_cards as usize) {
            Some(max) => max,
            None => u8::MAX as usize + 1,
        }
    }
}
