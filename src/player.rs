//! Players, their hands, and hand scoring.

extern crate alloc;

use alloc::string::String;
use alloc::vec::Vec;
use core::fmt::Write;

use crate::card::{Card, Rank};
use crate::deck::Deck;
use crate::error::EmptyDeckError;
use crate::options::ScoringRule;

/// Scores above this limit are bust.
pub const BUST_LIMIT: u16 = 21;

const fn standard_value(rank: Rank) -> u16 {
    match rank {
        Rank::Ace => 11,
        Rank::Jack | Rank::Queen | Rank::King => 10,
        _ => rank.value() as u16,
    }
}

/// Scores `cards` under `rule`.
///
/// Under [`ScoringRule::Standard`] each ace counts 11 until the total would
/// exceed [`BUST_LIMIT`], after which aces drop to 1 one at a time.
#[must_use]
pub fn score_cards(cards: &[Card], rule: ScoringRule) -> u16 {
    match rule {
        ScoringRule::Ordinal => cards.iter().map(|c| u16::from(c.rank().value())).sum(),
        ScoringRule::OrdinalAceHigh => cards
            .iter()
            .map(|c| u16::from(c.rank().high_value()))
            .sum(),
        ScoringRule::Standard => {
            let mut value: u16 = 0;
            let mut aces: u16 = 0;

            for card in cards {
                if card.rank() == Rank::Ace {
                    aces += 1;
                }
                value = value.saturating_add(standard_value(card.rank()));
            }

            while value > BUST_LIMIT && aces > 0 {
                value -= 10;
                aces -= 1;
            }

            value
        }
    }
}

/// Player status within a round.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PlayerStatus {
    /// Still taking turns.
    Active,
    /// Chose to stop drawing for the rest of the round.
    Held,
    /// Score went over 21.
    Bust,
}

/// A player seated at the game.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Player {
    id: u8,
    name: String,
    hand: Vec<Card>,
    score: u16,
    status: PlayerStatus,
    scoring: ScoringRule,
}

impl Player {
    /// Creates a player with an empty hand.
    #[must_use]
    pub fn new(id: u8, name: impl Into<String>, scoring: ScoringRule) -> Self {
        Self {
            id,
            name: name.into(),
            hand: Vec::new(),
            score: 0,
            status: PlayerStatus::Active,
            scoring,
        }
    }

    /// Draws a card from `deck` into the hand and returns it.
    ///
    /// An active player goes bust as soon as the new score exceeds 21. A
    /// player who held keeps that status.
    ///
    /// # Errors
    ///
    /// Returns [`EmptyDeckError`] if the deck is empty; the hand is unchanged.
    pub fn draw(&mut self, deck: &mut Deck) -> Result<Card, EmptyDeckError> {
        let card = deck.draw()?;
        self.receive(card);
        Ok(card)
    }

    /// Adds a dealt card to the hand and rescores it.
    pub(crate) fn receive(&mut self, card: Card) {
        self.hand.push(card);
        self.update_score();

        if self.is_active() && self.is_bust() {
            self.status = PlayerStatus::Bust;
        }
    }

    /// Stops drawing for the rest of the round.
    ///
    /// Has no effect on a player who already held or went bust.
    pub fn hold(&mut self) {
        if self.status == PlayerStatus::Active {
            self.status = PlayerStatus::Held;
        }
    }

    /// Recomputes the score from the cards in hand.
    pub fn update_score(&mut self) {
        self.score = score_cards(&self.hand, self.scoring);
    }

    /// Returns whether the score is over 21.
    #[must_use]
    pub const fn is_bust(&self) -> bool {
        self.score > BUST_LIMIT
    }

    /// Returns whether the player still takes turns this round.
    #[must_use]
    pub const fn is_active(&self) -> bool {
        matches!(self.status, PlayerStatus::Active)
    }

    /// Returns whether the player has held.
    #[must_use]
    pub const fn is_held(&self) -> bool {
        matches!(self.status, PlayerStatus::Held)
    }

    /// Returns the hand, one `"<Rank> of <Suit>"` line per card.
    #[must_use]
    pub fn show_hand(&self) -> String {
        let mut out = String::new();
        for (index, card) in self.hand.iter().enumerate() {
            if index > 0 {
                out.push('\n');
            }
            let _ = write!(out, "{card}");
        }
        out
    }

    /// Clears the hand and status for a new round.
    pub fn reset(&mut self) {
        self.hand.clear();
        self.score = 0;
        self.status = PlayerStatus::Active;
    }

    /// Returns the player ID.
    #[must_use]
    pub const fn id(&self) -> u8 {
        self.id
    }

    /// Returns the player's name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the cards in hand, in the order received.
    #[must_use]
    pub fn hand(&self) -> &[Card] {
        &self.hand
    }

    /// Returns the current score.
    #[must_use]
    pub const fn score(&self) -> u16 {
        self.score
    }

    /// Returns the current status.
    #[must_use]
    pub const fn status(&self) -> PlayerStatus {
        self.status
    }

    /// Returns the scoring rule this player is scored by.
    #[must_use]
    pub const fn scoring(&self) -> ScoringRule {
        self.scoring
    }
}
