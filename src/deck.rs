//! The 52-card deck a round is played from.

extern crate alloc;

use alloc::vec::Vec;

use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

use crate::card::{Card, DECK_SIZE, Rank, Suit};
use crate::error::{DealError, EmptyDeckError};

/// A depleting deck of unique cards.
///
/// The last card of the underlying vector is the top of the deck.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Deck {
    cards: Vec<Card>,
}

impl Deck {
    /// Creates a full, unshuffled 52-card deck.
    ///
    /// # Example
    ///
    /// ```
    /// use twentyone::{DECK_SIZE, Deck};
    ///
    /// let deck = Deck::new();
    /// assert_eq!(deck.len(), DECK_SIZE);
    /// ```
    #[must_use]
    pub fn new() -> Self {
        let mut cards = Vec::with_capacity(DECK_SIZE);

        for suit in Suit::ALL {
            for rank in Rank::ALL {
                cards.push(Card::new(suit, rank));
            }
        }

        Self { cards }
    }

    /// Creates a stacked deck that deals `draws` in the given order.
    ///
    /// # Errors
    ///
    /// Returns [`DealError::InvalidDeck`] if `draws` repeats a card or holds
    /// more than [`DECK_SIZE`] cards.
    pub fn from_draw_order(draws: &[Card]) -> Result<Self, DealError> {
        let repeats = draws
            .iter()
            .enumerate()
            .any(|(index, card)| draws[..index].contains(card));
        if draws.len() > DECK_SIZE || repeats {
            return Err(DealError::InvalidDeck);
        }

        let mut cards = draws.to_vec();
        cards.reverse();
        Ok(Self { cards })
    }

    /// Shuffles the remaining cards with the provided RNG.
    pub fn shuffle<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        self.cards.shuffle(rng);
    }

    /// Shuffles the remaining cards with a `ChaCha8Rng` seeded from `seed`.
    ///
    /// Equal seeds produce equal card orders.
    pub fn shuffle_seeded(&mut self, seed: u64) {
        let mut rng = ChaCha8Rng::seed_from_u64(seed);
        self.shuffle(&mut rng);
    }

    /// Removes and returns the top card.
    ///
    /// # Errors
    ///
    /// Returns [`EmptyDeckError`] if no cards remain.
    pub fn draw(&mut self) -> Result<Card, EmptyDeckError> {
        self.cards.pop().ok_or(EmptyDeckError)
    }

    /// Returns the remaining cards, bottom first.
    #[must_use]
    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    /// Returns whether `card` is still in the deck.
    #[must_use]
    pub fn contains(&self, card: &Card) -> bool {
        self.cards.contains(card)
    }

    /// Returns the number of cards remaining.
    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    /// Returns whether the deck is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }
}

impl Default for Deck {
    fn default() -> Self {
        Self::new()
    }
}
