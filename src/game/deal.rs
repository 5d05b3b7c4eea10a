use crate::deck::Deck;
use crate::error::DealError;

use super::{Game, GameState};

impl Game {
    /// Starts a new round with a freshly shuffled deck.
    ///
    /// Every player's hand, score and status are reset. The game moves to the
    /// `Dealing` state.
    ///
    /// # Errors
    ///
    /// Returns an error if a round is already being dealt or played; use
    /// [`Game::abandon_round`] to drop it first.
    pub fn start_round(&mut self) -> Result<(), DealError> {
        if matches!(self.state, GameState::Dealing | GameState::Playing) {
            return Err(DealError::InvalidState);
        }

        for player in &mut self.players {
            player.reset();
        }

        let mut deck = Deck::new();
        deck.shuffle(&mut self.rng);
        self.deck = Some(deck);

        self.turn = 0;
        self.round += 1;
        self.state = GameState::Dealing;

        log::info!(
            "round {} started with {} players",
            self.round,
            self.players.len()
        );

        Ok(())
    }

    /// Deals the opening cards to every player in turn order.
    ///
    /// Cards go out one per player per pass until each player holds
    /// [`GameOptions::initial_cards`](crate::GameOptions::initial_cards) cards.
    /// The turn then passes to the first active seat; if every player went
    /// bust on the deal the round is resolved straight away.
    ///
    /// # Errors
    ///
    /// Returns an error if the game is not in the `Dealing` state, or the deck
    /// is too small to deal every player in; no card is dealt in that case.
    pub fn deal(&mut self) -> Result<(), DealError> {
        if self.state != GameState::Dealing {
            return Err(DealError::InvalidState);
        }
        let deck = self.deck.as_mut().ok_or(DealError::InvalidState)?;

        let cards_needed = self.players.len() * self.options.initial_cards as usize;
        if deck.len() < cards_needed {
            return Err(DealError::NotEnoughCards);
        }

        for _ in 0..self.options.initial_cards {
            for player in &mut self.players {
                let card = deck.draw().map_err(|_| DealError::NotEnoughCards)?;
                player.receive(card);
            }
        }

        for player in &self.players {
            log::debug!(
                "dealt {} [{}] -> score {}",
                player.name(),
                player.show_hand().replace('\n', ", "),
                player.score()
            );
            if player.is_bust() {
                log::debug!("{} is bust on the deal", player.name());
            }
        }

        self.state = GameState::Playing;
        match self.active_seat_from(0) {
            Some(seat) => self.turn = seat,
            None => self.state = GameState::Resolved,
        }

        Ok(())
    }
}
