use crate::card::Card;
use crate::error::ActionError;

use super::{Decider, Decision, Game, GameState};

impl Game {
    fn ensure_player_turn(&self, player_id: u8) -> Result<usize, ActionError> {
        if self.state != GameState::Playing {
            return Err(ActionError::InvalidState);
        }

        let seat = self.seat_of(player_id).ok_or(ActionError::PlayerNotFound)?;

        if !self.players[seat].is_active() {
            return Err(ActionError::PlayerNotActive);
        }

        if seat != self.turn {
            return Err(ActionError::NotYourTurn);
        }

        Ok(seat)
    }

    /// Passes the turn to the next active seat, or resolves the round when
    /// nobody is left.
    fn advance_turn(&mut self) {
        let seats = self.players.len();
        match self.active_seat_from((self.turn + 1) % seats) {
            Some(seat) => {
                log::trace!("turn {} -> {}", self.turn, seat);
                self.turn = seat;
            }
            None => {
                log::debug!("no active players left, round {} over", self.round);
                self.state = GameState::Resolved;
            }
        }
    }

    /// Player decision: Draw one card.
    ///
    /// A player whose score goes over 21 is bust immediately and takes no
    /// further turns this round.
    ///
    /// # Errors
    ///
    /// Returns an error if no round is being played, the player cannot be
    /// found, the player has held or gone bust, it is not the player's turn,
    /// or the deck is empty. The turn does not advance on error.
    pub fn draw(&mut self, player_id: u8) -> Result<Card, ActionError> {
        let seat = self.ensure_player_turn(player_id)?;

        let deck = self.deck.as_mut().ok_or(ActionError::InvalidState)?;
        let player = &mut self.players[seat];
        let card = player.draw(deck)?;

        log::debug!(
            "{} draws {} -> score {}",
            player.name(),
            card,
            player.score()
        );
        if !player.is_active() {
            log::debug!("{} is bust with {}", player.name(), player.score());
        }

        self.advance_turn();

        Ok(card)
    }

    /// Player decision: Hold for the rest of the round.
    ///
    /// # Errors
    ///
    /// Returns an error if no round is being played, the player cannot be
    /// found, the player has already held or gone bust, or it is not the
    /// player's turn.
    pub fn hold(&mut self, player_id: u8) -> Result<(), ActionError> {
        let seat = self.ensure_player_turn(player_id)?;

        let player = &mut self.players[seat];
        player.hold();
        log::debug!("{} holds on {}", player.name(), player.score());

        self.advance_turn();

        Ok(())
    }

    /// Applies `decision` for `player_id`.
    ///
    /// Returns the card drawn, if any.
    ///
    /// # Errors
    ///
    /// See [`Game::draw`] and [`Game::hold`].
    pub fn act(
        &mut self,
        player_id: u8,
        decision: Decision,
    ) -> Result<Option<Card>, ActionError> {
        match decision {
            Decision::Draw => self.draw(player_id).map(Some),
            Decision::Hold => self.hold(player_id).map(|()| None),
        }
    }

    /// Plays out the round, asking `decider` for each current player's choice.
    ///
    /// Returns once every player has held or gone bust. A round already
    /// resolved on the deal returns immediately.
    ///
    /// # Errors
    ///
    /// Returns an error if the cards have not been dealt, or the deck runs out
    /// while a player is drawing.
    pub fn play_round<D: Decider + ?Sized>(
        &mut self,
        decider: &mut D,
    ) -> Result<(), ActionError> {
        match self.state {
            GameState::Playing => {}
            GameState::Resolved => return Ok(()),
            GameState::Waiting | GameState::Dealing => return Err(ActionError::InvalidState),
        }

        while self.state == GameState::Playing {
            let player = &self.players[self.turn];
            let player_id = player.id();
            let decision = decider.decide(player);
            self.act(player_id, decision)?;
        }

        Ok(())
    }
}
