//! Round engine and state management.

extern crate alloc;

use alloc::string::String;
use alloc::vec::Vec;

use rand::SeedableRng;
use rand::seq::SliceRandom;
use rand_chacha::ChaCha8Rng;

use crate::card::Card;
use crate::deck::Deck;
use crate::error::{DealError, RoundError, SetupError};
use crate::options::GameOptions;
use crate::player::Player;
use crate::result::RoundResult;

mod actions;
mod deal;
pub mod decision;
mod resolve;
pub mod state;

pub use decision::{Decider, Decision, HoldAt, Scripted};
pub use state::GameState;

/// A turn-based round engine that owns the players and the deck.
///
/// Turn order is fixed when the game is created. Each round gets a fresh,
/// shuffled deck which is dropped again on resolution; players keep their
/// seats across rounds.
#[derive(Debug, Clone)]
pub struct Game {
    /// Game options.
    options: GameOptions,
    /// Players in turn order.
    players: Vec<Player>,
    /// Deck for the current round.
    deck: Option<Deck>,
    /// Current game state.
    state: GameState,
    /// Seat index of the player whose turn it is.
    turn: usize,
    /// Rounds started so far.
    round: u32,
    /// Random number generator.
    rng: ChaCha8Rng,
}

impl Game {
    /// Creates a game for the named players with the given seed.
    ///
    /// Player IDs are assigned in the order the names are given. Unless
    /// [`GameOptions::shuffle_seats`] is disabled, the seats are then shuffled
    /// once into the turn order used for every round.
    ///
    /// # Example
    ///
    /// ```
    /// use twentyone::{Game, GameOptions, GameState};
    ///
    /// let game = Game::new(["Ada", "Brook"], GameOptions::default(), 42).unwrap();
    /// assert_eq!(game.players().len(), 2);
    /// assert_eq!(game.state(), GameState::Waiting);
    /// ```
    ///
    /// # Errors
    ///
    /// Returns [`SetupError::InvalidPlayerCount`] when no names are given, or
    /// when one deck cannot deal the opening cards to every player.
    pub fn new<I>(names: I, options: GameOptions, seed: u64) -> Result<Self, SetupError>
    where
        I: IntoIterator,
        I::Item: Into<String>,
    {
        let names: Vec<String> = names.into_iter().map(Into::into).collect();
        let max = options.max_players();
        if names.is_empty() || names.len() > max {
            return Err(SetupError::InvalidPlayerCount {
                count: names.len(),
                max,
            });
        }

        let mut players: Vec<Player> = names
            .into_iter()
            .enumerate()
            .map(|(id, name)| Player::new(id as u8, name, options.scoring))
            .collect();

        let mut rng = ChaCha8Rng::seed_from_u64(seed);
        if options.shuffle_seats {
            players.shuffle(&mut rng);
        }

        log::debug!(
            "seated {} players: {:?}",
            players.len(),
            players.iter().map(Player::name).collect::<Vec<_>>()
        );

        Ok(Self {
            options,
            players,
            deck: None,
            state: GameState::Waiting,
            turn: 0,
            round: 0,
            rng,
        })
    }

    /// Plays a whole round: shuffle, deal, take turns and resolve.
    ///
    /// # Errors
    ///
    /// Returns an error if a round is already in progress, the deal fails, or
    /// the deck runs out while a player is drawing. A round that fails after
    /// it was started is abandoned, so the next call can start a new one.
    pub fn start<D: Decider + ?Sized>(
        &mut self,
        decider: &mut D,
    ) -> Result<RoundResult, RoundError> {
        self.start_round()?;

        if let Err(err) = self.deal() {
            self.abandon_round();
            return Err(err.into());
        }
        if let Err(err) = self.play_round(decider) {
            self.abandon_round();
            return Err(err.into());
        }

        Ok(self.resolve()?)
    }

    /// Drops a round that is being dealt or played and returns to `Waiting`.
    ///
    /// Hands are kept until the next round starts. Returns `false` if no round
    /// was in progress.
    pub fn abandon_round(&mut self) -> bool {
        if !matches!(self.state, GameState::Dealing | GameState::Playing) {
            return false;
        }

        log::info!(
            "round {} abandoned in state {:?} with {} cards left",
            self.round,
            self.state,
            self.cards_remaining()
        );

        self.deck = None;
        self.turn = 0;
        self.state = GameState::Waiting;
        true
    }

    /// Replaces the deck for the round about to be dealt.
    ///
    /// # Errors
    ///
    /// Returns an error unless the game is in the `Dealing` state.
    pub fn set_deck(&mut self, deck: Deck) -> Result<(), DealError> {
        if self.state != GameState::Dealing {
            return Err(DealError::InvalidState);
        }
        self.deck = Some(deck);
        Ok(())
    }

    /// Stacks the deck for the round about to be dealt so that `draws` come
    /// out in order.
    ///
    /// # Errors
    ///
    /// Returns [`DealError::InvalidDeck`] if `draws` repeats a card or holds
    /// more than 52 cards, or [`DealError::InvalidState`] unless the game is
    /// in the `Dealing` state.
    pub fn set_deck_from_draws(&mut self, draws: &[Card]) -> Result<(), DealError> {
        let deck = Deck::from_draw_order(draws)?;
        self.set_deck(deck)
    }

    /// Returns the index of the seat held by `player_id`.
    fn seat_of(&self, player_id: u8) -> Option<usize> {
        self.players.iter().position(|p| p.id() == player_id)
    }

    /// Returns the first active seat at or after `start`, wrapping around.
    fn active_seat_from(&self, start: usize) -> Option<usize> {
        let seats = self.players.len();
        (0..seats)
            .map(|step| (start + step) % seats)
            .find(|&seat| self.players[seat].is_active())
    }

    /// Returns the current game state.
    #[must_use]
    pub const fn state(&self) -> GameState {
        self.state
    }

    /// Returns the game options.
    #[must_use]
    pub const fn options(&self) -> &GameOptions {
        &self.options
    }

    /// Returns the players in turn order.
    #[must_use]
    pub fn players(&self) -> &[Player] {
        &self.players
    }

    /// Returns the player with the given ID.
    #[must_use]
    pub fn player(&self, player_id: u8) -> Option<&Player> {
        self.players.iter().find(|p| p.id() == player_id)
    }

    /// Returns the seat index whose turn it is.
    ///
    /// Returns `None` unless players are taking turns.
    #[must_use]
    pub const fn turn(&self) -> Option<usize> {
        match self.state {
            GameState::Playing => Some(self.turn),
            _ => None,
        }
    }

    /// Returns the player whose turn it is.
    #[must_use]
    pub fn current_player(&self) -> Option<&Player> {
        self.turn().and_then(|seat| self.players.get(seat))
    }

    /// Returns the deck for the current round, if one is in play.
    #[must_use]
    pub const fn deck(&self) -> Option<&Deck> {
        self.deck.as_ref()
    }

    /// Returns the number of cards remaining in the deck.
    #[must_use]
    pub fn cards_remaining(&self) -> usize {
        self.deck.as_ref().map_or(0, Deck::len)
    }

    /// Returns the number of rounds started so far.
    #[must_use]
    pub const fn rounds_played(&self) -> u32 {
        self.round
    }
}
