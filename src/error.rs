//! Error types for game operations.

use thiserror::Error;

/// Drawing from a deck with no cards left.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("no cards left in the deck")]
pub struct EmptyDeckError;

/// Errors that can occur when setting up a game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum SetupError {
    /// Zero players, or more players than one deck can deal to.
    #[error("invalid player count {count} (expected 1..={max})")]
    InvalidPlayerCount {
        /// Number of players supplied.
        count: usize,
        /// Largest supported number of players.
        max: usize,
    },
}

/// Errors that can occur when starting a round or dealing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum DealError {
    /// Invalid game state for this operation.
    #[error("invalid game state for dealing")]
    InvalidState,
    /// Not enough cards in the deck for the opening deal.
    #[error("not enough cards in the deck")]
    NotEnoughCards,
    /// A stacked deck repeats a card or holds more than 52 cards.
    #[error("deck has duplicate cards or more than 52 cards")]
    InvalidDeck,
}

/// Errors that can occur when applying a player decision.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ActionError {
    /// No round is being played.
    #[error("invalid game state for this action")]
    InvalidState,
    /// Player not found.
    #[error("player not found")]
    PlayerNotFound,
    /// The player has already held or gone bust.
    #[error("player is not active")]
    PlayerNotActive,
    /// Not this player's turn.
    #[error("not this player's turn")]
    NotYourTurn,
    /// No cards left in the deck.
    #[error("no cards left in the deck")]
    NoCards,
}

impl From<EmptyDeckError> for ActionError {
    fn from(_: EmptyDeckError) -> Self {
        Self::NoCards
    }
}

/// Errors that can occur during resolution.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ResolveError {
    /// Players are still taking turns, or no round was played.
    #[error("invalid game state for resolution")]
    InvalidState,
}

/// Errors from playing a whole round with [`Game::start`](crate::Game::start).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum RoundError {
    /// Starting the round or dealing failed.
    #[error(transparent)]
    Deal(#[from] DealError),
    /// A player decision could not be applied.
    #[error(transparent)]
    Action(#[from] ActionError),
    /// Resolution failed.
    #[error(transparent)]
    Resolve(#[from] ResolveError),
}
