//! A turn-based twenty-one card round engine with optional `no_std` support.
//!
//! The crate provides a [`Game`] type that owns a table of players and drives
//! each round: a fresh shuffled [`Deck`], the opening deal, hold/draw turns
//! with automatic busts, and resolution of the winner.
//!
//! # Example
//!
//! ```
//! use twentyone::{Game, GameOptions, HoldAt};
//!
//! let mut game = Game::new(["Ada", "Brook", "Cyd"], GameOptions::default(), 42).unwrap();
//! let result = game.start(&mut HoldAt(17)).unwrap();
//! assert_eq!(result.standings.len(), 3);
//! ```
#![cfg_attr(not(feature = "std"), no_std)]
#![cfg_attr(docsrs, feature(doc_cfg))]

#[cfg(all(not(feature = "std"), not(feature = "alloc")))]
compile_error!(
    "`std` is disabled but `alloc` feature is not enabled. Enable `alloc` or keep `std` enabled."
);

extern crate alloc;

pub mod card;
pub mod deck;
pub mod error;
pub mod game;
pub mod options;
pub mod player;
pub mod result;

// Re-export main types
pub use card::{Card, DECK_SIZE, Rank, Suit};
pub use deck::Deck;
pub use error::{ActionError, DealError, EmptyDeckError, ResolveError, RoundError, SetupError};
pub use game::{Decider, Decision, Game, GameState, HoldAt, Scripted};
pub use options::{GameOptions, ScoringRule};
pub use player::{BUST_LIMIT, Player, PlayerStatus, score_cards};
pub use result::{Outcome, PlayerOutcome, RoundResult, Standing};
