//! Round result types for resolution.

extern crate alloc;

use alloc::string::String;
use alloc::vec::Vec;

use crate::player::PlayerStatus;

/// How a single player finished the round.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlayerOutcome {
    /// Sole holder of the highest score.
    Win,
    /// Shares the highest score with at least one other player.
    Push,
    /// Held with a lower score than the winner.
    Lose,
    /// Went over 21.
    Bust,
}

/// Final standing of one player.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Standing {
    /// The player ID.
    pub player_id: u8,
    /// The player's name.
    pub name: String,
    /// Final score.
    pub score: u16,
    /// Final status (held or bust).
    pub status: PlayerStatus,
    /// How the player finished.
    pub outcome: PlayerOutcome,
}

/// Who took the round.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    /// A single player had the highest score.
    Winner(u8),
    /// Several players tied on the highest score.
    Push(Vec<u8>),
    /// Every player went bust.
    NoWinner,
}

/// Result of the entire round after resolution.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RoundResult {
    /// Round number, starting at 1.
    pub round: u32,
    /// Standings in turn order.
    pub standings: Vec<Standing>,
    /// Who took the round.
    pub outcome: Outcome,
    /// The highest non-bust score, if anyone stayed in.
    pub best_score: Option<u16>,
}

impl RoundResult {
    /// Returns the winner's player ID when a single player won.
    #[must_use]
    pub const fn winner(&self) -> Option<u8> {
        match self.outcome {
            Outcome::Winner(id) => Some(id),
            _ => None,
        }
    }

    /// Returns the standing for `player_id`.
    #[must_use]
    pub fn standing(&self, player_id: u8) -> Option<&Standing> {
        self.standings.iter().find(|s| s.player_id == player_id)
    }
}
