extern crate alloc;

use alloc::string::ToString;
use alloc::vec::Vec;

use crate::error::ResolveError;
use crate::player::{Player, PlayerStatus};
use crate::result::{Outcome, PlayerOutcome, RoundResult, Standing};

use super::{Game, GameState};

impl Game {
    /// Resolves the round and reports each player's standing.
    ///
    /// The highest score among players who did not go bust wins. Players
    /// sharing that score push; if everyone went bust nobody wins. The
    /// round's deck is discarded.
    ///
    /// # Errors
    ///
    /// Returns an error if the game is not in the `Resolved` state.
    pub fn resolve(&mut self) -> Result<RoundResult, ResolveError> {
        if self.state != GameState::Resolved {
            return Err(ResolveError::InvalidState);
        }

        self.deck = None;

        let best_score = self
            .players
            .iter()
            .filter(|p| p.status() != PlayerStatus::Bust)
            .map(Player::score)
            .max();

        let leaders: Vec<u8> = self
            .players
            .iter()
            .filter(|p| p.status() != PlayerStatus::Bust && Some(p.score()) == best_score)
            .map(Player::id)
            .collect();

        let standings = self
            .players
            .iter()
            .map(|player| {
                let outcome = if player.status() == PlayerStatus::Bust {
                    PlayerOutcome::Bust
                } else if !leaders.contains(&player.id()) {
                    PlayerOutcome::Lose
                } else if leaders.len() == 1 {
                    PlayerOutcome::Win
                } else {
                    PlayerOutcome::Push
                };

                Standing {
                    player_id: player.id(),
                    name: player.name().to_string(),
                    score: player.score(),
                    status: player.status(),
                    outcome,
                }
            })
            .collect();

        let outcome = match leaders.as_slice() {
            [] => Outcome::NoWinner,
            [winner] => Outcome::Winner(*winner),
            _ => Outcome::Push(leaders.clone()),
        };

        match &outcome {
            Outcome::Winner(id) => log::info!(
                "round {} won by player {} with {}",
                self.round,
                id,
                best_score.unwrap_or_default()
            ),
            Outcome::Push(ids) => log::info!(
                "round {} pushed between players {:?} on {}",
                self.round,
                ids,
                best_score.unwrap_or_default()
            ),
            Outcome::NoWinner => log::info!("round {} ended with every player bust", self.round),
        }

        Ok(RoundResult {
            round: self.round,
            standings,
            outcome,
            best_score,
        })
    }
}
