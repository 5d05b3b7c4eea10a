//! Player decisions and the sources that supply them.

use crate::player::Player;

/// A choice made by the player whose turn it is.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Decision {
    /// Stop drawing for the rest of the round.
    Hold,
    /// Take one more card.
    Draw,
}

/// Supplies a decision for the current player.
///
/// Any `FnMut(&Player) -> Decision` closure is a decider:
///
/// ```
/// use twentyone::{Decision, Game, GameOptions};
///
/// let mut game = Game::new(["Ada", "Brook"], GameOptions::default(), 7).unwrap();
/// let result = game
///     .start(&mut |player: &twentyone::Player| {
///         if player.score() < 17 { Decision::Draw } else { Decision::Hold }
///     })
///     .unwrap();
/// assert_eq!(result.standings.len(), 2);
/// ```
pub trait Decider {
    /// Returns the decision `player` makes on their turn.
    fn decide(&mut self, player: &Player) -> Decision;
}

impl<F> Decider for F
where
    F: FnMut(&Player) -> Decision,
{
    fn decide(&mut self, player: &Player) -> Decision {
        self(player)
    }
}

/// Replays a fixed sequence of decisions in turn order.
///
/// Once the sequence runs out every remaining player holds.
#[derive(Debug, Clone)]
pub struct Scripted<I> {
    decisions: I,
}

impl<I: Iterator<Item = Decision>> Scripted<I> {
    /// Creates a decider that yields `decisions` one per turn.
    pub fn new<T>(decisions: T) -> Self
    where
        T: IntoIterator<IntoIter = I>,
    {
        Self {
            decisions: decisions.into_iter(),
        }
    }
}

impl<I: Iterator<Item = Decision>> Decider for Scripted<I> {
    fn decide(&mut self, _player: &Player) -> Decision {
        self.decisions.next().unwrap_or(Decision::Hold)
    }
}

/// Draws until the score reaches a threshold, then holds.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HoldAt(pub u16);

impl Decider for HoldAt {
    fn decide(&mut self, player: &Player) -> Decision {
        if player.score() >= self.0 {
            Decision::Hold
        } else {
            Decision::Draw
        }
    }
}
