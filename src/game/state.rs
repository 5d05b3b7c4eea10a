//! Game state types.

/// Round-level game state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GameState {
    /// No round is in progress; none was started yet or the last was abandoned.
    Waiting,
    /// A fresh deck is shuffled and the opening cards can be dealt.
    Dealing,
    /// Players are taking turns.
    Playing,
    /// Every player has held or gone bust; the round can be resolved.
    Resolved,
}
