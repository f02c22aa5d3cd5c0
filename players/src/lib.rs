//! Traits for an arbitrary player

use board::{Board, Color, Move};

/// A player in a game
///
/// This trait is generic over how the player decides what to do, so different opponents can be
/// swapped in behind the same game loop.
pub trait Player {
    /// Decide on a move for `color` in the given position
    ///
    /// This only proposes a move; the caller applies it and owns whose turn it is. Returns `None`
    /// if `color` has nothing it can move.
    fn choose_move<B: Board>(&mut self, board: &B, color: Color) -> Option<Move>;

    /// A short name for the player, used in logs
    fn name(&self) -> &str;
}

