//! Error types for the game engine.

use crate::position::Position;
use crate::types::Player;
use derive_more::{Display, Error};

/// Why a move was rejected.
///
/// [`GameEngine::apply_move`](crate::GameEngine::apply_move) swallows these;
/// [`GameEngine::try_apply_move`](crate::GameEngine::try_apply_move) reports them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, Error)]
pub enum MoveError {
    /// The index does not name a square on the board.
    #[display("Position {} out of bounds (must be 0-8)", _0)]
    OutOfBounds(#[error(not(source))] usize),

    /// The square at the position is already occupied.
    #[display("Square {} is already occupied", _0)]
    SquareOccupied(#[error(not(source))] Position),

    /// The shown board already has a winner.
    #[display("Game is already over: {} won", _0)]
    GameOver(#[error(not(source))] Player),
}

/// A jump target outside the recorded history.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, Error)]
#[display("Move {} does not exist (history has {} entries)", requested, len)]
pub struct JumpError {
    /// The requested history index.
    pub requested: usize,
    /// Number of entries in the history at the time of the request.
    pub len: usize,
}
