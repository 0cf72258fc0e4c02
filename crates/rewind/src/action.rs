//! Moves as first-class values.
//!
//! The engine stores boards, not moves. A [`Move`] is recovered from two
//! consecutive history boards and is what the move list and the
//! invariants reason about.

use crate::position::Position;
use crate::types::{Board, Player, Square};
use serde::{Deserialize, Serialize};
use tracing::instrument;

/// A move in tic-tac-toe: a player placing their mark at a position.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Move {
    /// The player making the move.
    pub player: Player,
    /// The position where the player places their mark.
    pub position: Position,
}

impl Move {
    /// Creates a new move.
    pub fn new(player: Player, position: Position) -> Self {
        Self { player, position }
    }

    /// Recovers the move that turns `before` into `after`.
    ///
    /// Returns `None` unless exactly one square changed, and it changed
    /// from empty to occupied.
    #[instrument(level = "trace", skip(before, after))]
    pub fn between(before: &Board, after: &Board) -> Option<Self> {
        let mut changed = Position::ALL
            .into_iter()
            .filter(|&pos| before.get(pos) != after.get(pos));

        let position = changed.next()?;
        if changed.next().is_some() {
            return None;
        }

        match (before.get(position), after.get(position)) {
            (Square::Empty, Square::Occupied(player)) => Some(Self::new(player, position)),
            _ => None,
        }
    }
}

impl std::fmt::Display for Move {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} -> {}", self.player, self.position.label())
    }
}
