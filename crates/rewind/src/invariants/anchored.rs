//! History anchoring: the history starts at the empty board and the
//! current move points inside it.

use super::Invariant;
use crate::engine::GameEngine;
use crate::types::Board;

/// Invariant: the history is non-empty, begins with the empty board, and
/// the current move indexes an existing entry.
pub struct HistoryAnchored;

impl Invariant<GameEngine> for HistoryAnchored {
    fn holds(engine: &GameEngine) -> bool {
        let history = engine.history();
        history.first() == Some(&Board::new()) && engine.current_move() < history.len()
    }

    fn description() -> &'static str {
        "History starts at the empty board and the current move is in range"
    }
}
