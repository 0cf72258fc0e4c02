//! No play after a win: a decided board is never built upon.

use super::Invariant;
use crate::engine::GameEngine;

/// Invariant: only the last history entry may have a winner.
pub struct NoPlayAfterWin;

impl Invariant<GameEngine> for NoPlayAfterWin {
    fn holds(engine: &GameEngine) -> bool {
        let history = engine.history();
        history
            .iter()
            .take(history.len().saturating_sub(1))
            .all(|board| board.winner().is_none())
    }

    fn description() -> &'static str {
        "No move is recorded after a board with a winner"
    }
}
