//! Single-step history: each board adds exactly one mark to the previous
//! one, and the marks alternate starting with X.

use super::Invariant;
use crate::action::Move;
use crate::engine::GameEngine;
use crate::types::Player;
use tracing::warn;

/// Invariant: consecutive history boards differ by one newly placed mark,
/// placed by X at odd indices and by O at even ones.
pub struct SingleStepHistory;

impl Invariant<GameEngine> for SingleStepHistory {
    fn holds(engine: &GameEngine) -> bool {
        engine
            .history()
            .windows(2)
            .enumerate()
            .all(|(before, pair)| match Move::between(&pair[0], &pair[1]) {
                Some(mov) if mov.player == Player::for_move(before) => true,
                found => {
                    warn!(entry = before + 1, ?found, "History step is not a single legal move");
                    false
                }
            })
    }

    fn description() -> &'static str {
        "Each history entry adds one mark, alternating X, O, X, ..."
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Board, Position};

    #[test]
    fn test_holds_after_branching() {
        let mut engine = GameEngine::replay([0, 1, 2, 3]);
        engine.jump_to(1).unwrap();
        engine.apply_move(8);
        assert!(SingleStepHistory::holds(&engine));
    }

    #[test]
    fn test_wrong_mark_violates() {
        let first = Board::new().with_mark(Position::Center, Player::O);
        let engine = GameEngine::from_parts(vec![Board::new(), first], 1);
        assert!(!SingleStepHistory::holds(&engine));
    }

    #[test]
    fn test_repeated_board_violates() {
        let first = Board::new().with_mark(Position::Center, Player::X);
        let engine = GameEngine::from_parts(vec![Board::new(), first.clone(), first], 2);
        assert!(!SingleStepHistory::holds(&engine));
    }
}
