//! Game engine holding the board history and the current move pointer.

use crate::action::Move;
use crate::error::{JumpError, MoveError};
use crate::history::MoveListEntry;
use crate::invariants;
use crate::position::Position;
use crate::types::{Board, Player};
use derive_more::Display;
use tracing::{debug, instrument, warn};

/// What the status line announces for the shown board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display)]
pub enum Status {
    /// The board has a completed line.
    #[display("Winner: {}", _0)]
    Winner(Player),
    /// Nobody has won yet; the given player moves next.
    #[display("Next player: {}", _0)]
    NextPlayer(Player),
}

/// Tic-tac-toe engine with a rewindable history.
///
/// `history[0]` is always the empty board and every later entry is the
/// board after one more move. `current_move` points at the board being
/// shown. Jumping back only moves the pointer; playing from a past board
/// discards the entries after it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameEngine {
    history: Vec<Board>,
    current_move: usize,
}

impl GameEngine {
    /// Creates a new game with only the empty board in its history.
    #[instrument]
    pub fn new() -> Self {
        Self {
            history: vec![Board::new()],
            current_move: 0,
        }
    }

    /// Creates a game by applying `cells` in order with [`apply_move`](Self::apply_move).
    ///
    /// Rejected cells are skipped, exactly as repeated clicks would be.
    #[instrument(skip(cells))]
    pub fn replay(cells: impl IntoIterator<Item = usize>) -> Self {
        let mut engine = Self::new();
        for cell in cells {
            engine.apply_move(cell);
        }
        engine
    }

    /// Places the current player's mark at `cell_index`.
    ///
    /// Occupied squares, indices past the board, and boards that already
    /// have a winner are ignored without any change of state.
    #[instrument(skip(self), fields(current_move = self.current_move))]
    pub fn apply_move(&mut self, cell_index: usize) {
        if let Err(e) = self.try_apply_move(cell_index) {
            debug!(error = %e, "Move ignored");
        }
    }

    /// Places the current player's mark at `cell_index`, reporting rejections.
    ///
    /// On success the history after the current move is discarded, the new
    /// board is appended, and the current move points at it.
    ///
    /// # Errors
    ///
    /// - [`MoveError::GameOver`] if the shown board already has a winner.
    /// - [`MoveError::OutOfBounds`] if `cell_index` is not in `0..9`.
    /// - [`MoveError::SquareOccupied`] if the square is taken.
    #[instrument(skip(self), fields(current_move = self.current_move))]
    pub fn try_apply_move(&mut self, cell_index: usize) -> Result<Move, MoveError> {
        let board = self.current_board();

        if let Some(winner) = board.winner() {
            return Err(MoveError::GameOver(winner));
        }

        let position = Position::from_index(cell_index).ok_or(MoveError::OutOfBounds(cell_index))?;
        if !board.is_empty(position) {
            return Err(MoveError::SquareOccupied(position));
        }

        let player = self.turn();
        let next = board.with_mark(position, player);

        let discarded = self.history.len() - (self.current_move + 1);
        if discarded > 0 {
            debug!(discarded, "Branching off an earlier move");
        }
        self.history.truncate(self.current_move + 1);
        self.history.push(next);
        self.current_move = self.history.len() - 1;

        self.assert_invariants();
        debug!(%player, %position, current_move = self.current_move, "Move applied");
        Ok(Move::new(player, position))
    }

    /// Shows the board after `move_index` moves.
    ///
    /// The history itself is left untouched.
    ///
    /// # Errors
    ///
    /// Returns [`JumpError`] if `move_index` is not an existing history entry;
    /// the current move is unchanged in that case.
    #[instrument(skip(self), fields(current_move = self.current_move))]
    pub fn jump_to(&mut self, move_index: usize) -> Result<(), JumpError> {
        if move_index >= self.history.len() {
            warn!(move_index, len = self.history.len(), "Jump outside history");
            return Err(JumpError {
                requested: move_index,
                len: self.history.len(),
            });
        }

        self.current_move = move_index;
        debug!(current_move = move_index, "Jumped");
        Ok(())
    }

    /// Returns the board currently shown.
    pub fn current_board(&self) -> &Board {
        &self.history[self.current_move]
    }

    /// Returns the player to move on the shown board.
    pub fn turn(&self) -> Player {
        Player::for_move(self.current_move)
    }

    /// Returns the winner of the shown board, if any.
    pub fn winner(&self) -> Option<Player> {
        self.current_board().winner()
    }

    /// Returns the status of the shown board.
    pub fn status(&self) -> Status {
        match self.winner() {
            Some(winner) => Status::Winner(winner),
            None => Status::NextPlayer(self.turn()),
        }
    }

    /// Returns the status line text, e.g. `Winner: X` or `Next player: O`.
    pub fn status_text(&self) -> String {
        self.status().to_string()
    }

    /// Returns one entry per history board, in chronological order.
    pub fn move_list(&self) -> Vec<MoveListEntry> {
        (0..self.history.len())
            .map(|index| MoveListEntry::new(index, index == self.current_move))
            .collect()
    }

    /// Returns every recorded board, starting with the empty one.
    pub fn history(&self) -> &[Board] {
        &self.history
    }

    /// Returns the index of the board currently shown.
    pub fn current_move(&self) -> usize {
        self.current_move
    }

    /// Number of boards in the history (always at least one).
    pub fn len(&self) -> usize {
        self.history.len()
    }

    /// Whether the history has no boards; never true for a constructed engine.
    pub fn is_empty(&self) -> bool {
        self.history.is_empty()
    }

    /// Whether the shown board is the latest one recorded.
    pub fn is_at_latest(&self) -> bool {
        self.current_move + 1 == self.history.len()
    }

    /// Returns the moves that produced each history board after the first.
    pub fn moves(&self) -> Vec<Move> {
        self.history
            .windows(2)
            .filter_map(|pair| Move::between(&pair[0], &pair[1]))
            .collect()
    }

    fn assert_invariants(&self) {
        if cfg!(debug_assertions)
            && let Err(violations) = invariants::check_engine(self)
        {
            let descriptions = violations
                .iter()
                .map(|v| v.description.as_str())
                .collect::<Vec<_>>()
                .join("; ");
            panic!("Engine invariant violated: {}", descriptions);
        }
    }

    #[cfg(test)]
    pub(crate) fn from_parts(history: Vec<Board>, current_move: usize) -> Self {
        Self {
            history,
            current_move,
        }
    }
}

impl Default for GameEngine {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Square;

    #[test]
    fn test_new_engine() {
        let engine = GameEngine::new();
        assert_eq!(engine.len(), 1);
        assert!(!engine.is_empty());
        assert_eq!(engine.current_move(), 0);
        assert_eq!(engine.current_board(), &Board::new());
        assert_eq!(engine.turn(), Player::X);
        assert_eq!(engine.winner(), None);
        assert_eq!(engine.status_text(), "Next player: X");
    }

    #[test]
    fn test_try_apply_move_reports_rejections() {
        let mut engine = GameEngine::new();
        assert_eq!(
            engine.try_apply_move(4),
            Ok(Move::new(Player::X, Position::Center))
        );
        assert_eq!(
            engine.try_apply_move(4),
            Err(MoveError::SquareOccupied(Position::Center))
        );
        assert_eq!(engine.try_apply_move(9), Err(MoveError::OutOfBounds(9)));
        assert_eq!(engine.len(), 2);
    }

    #[test]
    fn test_game_over_reported_before_bounds() {
        let mut engine = GameEngine::replay([0, 3, 1, 4, 2]);
        assert_eq!(engine.try_apply_move(42), Err(MoveError::GameOver(Player::X)));
    }

    #[test]
    fn test_jump_out_of_range_keeps_state() {
        let mut engine = GameEngine::replay([0, 1]);
        let before = engine.clone();
        assert_eq!(engine.jump_to(3), Err(JumpError { requested: 3, len: 3 }));
        assert_eq!(engine, before);
    }

    #[test]
    fn test_branching_discards_future() {
        let mut engine = GameEngine::replay([0, 1, 2]);
        engine.jump_to(1).unwrap();
        assert!(!engine.is_at_latest());

        engine.apply_move(8);
        assert_eq!(engine.len(), 3);
        assert!(engine.is_at_latest());
        assert_eq!(engine.current_board().get(Position::BottomRight), Square::Occupied(Player::O));
        assert_eq!(engine.current_board().get(Position::TopCenter), Square::Empty);
    }

    #[test]
    fn test_move_list_marks_current() {
        let mut engine = GameEngine::replay([0, 1, 2]);
        engine.jump_to(2).unwrap();
        let list = engine.move_list();
        assert_eq!(list.len(), 4);
        let current: Vec<_> = list.iter().filter(|e| e.is_current()).map(|e| e.index()).collect();
        assert_eq!(current, vec![2]);
    }

    #[test]
    fn test_moves_recovered_from_history() {
        let engine = GameEngine::replay([4, 0, 8]);
        assert_eq!(
            engine.moves(),
            vec![
                Move::new(Player::X, Position::Center),
                Move::new(Player::O, Position::TopLeft),
                Move::new(Player::X, Position::BottomRight),
            ]
        );
    }

    #[test]
    #[cfg(debug_assertions)]
    #[should_panic(expected = "Engine invariant violated")]
    fn test_corrupt_history_is_caught_in_debug() {
        let skipped = Board::new()
            .with_mark(Position::TopLeft, Player::X)
            .with_mark(Position::Center, Player::O);
        let mut engine = GameEngine::from_parts(vec![Board::new(), skipped], 1);
        engine.apply_move(8);
    }
}
