//! Game rules for tic-tac-toe.
//!
//! Pure functions evaluating a board. Rules are kept apart from board
//! storage so the engine and the invariants can share them.

pub mod win;

pub use win::{LINES, check_winner, winning_line};
