//! Rewind - tic-tac-toe with a rewindable move history.
//!
//! The crate holds the authoritative game state for a single session:
//! every board the game has passed through, and a pointer to the one
//! currently shown. Presentation layers read derived state from
//! [`GameEngine`] and call its two mutators.
//!
//! # Example
//!
//! ```
//! use rewind::{GameEngine, Player};
//!
//! let mut engine = GameEngine::new();
//! for cell in [0, 3, 1, 4, 2] {
//!     engine.apply_move(cell);
//! }
//! assert_eq!(engine.winner(), Some(Player::X));
//! assert_eq!(engine.status_text(), "Winner: X");
//!
//! engine.jump_to(0).unwrap();
//! assert_eq!(engine.status_text(), "Next player: X");
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod action;
mod engine;
mod error;
mod history;
pub mod invariants;
mod position;
pub mod rules;
mod types;

pub use action::Move;
pub use engine::{GameEngine, Status};
pub use error::{JumpError, MoveError};
pub use history::{MoveLabel, MoveListEntry};
pub use position::Position;
pub use types::{Board, Player, Square};
