//! Entries of the move list shown next to the board.

use derive_more::Display;

/// Caption of a move-list entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display)]
pub enum MoveLabel {
    /// The empty board at history index 0.
    #[display("Go to game start")]
    GameStart,
    /// The board after the given number of moves.
    #[display("Go to move #{}", _0)]
    Move(usize),
}

impl MoveLabel {
    /// Returns the label for a history index.
    pub fn for_index(index: usize) -> Self {
        if index == 0 {
            MoveLabel::GameStart
        } else {
            MoveLabel::Move(index)
        }
    }
}

/// One selectable entry of the move list.
///
/// Pairs the history index with its label so a caller can hand the index
/// straight back to [`GameEngine::jump_to`](crate::GameEngine::jump_to).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MoveListEntry {
    index: usize,
    label: MoveLabel,
    current: bool,
}

impl MoveListEntry {
    pub(crate) fn new(index: usize, current: bool) -> Self {
        Self {
            index,
            label: MoveLabel::for_index(index),
            current,
        }
    }

    /// History index this entry jumps to.
    pub fn index(&self) -> usize {
        self.index
    }

    /// Caption of this entry.
    pub fn label(&self) -> MoveLabel {
        self.label
    }

    /// Whether this entry is the board currently shown.
    pub fn is_current(&self) -> bool {
        self.current
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_label_text() {
        assert_eq!(MoveLabel::for_index(0).to_string(), "Go to game start");
        assert_eq!(MoveLabel::for_index(1).to_string(), "Go to move #1");
        assert_eq!(MoveLabel::for_index(7).to_string(), "Go to move #7");
    }
}
