//! Non-interactive replay: apply moves and print the resulting game.

use anyhow::Result;
use rewind::{GameEngine, Position};
use std::io::Write;
use tracing::{info, instrument};

/// Plays `cells` in order, optionally jumps, and writes the board, the
/// status line and the move list to `out`.
///
/// Rejected cells are reported and skipped.
#[instrument(skip(out))]
pub fn run(cells: &[Position], jump: Option<usize>, out: &mut impl Write) -> Result<()> {
    let mut engine = GameEngine::new();
    for &cell in cells {
        if let Err(e) = engine.try_apply_move(cell.to_index()) {
            writeln!(out, "Ignored {} ({}): {}", cell, cell.to_index(), e)?;
        }
    }

    if let Some(index) = jump {
        engine.jump_to(index)?;
    }

    info!(moves = engine.len() - 1, current_move = engine.current_move(), "Replay finished");
    write_game(&engine, out)
}

/// Writes the shown board, the status line and the move list.
pub fn write_game(engine: &GameEngine, out: &mut impl Write) -> Result<()> {
    writeln!(out, "{}", engine.current_board().display())?;
    writeln!(out)?;
    writeln!(out, "{}", engine.status_text())?;
    writeln!(out)?;

    let moves = engine.moves();
    for entry in engine.move_list() {
        let marker = if entry.is_current() { '>' } else { ' ' };
        match entry.index().checked_sub(1).and_then(|i| moves.get(i)) {
            Some(mov) => writeln!(out, "{} {:<16}{}", marker, entry.label().to_string(), mov)?,
            None => writeln!(out, "{} {}", marker, entry.label())?,
        }
    }
    Ok(())
}
