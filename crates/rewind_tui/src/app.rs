//! Application state and event handling.

use crate::config::{ConfigError, DisplayConfig};
use crate::input::{digit_cell, move_cursor};
use crossterm::event::{
    KeyCode, KeyEvent, KeyEventKind, MouseButton, MouseEvent, MouseEventKind,
};
use ratatui::layout::{self, Rect};
use ratatui::style::Color;
use rewind::{GameEngine, Player, Position};
use tracing::{debug, info, instrument, warn};

/// Which pane receives navigation keys.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Focus {
    /// Arrow keys move the board cursor.
    #[default]
    Board,
    /// Arrow keys move through the move list.
    Moves,
}

impl Focus {
    fn toggle(self) -> Self {
        match self {
            Focus::Board => Focus::Moves,
            Focus::Moves => Focus::Board,
        }
    }
}

/// Colours and hints used when drawing the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Palette {
    /// Colour of X marks.
    pub x: Color,
    /// Colour of O marks.
    pub o: Color,
    /// Show 1-based numbers on empty squares.
    pub show_hints: bool,
}

impl Palette {
    /// Builds the palette from the display settings.
    pub fn from_config(display: &DisplayConfig) -> Result<Self, ConfigError> {
        Ok(Self {
            x: display.x()?,
            o: display.o()?,
            show_hints: display.show_hints(),
        })
    }

    /// Colour of `player`'s marks.
    pub fn mark(&self, player: Player) -> Color {
        match player {
            Player::X => self.x,
            Player::O => self.o,
        }
    }
}

impl Default for Palette {
    fn default() -> Self {
        Self {
            x: Color::Blue,
            o: Color::Red,
            show_hints: true,
        }
    }
}

/// Screen regions recorded during the last draw, for mouse clicks.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct HitMap {
    /// Rectangle of each board square.
    pub cells: Vec<(Rect, Position)>,
    /// Rectangle of each visible move-list entry and its history index.
    pub moves: Vec<(Rect, usize)>,
}

impl HitMap {
    fn target(&self, column: u16, row: u16) -> Option<Click> {
        let point = layout::Position { x: column, y: row };
        if let Some((_, pos)) = self.cells.iter().find(|(rect, _)| rect.contains(point)) {
            return Some(Click::Cell(*pos));
        }
        self.moves
            .iter()
            .find(|(rect, _)| rect.contains(point))
            .map(|(_, index)| Click::Entry(*index))
    }
}

enum Click {
    Cell(Position),
    Entry(usize),
}

/// Main application state.
#[derive(Debug)]
pub struct App {
    engine: GameEngine,
    cursor: Position,
    focus: Focus,
    selected: usize,
    palette: Palette,
    hits: HitMap,
    running: bool,
}

impl App {
    /// Creates a new application with a fresh game.
    #[instrument]
    pub fn new(palette: Palette) -> Self {
        Self {
            engine: GameEngine::new(),
            cursor: Position::Center,
            focus: Focus::default(),
            selected: 0,
            palette,
            hits: HitMap::default(),
            running: true,
        }
    }

    /// Gets the current game.
    pub fn engine(&self) -> &GameEngine {
        &self.engine
    }

    /// Square highlighted on the board.
    pub fn cursor(&self) -> Position {
        self.cursor
    }

    /// Pane receiving navigation keys.
    pub fn focus(&self) -> Focus {
        self.focus
    }

    /// Move-list entry highlighted for keyboard selection.
    pub fn selected(&self) -> usize {
        self.selected
    }

    /// Drawing colours.
    pub fn palette(&self) -> &Palette {
        &self.palette
    }

    /// False once the user asked to quit.
    pub fn is_running(&self) -> bool {
        self.running
    }

    /// Click regions recorded by the last draw.
    pub fn hits(&self) -> &HitMap {
        &self.hits
    }

    /// Replaces the click regions after a draw.
    pub fn set_hits(&mut self, hits: HitMap) {
        self.hits = hits;
    }

    /// Plays `cell` for the player to move.
    #[instrument(skip(self))]
    pub fn play(&mut self, cell: usize) {
        self.engine.apply_move(cell);
        self.selected = self.engine.current_move();
    }

    /// Shows the board after `move_index` moves.
    #[instrument(skip(self))]
    pub fn jump(&mut self, move_index: usize) {
        match self.engine.jump_to(move_index) {
            Ok(()) => self.selected = move_index,
            Err(e) => warn!(error = %e, "Jump rejected"),
        }
    }

    /// Starts a new game, dropping the whole history.
    #[instrument(skip(self))]
    pub fn restart(&mut self) {
        info!("Restarting game");
        self.engine = GameEngine::new();
        self.selected = 0;
    }

    /// Handles a key press.
    #[instrument(skip(self), fields(code = ?key.code))]
    pub fn handle_key(&mut self, key: KeyEvent) {
        if key.kind != KeyEventKind::Press {
            return;
        }

        if let Some(cell) = digit_cell(key.code) {
            self.cursor = Position::from_index(cell).unwrap_or(self.cursor);
            self.play(cell);
            return;
        }

        match key.code {
            KeyCode::Char('q') | KeyCode::Esc => self.running = false,
            KeyCode::Char('r') => self.restart(),
            KeyCode::Tab | KeyCode::BackTab => self.focus = self.focus.toggle(),
            KeyCode::Home => self.jump(0),
            KeyCode::End => self.jump(self.engine.len() - 1),
            code => match self.focus {
                Focus::Board => self.board_key(code),
                Focus::Moves => self.moves_key(code),
            },
        }
    }

    fn board_key(&mut self, code: KeyCode) {
        match code {
            KeyCode::Enter | KeyCode::Char(' ') => self.play(self.cursor.to_index()),
            code => self.cursor = move_cursor(self.cursor, code),
        }
    }

    fn moves_key(&mut self, code: KeyCode) {
        let last = self.engine.len() - 1;
        match code {
            KeyCode::Up => self.selected = self.selected.saturating_sub(1),
            KeyCode::Down => self.selected = (self.selected + 1).min(last),
            KeyCode::Enter | KeyCode::Char(' ') => self.jump(self.selected),
            _ => {}
        }
    }

    /// Handles a mouse event; only left clicks do anything.
    #[instrument(skip(self), fields(column = mouse.column, row = mouse.row))]
    pub fn handle_mouse(&mut self, mouse: MouseEvent) {
        if mouse.kind != MouseEventKind::Down(MouseButton::Left) {
            return;
        }

        match self.hits.target(mouse.column, mouse.row) {
            Some(Click::Cell(pos)) => {
                debug!(%pos, "Cell clicked");
                self.cursor = pos;
                self.focus = Focus::Board;
                self.play(pos.to_index());
            }
            Some(Click::Entry(index)) => {
                debug!(index, "Move list entry clicked");
                self.focus = Focus::Moves;
                self.jump(index);
            }
            None => {}
        }
    }
}
