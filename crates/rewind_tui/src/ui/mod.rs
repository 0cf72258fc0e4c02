//! Stateless rendering of the game screen.
//!
//! Drawing also records where each square and move-list entry landed so
//! mouse clicks can be mapped back to engine operations.

mod board;
mod moves;

use crate::app::{App, HitMap};
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    widgets::{Block, Borders, Paragraph},
};
use rewind::Status;

const HELP: &str = "1-9 play | arrows move | Enter select | Tab switch pane | Home/End | r restart | q quit";

/// Draws the whole screen and records the click regions on `app`.
pub fn draw(frame: &mut Frame, app: &mut App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Title
            Constraint::Min(board::HEIGHT),
            Constraint::Length(3), // Status
            Constraint::Length(1), // Help
        ])
        .split(frame.area());

    let title = Paragraph::new("Rewind - Tic Tac Toe")
        .style(Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD))
        .alignment(Alignment::Center);
    frame.render_widget(title, chunks[0]);

    let body = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Min(board::WIDTH), Constraint::Length(moves::WIDTH)])
        .split(chunks[1]);

    let hits = HitMap {
        cells: board::draw_board(frame, body[0], app),
        moves: moves::draw_moves(frame, body[1], app),
    };

    draw_status(frame, chunks[2], app);

    let help = Paragraph::new(HELP)
        .style(Style::default().fg(Color::DarkGray))
        .alignment(Alignment::Center);
    frame.render_widget(help, chunks[3]);

    app.set_hits(hits);
}

fn draw_status(frame: &mut Frame, area: Rect, app: &App) {
    let engine = app.engine();
    let style = match engine.status() {
        Status::Winner(player) => Style::default()
            .fg(app.palette().mark(player))
            .add_modifier(Modifier::BOLD),
        Status::NextPlayer(_) => Style::default().fg(Color::Yellow),
    };

    let status = Paragraph::new(engine.status_text())
        .style(style)
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
    frame.render_widget(status, area);
}

/// Centers a `width` x `height` rectangle inside `area`.
pub(crate) fn center_rect(area: Rect, width: u16, height: u16) -> Rect {
    let width = width.min(area.width);
    let height = height.min(area.height);
    Rect::new(
        area.x + (area.width - width) / 2,
        area.y + (area.height - height) / 2,
        width,
        height,
    )
}
