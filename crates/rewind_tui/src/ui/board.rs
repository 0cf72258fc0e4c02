//! Tic-tac-toe board rendering.

use super::center_rect;
use crate::app::{App, Focus};
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Text},
    widgets::Paragraph,
};
use rewind::{Position, Square, rules};

const CELL_WIDTH: u16 = 12;
const CELL_HEIGHT: u16 = 3;

/// Width of the drawn grid, separators included.
pub(super) const WIDTH: u16 = CELL_WIDTH * 3 + 2;
/// Height of the drawn grid, separators included.
pub(super) const HEIGHT: u16 = CELL_HEIGHT * 3 + 2;

/// Renders the board of the current move and returns each square's area.
pub(super) fn draw_board(frame: &mut Frame, area: Rect, app: &App) -> Vec<(Rect, Position)> {
    let board_area = center_rect(area, WIDTH, HEIGHT);

    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(CELL_HEIGHT),
            Constraint::Length(1),
            Constraint::Length(CELL_HEIGHT),
            Constraint::Length(1),
            Constraint::Length(CELL_HEIGHT),
        ])
        .split(board_area);

    let winning = rules::winning_line(app.engine().current_board());
    let mut cells = Vec::with_capacity(9);

    for (row, area) in [rows[0], rows[2], rows[4]].into_iter().enumerate() {
        let cols = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([
                Constraint::Length(CELL_WIDTH),
                Constraint::Length(1),
                Constraint::Length(CELL_WIDTH),
                Constraint::Length(1),
                Constraint::Length(CELL_WIDTH),
            ])
            .split(area);

        for (col, cell_area) in [cols[0], cols[2], cols[4]].into_iter().enumerate() {
            if let Some(pos) = Position::from_coords(row, col) {
                let highlighted = winning.is_some_and(|line| line.contains(&pos));
                draw_cell(frame, cell_area, app, pos, highlighted);
                cells.push((cell_area, pos));
            }
        }
        draw_separator_vertical(frame, cols[1]);
        draw_separator_vertical(frame, cols[3]);
    }

    draw_separator(frame, rows[1]);
    draw_separator(frame, rows[3]);
    cells
}

fn draw_cell(frame: &mut Frame, area: Rect, app: &App, pos: Position, winning: bool) {
    let palette = app.palette();

    let (symbol, base_style) = match app.engine().current_board().get(pos) {
        Square::Empty if palette.show_hints => (
            (pos.to_index() + 1).to_string(),
            Style::default().fg(Color::DarkGray),
        ),
        Square::Empty => (String::new(), Style::default()),
        Square::Occupied(player) => (
            player.to_string(),
            Style::default()
                .fg(palette.mark(player))
                .add_modifier(Modifier::BOLD),
        ),
    };

    let style = if app.focus() == Focus::Board && pos == app.cursor() {
        base_style.bg(Color::White).fg(Color::Black)
    } else if winning {
        base_style.bg(Color::Green)
    } else {
        base_style
    };

    let text = Text::from(vec![Line::raw(""), Line::raw(symbol), Line::raw("")]);
    let paragraph = Paragraph::new(text)
        .style(style)
        .alignment(Alignment::Center);
    frame.render_widget(paragraph, area);
}

fn draw_separator(frame: &mut Frame, area: Rect) {
    let sep = Paragraph::new("─".repeat(area.width as usize))
        .style(Style::default().fg(Color::DarkGray));
    frame.render_widget(sep, area);
}

fn draw_separator_vertical(frame: &mut Frame, area: Rect) {
    let lines: Vec<Line> = (0..area.height).map(|_| Line::raw("│")).collect();
    let sep = Paragraph::new(lines).style(Style::default().fg(Color::DarkGray));
    frame.render_widget(sep, area);
}
