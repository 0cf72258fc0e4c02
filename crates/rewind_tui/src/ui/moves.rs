//! Move list rendering.

use crate::app::{App, Focus};
use ratatui::{
    Frame,
    layout::Rect,
    style::{Color, Modifier, Style},
    widgets::{Block, Borders, Paragraph},
};

/// Width of the move-list pane, borders included.
pub(super) const WIDTH: u16 = 34;

/// Renders one line per history entry and returns the area of each
/// visible entry with its history index.
///
/// The list scrolls to keep the selected entry in view.
pub(super) fn draw_moves(frame: &mut Frame, area: Rect, app: &App) -> Vec<(Rect, usize)> {
    let focused = app.focus() == Focus::Moves;
    let engine = app.engine();
    let title = if engine.is_at_latest() {
        "Moves"
    } else {
        "Moves (rewound)"
    };
    let block = Block::default()
        .borders(Borders::ALL)
        .title(title)
        .border_style(if focused {
            Style::default().fg(Color::Cyan)
        } else {
            Style::default().fg(Color::DarkGray)
        });
    let inner = block.inner(area);
    frame.render_widget(block, area);

    if inner.height == 0 {
        return Vec::new();
    }

    let moves = engine.moves();
    let visible = usize::from(inner.height);
    let offset = app.selected().saturating_sub(visible - 1);

    let mut regions = Vec::new();
    for (row, entry) in engine.move_list().iter().skip(offset).take(visible).enumerate() {
        let line_area = Rect::new(inner.x, inner.y + row as u16, inner.width, 1);

        let marker = if entry.is_current() { ">" } else { " " };
        let mut text = format!("{} {}", marker, entry.label());
        if let Some(mov) = entry.index().checked_sub(1).and_then(|i| moves.get(i)) {
            text.push_str(&format!("  {}", mov));
        }

        let mut style = Style::default();
        if entry.is_current() {
            style = style.add_modifier(Modifier::BOLD);
        }
        if focused && entry.index() == app.selected() {
            style = style.add_modifier(Modifier::REVERSED);
        }

        frame.render_widget(Paragraph::new(text).style(style), line_area);
        regions.push((line_area, entry.index()));
    }
    regions
}
