use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;
use unicode_width::UnicodeWidthChar;

use crate::domain::primitive::CellView;

/// Columns per cell.
const CELL_WIDTH: usize = 3;

/// Glyph shown in the selected empty cell (static caret; the widget has no
/// timers, so no blink).
const CARET: &str = "\u{258F}"; // ▏ left one-eighth block

/// Render the code cells in a single row (expected to be 1 row high).
///
/// Pure projection: reads `(character, selected)` per cell and draws the
/// character, a caret (selected and empty), or a blank cell. `group_size`
/// inserts a wider gap after every full group, e.g. `Some(3)` renders
/// `123 456` style cell groups. `disabled` dims the whole row.
pub fn render_cell_row(
    frame: &mut Frame,
    area: Rect,
    cells: &[CellView],
    group_size: Option<usize>,
    disabled: bool,
) {
    if area.height == 0 || (area.width as usize) < CELL_WIDTH {
        return;
    }

    let mut spans: Vec<Span> = Vec::with_capacity(cells.len() * 2);
    for (i, cell) in cells.iter().enumerate() {
        if i > 0 {
            let group_boundary = matches!(group_size, Some(size) if size > 0 && i % size == 0);
            let gap = if group_boundary { "  " } else { " " };
            spans.push(Span::raw(gap));
        }
        spans.push(cell_span(cell, disabled));
    }

    let paragraph = Paragraph::new(Line::from(spans));
    frame.render_widget(paragraph, area);
}

/// One fixed-width cell: the character centered, a caret, or blank.
fn cell_span(cell: &CellView, disabled: bool) -> Span<'static> {
    let mut style = if cell.selected {
        Style::default()
            .fg(Color::Black)
            .bg(Color::White)
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(Color::White).bg(Color::DarkGray)
    };
    if disabled {
        style = style.add_modifier(Modifier::DIM);
    }

    let content = match cell.character {
        Some(ch) => {
            let width = UnicodeWidthChar::width(ch).unwrap_or(1).min(CELL_WIDTH);
            let pad = CELL_WIDTH - width;
            let left = pad / 2;
            format!(
                "{}{}{}",
                " ".repeat(left),
                ch,
                " ".repeat(pad - left)
            )
        }
        None if cell.shows_caret() => format!(" {} ", CARET),
        None => " ".repeat(CELL_WIDTH),
    };

    Span::styled(content, style)
}
