//! File list rendering.

use ratatui::{
    style::Style,
    text::{Line, Span},
};

use crate::core::{Classification, GitBackend};
use crate::theme::Theme;
use crate::ui::app::App;

use super::bars::footer;
use super::helpers::sanitize_line;

/// Rows below the list: a blank spacer and the footer.
const LIST_CHROME_ROWS: usize = 2;

/// First visible list row for a frame `height` rows tall.
///
/// Keeps the cursor on screen when the list is taller than the frame.
pub fn list_scroll(cursor: usize, height: usize) -> usize {
    let rows = height.saturating_sub(LIST_CHROME_ROWS).max(1);
    if cursor >= rows {
        cursor + 1 - rows
    } else {
        0
    }
}

/// Lines of the browsing screen.
pub fn list_lines<G: GitBackend>(app: &App<G>, theme: &Theme, height: usize) -> Vec<Line<'static>> {
    let rows = height.saturating_sub(LIST_CHROME_ROWS).max(1);
    let start = list_scroll(app.cursor, height);

    let mut lines: Vec<Line<'static>> = app
        .files
        .iter()
        .enumerate()
        .skip(start)
        .take(rows)
        .map(|(idx, file)| {
            let marker = if idx == app.cursor { "> " } else { "  " };
            let glyph_color = match file.classification {
                Classification::Staged => theme.staged,
                Classification::PartiallyStaged => theme.partial,
                Classification::Unstaged => theme.unstaged,
            };

            Line::from(vec![
                Span::styled(marker, Style::default().fg(theme.accent)),
                Span::styled(
                    file.classification.glyph(),
                    Style::default().fg(glyph_color),
                ),
                Span::raw(" "),
                Span::styled(
                    sanitize_line(file.name.as_str()),
                    Style::default().fg(theme.text_normal),
                ),
            ])
        })
        .collect();

    let hints = [
        ("↑/↓", ": navigate".to_string()),
        ("space", ": toggle".to_string()),
        ("d", ": diff".to_string()),
        ("q", ": quit".to_string()),
    ];
    lines.push(Line::default());
    lines.push(footer(app, theme, &hints));
    lines
}
