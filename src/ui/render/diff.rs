//! Diff viewer rendering.

use ratatui::{style::Style, text::Line};

use crate::core::GitBackend;
use crate::theme::Theme;
use crate::ui::app::App;

use super::bars::footer;
use super::helpers::sanitize_line;

/// Lines of the diff screen: the visible window of the diff, then the footer.
///
/// Diff text is drawn as-is; it is never parsed or colourised.
pub fn diff_lines<G: GitBackend>(app: &App<G>, theme: &Theme) -> Vec<Line<'static>> {
    let range = app.visible_diff_range();
    let end = range.end;
    let total = app.viewer.lines.len();

    let mut lines: Vec<Line<'static>> = app.viewer.lines[range]
        .iter()
        .map(|l| Line::styled(sanitize_line(l), Style::default().fg(theme.text_normal)))
        .collect();

    let hints = [
        ("↑/↓/PageUp/PageDown", format!(" scroll ({}/{})", end, total)),
        ("g", ": top".to_string()),
        ("G", ": bottom".to_string()),
        ("d", ": back".to_string()),
        ("q", ": quit".to_string()),
    ];
    lines.push(footer(app, theme, &hints));
    lines
}
