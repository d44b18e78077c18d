//! Footer rendering.

use ratatui::{
    style::Style,
    text::{Line, Span},
};

use crate::core::GitBackend;
use crate::theme::Theme;
use crate::ui::app::App;

/// Footer line: the pending error if there is one, otherwise key hints.
///
/// Each hint is a key followed by its description; hints are separated by
/// two spaces.
pub fn footer<G: GitBackend>(app: &App<G>, theme: &Theme, hints: &[(&str, String)]) -> Line<'static> {
    if let Some(ref err) = app.ui.error {
        return Line::from(vec![
            Span::styled("✗ ", Style::default().fg(theme.error)),
            Span::styled(err.clone(), Style::default().fg(theme.error)),
        ]);
    }

    let mut spans = Vec::with_capacity(hints.len() * 3);
    for (i, (key, desc)) in hints.iter().enumerate() {
        if i > 0 {
            spans.push(Span::raw("  "));
        }
        spans.push(Span::styled(
            key.to_string(),
            Style::default().fg(theme.accent),
        ));
        spans.push(Span::styled(
            desc.clone(),
            Style::default().fg(theme.text_muted),
        ));
    }
    Line::from(spans)
}
