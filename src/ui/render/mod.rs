//! UI rendering with ratatui.
//!
//! Rendering is split in two: [`frame_lines`] turns the app state into styled
//! lines without touching it, and [`render`] draws those lines into a frame.

mod bars;
mod diff;
mod helpers;
mod list;

use ratatui::{text::Line, widgets::Block, widgets::Paragraph, Frame};

use super::app::{App, Mode};
use crate::core::GitBackend;
use crate::theme::Theme;

/// Main render function.
pub fn render<G: GitBackend>(frame: &mut Frame, app: &App<G>, theme: &Theme) {
    let _timer = crate::metrics::Timer::start("render_frame");

    let area = frame.area();
    let bg = Block::default().style(ratatui::style::Style::default().bg(theme.bg));
    frame.render_widget(bg, area);

    let lines = frame_lines(app, theme, usize::from(area.height));
    frame.render_widget(Paragraph::new(lines), area);
}

/// Lines for one frame `height` rows tall.
///
/// Nothing is drawn once the app is quitting.
pub fn frame_lines<G: GitBackend>(app: &App<G>, theme: &Theme, height: usize) -> Vec<Line<'static>> {
    if app.should_quit {
        return Vec::new();
    }
    match app.mode {
        Mode::ViewingDiff => diff::diff_lines(app, theme),
        Mode::Browsing => list::list_lines(app, theme, height),
    }
}
