/// Which screen the loop is showing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Mode {
    /// File list with checkboxes.
    #[default]
    Browsing,
    /// Paginated diff of the file under the cursor.
    ViewingDiff,
}

/// Diff viewer viewport state.
#[derive(Debug, Default)]
pub struct ViewerState {
    /// Lines of the current diff. Only meaningful in [`Mode::ViewingDiff`].
    pub lines: Vec<String>,
    /// First visible line.
    pub scroll: usize,
    /// Number of diff lines that fit on screen.
    pub viewport_height: usize,
}

impl ViewerState {
    /// Replace the diff text and go back to the top.
    ///
    /// Splits on `\n` without dropping a trailing empty line, so a diff
    /// ending in a newline counts one extra (blank) line.
    pub fn set_text(&mut self, text: &str) {
        self.lines = text.split('\n').map(str::to_string).collect();
        self.scroll = 0;
    }

    /// Largest valid scroll offset.
    pub fn max_scroll(&self) -> usize {
        self.lines.len().saturating_sub(self.viewport_height)
    }

    /// Pull `scroll` back inside `[0, max_scroll]`.
    pub fn clamp_scroll(&mut self) {
        self.scroll = self.scroll.min(self.max_scroll());
    }
}

/// UI message state.
#[derive(Debug, Default)]
pub struct UiState {
    /// Error from the last key press, shown until the next one.
    pub error: Option<String>,
    /// Dirty flag for redraw.
    pub dirty: bool,
}
