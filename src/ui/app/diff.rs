use std::ops::Range;

use super::{App, Mode};
use crate::core::{fetch_diff, GitBackend};

impl<G: GitBackend> App<G> {
    /// `d`: enter the diff viewer for the selected file, or leave it.
    pub fn toggle_diff_mode(&mut self) {
        match self.mode {
            Mode::Browsing => {
                self.mode = Mode::ViewingDiff;
                self.refresh_diff();
            }
            Mode::ViewingDiff => {
                self.mode = Mode::Browsing;
                self.viewer.scroll = 0;
            }
        }
        self.ui.dirty = true;
    }

    /// Fetch the diff of the selected file and scroll to its top.
    pub fn refresh_diff(&mut self) {
        let Some(entry) = self.files.get(self.cursor) else {
            self.viewer.set_text("");
            return;
        };
        let text = fetch_diff(&self.git, entry);
        self.viewer.set_text(&text);
        self.ui.dirty = true;
    }

    /// Largest scroll offset for the current diff and viewport.
    pub fn max_scroll(&self) -> usize {
        self.viewer.max_scroll()
    }

    /// PageDown: half a viewport down, stopping at the bottom.
    pub fn page_down(&mut self) {
        if self.mode != Mode::ViewingDiff {
            return;
        }
        let step = self.viewer.viewport_height / 2;
        self.viewer.scroll = (self.viewer.scroll + step).min(self.max_scroll());
        self.ui.dirty = true;
    }

    /// PageUp: half a viewport up, stopping at the top.
    pub fn page_up(&mut self) {
        if self.mode != Mode::ViewingDiff {
            return;
        }
        let step = self.viewer.viewport_height / 2;
        self.viewer.scroll = self.viewer.scroll.saturating_sub(step);
        self.ui.dirty = true;
    }

    /// `g`: jump to the first diff line.
    pub fn scroll_to_top(&mut self) {
        if self.mode != Mode::ViewingDiff {
            return;
        }
        self.viewer.scroll = 0;
        self.ui.dirty = true;
    }

    /// `G`: jump so the last diff line sits at the bottom of the viewport.
    pub fn scroll_to_bottom(&mut self) {
        if self.mode != Mode::ViewingDiff {
            return;
        }
        self.viewer.scroll = self.max_scroll();
        self.ui.dirty = true;
    }

    /// Indices of the diff lines currently on screen.
    pub fn visible_diff_range(&self) -> Range<usize> {
        let total = self.viewer.lines.len();
        let start = self.viewer.scroll.min(total);
        let end = (self.viewer.scroll + self.viewer.viewport_height).min(total);
        start..end
    }
}
