use super::{App, Mode};
use crate::core::GitBackend;

impl<G: GitBackend> App<G> {
    /// Move the cursor up one file, wrapping from the first to the last.
    pub fn select_prev(&mut self) {
        let n = self.files.len();
        if n == 0 {
            return;
        }
        self.cursor = (self.cursor + n - 1) % n;
        self.on_cursor_moved();
    }

    /// Move the cursor down one file, wrapping from the last to the first.
    pub fn select_next(&mut self) {
        let n = self.files.len();
        if n == 0 {
            return;
        }
        self.cursor = (self.cursor + 1) % n;
        self.on_cursor_moved();
    }

    /// Up arrow: scroll the diff, or select the previous file once at the top.
    pub fn move_up(&mut self) {
        if self.mode == Mode::ViewingDiff && self.viewer.scroll > 0 {
            self.viewer.scroll -= 1;
            self.ui.dirty = true;
        } else {
            self.select_prev();
        }
    }

    /// Down arrow: scroll the diff, or select the next file once at the bottom.
    pub fn move_down(&mut self) {
        if self.mode == Mode::ViewingDiff && self.viewer.scroll < self.viewer.max_scroll() {
            self.viewer.scroll += 1;
            self.ui.dirty = true;
        } else {
            self.select_next();
        }
    }

    fn on_cursor_moved(&mut self) {
        self.viewer.scroll = 0;
        if self.mode == Mode::ViewingDiff {
            self.refresh_diff();
        }
        self.ui.dirty = true;
    }
}
