//! Application state and lifecycle.

use crate::core::{FileEntry, GitBackend, GitCli};

mod diff;
mod navigation;
mod staging;
mod state;

pub use state::{Mode, UiState, ViewerState};

/// Viewport height used until the first resize arrives.
pub const DEFAULT_VIEWPORT_HEIGHT: usize = 20;

/// Application state.
///
/// Owned by the event loop; every transition goes through a `&mut self`
/// method, and git is reached only through the backend `G`.
pub struct App<G = GitCli> {
    /// Changed files, in `git status` order.
    pub files: Vec<FileEntry>,
    /// Index of the selected file.
    pub cursor: usize,
    /// Current screen.
    pub mode: Mode,
    /// Diff viewer state.
    pub viewer: ViewerState,
    /// UI state (messages, redraw flag).
    pub ui: UiState,
    /// Should the app quit?
    pub should_quit: bool,

    git: G,
}

impl<G: GitBackend> App<G> {
    /// Create the app over a non-empty list of changed files.
    pub fn new(files: Vec<FileEntry>, git: G) -> Self {
        Self {
            files,
            cursor: 0,
            mode: Mode::Browsing,
            viewer: ViewerState {
                viewport_height: DEFAULT_VIEWPORT_HEIGHT,
                ..Default::default()
            },
            ui: UiState {
                dirty: true,
                ..Default::default()
            },
            should_quit: false,
            git,
        }
    }

    /// The git backend.
    pub fn git(&self) -> &G {
        &self.git
    }

    /// Get the currently selected file.
    pub fn selected_file(&self) -> Option<&FileEntry> {
        self.files.get(self.cursor)
    }

    /// Recompute the diff viewport for a terminal `height` rows tall.
    ///
    /// The file list and footer keep their rows even while the diff is
    /// shown, so the viewport is `height - files - 1`, floored at one line.
    pub fn resize(&mut self, height: u16) {
        self.viewer.viewport_height = usize::from(height)
            .saturating_sub(self.files.len() + 1)
            .max(1);
        self.viewer.clamp_scroll();
        self.ui.dirty = true;
    }

    /// Stop the loop. Nothing is drawn after this.
    pub fn quit(&mut self) {
        self.should_quit = true;
    }

    /// Drop the transient error line.
    pub fn clear_messages(&mut self) {
        if self.ui.error.take().is_some() {
            self.ui.dirty = true;
        }
    }

    /// Clear the redraw flag after drawing.
    pub fn clear_dirty(&mut self) {
        self.ui.dirty = false;
    }
}
