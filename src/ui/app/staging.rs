use super::{App, Mode};
use crate::core::{Classification, GitBackend};

impl<G: GitBackend> App<G> {
    /// Space: stage or unstage the selected file.
    ///
    /// Staged files are unstaged; unstaged and partially staged files are
    /// staged. The classification changes only if git reports success;
    /// otherwise the failure is shown on the status line.
    pub fn toggle_selected(&mut self) {
        if self.mode != Mode::Browsing {
            return;
        }
        let Some(entry) = self.files.get(self.cursor) else {
            return;
        };

        let (action, next) = match entry.classification {
            Classification::Staged => (&entry.unstage, Classification::Unstaged),
            Classification::Unstaged | Classification::PartiallyStaged => {
                (&entry.stage, Classification::Staged)
            }
        };
        let verb = if action.op.is_stage() { "stage" } else { "unstage" };

        match self.git.apply(action) {
            Ok(()) => {
                tracing::info!(path = %action.path, op = ?action.op, "index updated");
                self.files[self.cursor].classification = next;
            }
            Err(e) => {
                tracing::warn!(path = %action.path, op = ?action.op, error = %e, "index update failed");
                self.ui.error = Some(format!("Failed to {} {}: {}", verb, action.path, e));
            }
        }
        self.ui.dirty = true;
    }
}
