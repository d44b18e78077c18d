//! Diff fetching for the diff viewer.

use super::git::{DiffTarget, GitBackend};
use super::status::{Classification, FileEntry};

/// Comparison shown for a file in the given state.
pub fn diff_target(classification: Classification) -> DiffTarget {
    match classification {
        Classification::Staged => DiffTarget::Staged,
        Classification::Unstaged => DiffTarget::Worktree,
        Classification::PartiallyStaged => DiffTarget::WorktreeVsHead,
    }
}

/// Fetch the diff text for `entry`.
///
/// Never fails: a git error comes back as a one-line message, which the
/// viewer shows in place of the diff.
pub fn fetch_diff<G: GitBackend + ?Sized>(git: &G, entry: &FileEntry) -> String {
    let target = diff_target(entry.classification);
    match git.diff(&entry.name, target) {
        Ok(text) => text,
        Err(e) => {
            tracing::warn!(path = %entry.name, ?target, error = %e, "diff failed");
            format!("Failed to show diff: {}", e)
        }
    }
}
