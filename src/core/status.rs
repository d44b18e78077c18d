//! Interpretation of porcelain status codes.
//!
//! `git status --porcelain` reports two columns per path: `X` for the index
//! side and `Y` for the worktree side. This module folds them into a
//! three-way [`Classification`] and picks the index operations that move the
//! file in and out of the index.

use super::repo::RelPath;

/// Staging state of a file, as shown by the checkbox glyph.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Classification {
    /// Nothing staged for this path.
    Unstaged,
    /// Everything staged; the worktree matches the index.
    Staged,
    /// Some changes staged, more on top in the worktree.
    PartiallyStaged,
}

impl Classification {
    /// Checkbox glyph used in the file list.
    pub fn glyph(self) -> &'static str {
        match self {
            Classification::Staged => "[✓]",
            Classification::PartiallyStaged => "[~]",
            Classification::Unstaged => "[ ]",
        }
    }
}

/// A mutation of the index for one path.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IndexOp {
    /// `git add`: copy the worktree version into the index.
    Add,
    /// `git rm --cached`: drop the path from the index, keep it on disk.
    /// Used for paths HEAD has never seen.
    RemoveCached,
    /// `git restore --staged`: reset the index entry to HEAD.
    RestoreStaged,
}

impl IndexOp {
    /// Whether this op moves changes into the index.
    pub fn is_stage(self) -> bool {
        matches!(self, IndexOp::Add)
    }
}

/// An index operation bound to a path. Resolved to a process only when run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IndexAction {
    /// What to do.
    pub op: IndexOp,
    /// Which path to do it to.
    pub path: RelPath,
}

impl IndexAction {
    /// Bind `op` to `path`.
    pub fn new(op: IndexOp, path: RelPath) -> Self {
        Self { op, path }
    }
}

/// One changed path in the working tree.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileEntry {
    /// Repository-relative path.
    pub name: RelPath,
    /// Current staging state.
    pub classification: Classification,
    /// Action that stages the file.
    pub stage: IndexAction,
    /// Action that unstages the file.
    pub unstage: IndexAction,
}

/// Classify a two-character porcelain status code.
///
/// Arms are checked in order. `??` and `A?` must win over the generic
/// both-columns-dirty arm: a path added but never committed has no HEAD
/// entry to restore, so it has to leave the index via `rm --cached`.
///
/// # Examples
///
/// ```
/// use quickstage::core::{classify, Classification, IndexOp, RelPath};
///
/// let entry = classify("AM", RelPath::new("new.rs"));
/// assert_eq!(entry.classification, Classification::PartiallyStaged);
/// assert_eq!(entry.unstage.op, IndexOp::RemoveCached);
/// ```
pub fn classify(code: &str, name: RelPath) -> FileEntry {
    let mut chars = code.chars();
    let x = chars.next().unwrap_or(' ');
    let y = chars.next().unwrap_or(' ');

    let (classification, unstage_op) = match (x, y) {
        ('?', '?') => (Classification::Unstaged, IndexOp::RemoveCached),
        ('A', y) if y != ' ' => (Classification::PartiallyStaged, IndexOp::RemoveCached),
        (x, y) if x != ' ' && y != ' ' => {
            (Classification::PartiallyStaged, IndexOp::RestoreStaged)
        }
        ('A', _) => (Classification::Staged, IndexOp::RemoveCached),
        (x, _) if x != ' ' => (Classification::Staged, IndexOp::RestoreStaged),
        _ => (Classification::Unstaged, IndexOp::RestoreStaged),
    };

    FileEntry {
        stage: IndexAction::new(IndexOp::Add, name.clone()),
        unstage: IndexAction::new(unstage_op, name.clone()),
        name,
        classification,
    }
}
