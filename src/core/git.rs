//! Resolution of index actions and diff requests into `git` invocations.

use std::process::{Command, Output};

use super::repo::{RelPath, RepoError, RepoRoot};
use super::status::{IndexAction, IndexOp};

/// Which two trees a diff compares.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DiffTarget {
    /// Index against HEAD (`git diff --staged`).
    Staged,
    /// Working tree against the index (`git diff`).
    Worktree,
    /// Working tree against HEAD (`git diff HEAD`).
    WorktreeVsHead,
}

/// The git operations the interactive loop depends on.
pub trait GitBackend {
    /// Run an index action. Errors carry git's stderr.
    fn apply(&self, action: &IndexAction) -> Result<(), RepoError>;

    /// Produce the textual diff of `path` for `target`.
    fn diff(&self, path: &RelPath, target: DiffTarget) -> Result<String, RepoError>;
}

/// [`GitBackend`] that shells out to the `git` executable.
#[derive(Debug, Clone)]
pub struct GitCli {
    root: RepoRoot,
}

impl GitCli {
    /// Run git commands from the top of `root`.
    pub fn new(root: RepoRoot) -> Self {
        Self { root }
    }

    fn git(&self, args: &[&str], path: &RelPath) -> Result<Output, RepoError> {
        let output = Command::new("git")
            .args(args)
            .arg("--")
            .arg(path.as_str())
            .current_dir(self.root.path())
            .output()?;
        Ok(output)
    }
}

/// Arguments for `op`, not including the `--` separator and path.
pub fn index_op_args(op: IndexOp) -> &'static [&'static str] {
    match op {
        IndexOp::Add => &["add"],
        // -r so an untracked directory entry (`dir/`) can be dropped as a whole.
        IndexOp::RemoveCached => &["rm", "-r", "--cached", "--quiet"],
        IndexOp::RestoreStaged => &["restore", "--staged"],
    }
}

/// Arguments for a diff of `target`, not including the `--` separator and path.
pub fn diff_args(target: DiffTarget) -> &'static [&'static str] {
    match target {
        DiffTarget::Staged => &["diff", "--no-color", "--no-ext-diff", "--staged"],
        DiffTarget::Worktree => &["diff", "--no-color", "--no-ext-diff"],
        DiffTarget::WorktreeVsHead => &["diff", "--no-color", "--no-ext-diff", "HEAD"],
    }
}

impl GitBackend for GitCli {
    fn apply(&self, action: &IndexAction) -> Result<(), RepoError> {
        let _timer = crate::metrics::Timer::start("git_index_action");
        let output = self.git(index_op_args(action.op), &action.path)?;

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr);
            return Err(RepoError::GitError(stderr.trim().to_string()));
        }
        Ok(())
    }

    fn diff(&self, path: &RelPath, target: DiffTarget) -> Result<String, RepoError> {
        let _timer = crate::metrics::Timer::start("git_diff");
        let output = self.git(diff_args(target), path)?;

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr);
            let reason = stderr.trim();
            return Err(RepoError::GitError(if reason.is_empty() {
                output.status.to_string()
            } else {
                reason.to_string()
            }));
        }

        // Diff text is shown verbatim, so stray non-UTF-8 bytes are replaced.
        let mut text = String::from_utf8_lossy(&output.stdout).into_owned();
        text.push_str(&String::from_utf8_lossy(&output.stderr));
        Ok(text)
    }
}
