//! Git repository discovery and the working-tree snapshot loader.

use std::path::{Path, PathBuf};
use std::process::Command;

use thiserror::Error;

use super::status::{classify, FileEntry};

/// Errors from repository operations.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum RepoError {
    /// Path is not inside a git working tree.
    #[error("not inside a git repository")]
    NotARepo,
    /// Git command failed with an error message.
    #[error("git command failed: {0}")]
    GitError(String),
    /// I/O error while spawning git.
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
    /// Git output contained invalid UTF-8.
    #[error("invalid utf-8 in git output")]
    InvalidUtf8,
}

/// Top-level directory of a git working tree.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct RepoRoot(PathBuf);

impl RepoRoot {
    /// Discover the working tree containing `path`.
    ///
    /// Fails with [`RepoError::NotARepo`] unless
    /// `git rev-parse --is-inside-work-tree` exits 0 and prints `true`.
    /// Bare repositories and `.git` directories therefore do not qualify.
    ///
    /// # Examples
    ///
    /// ```rust,no_run
    /// use quickstage::core::RepoRoot;
    /// use std::path::Path;
    ///
    /// let repo = RepoRoot::discover(Path::new(".")).expect("not in a git repo");
    /// println!("Repo at: {}", repo.path().display());
    /// ```
    #[must_use = "this returns a Result that should be checked"]
    pub fn discover(path: &Path) -> Result<Self, RepoError> {
        let check = Command::new("git")
            .args(["rev-parse", "--is-inside-work-tree"])
            .current_dir(path)
            .output()?;

        let inside = check.status.success()
            && std::str::from_utf8(&check.stdout)
                .map(|s| s.trim() == "true")
                .unwrap_or(false);
        if !inside {
            return Err(RepoError::NotARepo);
        }

        let output = Command::new("git")
            .args(["rev-parse", "--show-toplevel"])
            .current_dir(path)
            .output()?;

        if !output.status.success() {
            return Err(RepoError::NotARepo);
        }

        let root = std::str::from_utf8(&output.stdout)
            .map_err(|_| RepoError::InvalidUtf8)?
            .trim();

        let canonical = PathBuf::from(root)
            .canonicalize()
            .map_err(|_| RepoError::NotARepo)?;

        Ok(Self(canonical))
    }

    /// Get the repository root path.
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.0
    }
}

/// A repository-relative path. Never absolute.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct RelPath(String);

impl RelPath {
    /// Create a RelPath from trusted git output.
    pub fn new(path: impl Into<String>) -> Self {
        let path = path.into();
        debug_assert!(
            !path.starts_with('/'),
            "RelPath must not be absolute: {}",
            path
        );
        Self(path)
    }

    /// Get the path as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for RelPath {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// List the changed files of the working tree, in `git status` order.
#[must_use = "this returns a Result that should be checked"]
pub fn list_changed_files(root: &RepoRoot) -> Result<Vec<FileEntry>, RepoError> {
    let _timer = crate::metrics::Timer::start("git_status");

    let output = Command::new("git")
        .args(["status", "--porcelain=v1", "-z"])
        .current_dir(root.path())
        .output()?;

    if !output.status.success() {
        let stderr = String::from_utf8_lossy(&output.stderr);
        return Err(RepoError::GitError(stderr.trim().to_string()));
    }

    Ok(parse_porcelain_status(&output.stdout))
}

/// Discover the repository around `dir` and load its changed files.
#[must_use = "this returns a Result that should be checked"]
pub fn load(dir: &Path) -> Result<(RepoRoot, Vec<FileEntry>), RepoError> {
    let root = RepoRoot::discover(dir)?;
    let files = list_changed_files(&root)?;
    tracing::info!(
        root = %root.path().display(),
        count = files.len(),
        "loaded working tree status"
    );
    Ok((root, files))
}

/// Parse `git status --porcelain=v1 -z` output.
///
/// Each record is `XY PATH`. Rename and copy records are followed by a
/// second record holding the source path, which is skipped. Records
/// shorter than four bytes are ignored, as are paths that are not UTF-8:
/// they are logged and left out so the rest of the tree stays usable.
pub fn parse_porcelain_status(raw: &[u8]) -> Vec<FileEntry> {
    let mut files = Vec::new();
    let mut records = raw.split(|&b| b == 0);

    while let Some(record) = records.next() {
        if record.len() < 4 {
            continue;
        }

        let (code, path) = (&record[0..2], &record[3..]);
        if code.iter().any(|&b| b == b'R' || b == b'C') {
            // Source path of a rename/copy; the entry is listed under its new name.
            records.next();
        }

        let (Ok(code), Ok(path)) = (std::str::from_utf8(code), std::str::from_utf8(path)) else {
            tracing::warn!(
                record = %String::from_utf8_lossy(record),
                "skipping status entry with non-UTF-8 path"
            );
            continue;
        };

        files.push(classify(code, RelPath::new(path)));
    }

    files
}
