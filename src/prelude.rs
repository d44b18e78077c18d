//! Common re-exports for convenient importing.
//!
//! # Example
//!
//! ```rust,ignore
//! use quickstage::prelude::*;
//! ```

pub use crate::core::{
    Classification, DiffTarget, FileEntry, GitBackend, GitCli, IndexAction, IndexOp, RelPath,
    RepoError, RepoRoot,
};
pub use crate::theme::Theme;
pub use crate::ui::{App, Mode};
