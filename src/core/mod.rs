//! Core primitives for quickstage (no TUI dependencies).

mod diff;
mod git;
mod repo;
mod status;

pub use diff::*;
pub use git::*;
pub use repo::*;
pub use status::*;
