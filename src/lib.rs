//! quickstage - interactive staging for git working trees.
//!
//! Lists every changed file with a checkbox showing whether it is staged,
//! unstaged, or partially staged, and lets the user flip that state one file
//! at a time or page through the file's diff.
//!
//! # Quick Start
//!
//! ```rust,ignore
//! use quickstage::prelude::*;
//!
//! let (repo, files) = quickstage::core::load(std::path::Path::new("."))?;
//! let mut app = App::new(files, GitCli::new(repo));
//! app.toggle_selected();
//! ```

#![deny(missing_docs)]

pub mod core;
pub mod logging;
pub mod metrics;
pub mod prelude;
pub mod theme;
pub mod ui;
