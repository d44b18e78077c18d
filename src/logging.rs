//! File logging via `tracing`.
//!
//! The terminal belongs to the UI while it runs, so events go to
//! `quickstage.log` in the platform data directory. The filter comes from
//! `QUICKSTAGE_LOG` (an `EnvFilter` directive, default `info`).

use std::path::PathBuf;

use tracing_appender::rolling::{RollingFileAppender, Rotation};
use tracing_subscriber::EnvFilter;

/// Environment variable holding the log filter directive.
pub const LOG_ENV: &str = "QUICKSTAGE_LOG";

/// Directory the log file is written to, if the platform has one.
pub fn log_dir() -> Option<PathBuf> {
    directories::ProjectDirs::from("", "", "quickstage").map(|d| d.data_local_dir().to_path_buf())
}

/// Install the global subscriber. Safe to call more than once.
///
/// Falls back to discarding events when the log directory cannot be
/// created, so logging never prevents the UI from starting.
pub fn init() {
    let filter = EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new("info"));

    let appender = log_dir().and_then(|dir| {
        std::fs::create_dir_all(&dir).ok()?;
        RollingFileAppender::builder()
            .rotation(Rotation::NEVER)
            .filename_prefix("quickstage")
            .filename_suffix("log")
            .build(dir)
            .ok()
    });

    match appender {
        Some(appender) => {
            let _ = tracing_subscriber::fmt()
                .with_env_filter(filter)
                .with_ansi(false)
                .with_writer(appender)
                .try_init();
        }
        None => {
            let _ = tracing_subscriber::fmt()
                .with_env_filter(filter)
                .with_writer(std::io::sink)
                .try_init();
        }
    }
}
