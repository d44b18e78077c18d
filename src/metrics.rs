//! Opt-in timing of git calls and frame renders.
//!
//! Set `QUICKSTAGE_METRICS=1` (or `true`) to emit one debug event per timed
//! span under the `quickstage::metrics` target. Off by default; a disabled
//! [`Timer`] is never constructed.

use std::sync::atomic::{AtomicBool, Ordering};
use std::time::Instant;

/// Environment variable that switches timing on.
pub const METRICS_ENV: &str = "QUICKSTAGE_METRICS";

static ENABLED: AtomicBool = AtomicBool::new(false);

/// Read [`METRICS_ENV`] once at startup.
pub fn init() {
    let on = std::env::var(METRICS_ENV)
        .map(|v| v == "1" || v.eq_ignore_ascii_case("true"))
        .unwrap_or(false);
    ENABLED.store(on, Ordering::Relaxed);
}

/// Measures from creation to drop.
///
/// Bind it to a named local (`let _timer = ...`) so it lives for the whole
/// span being measured.
pub struct Timer {
    label: &'static str,
    start: Instant,
}

impl Timer {
    /// `Some` only while timing is switched on.
    #[inline]
    pub fn start(label: &'static str) -> Option<Self> {
        ENABLED.load(Ordering::Relaxed).then(|| Self {
            label,
            start: Instant::now(),
        })
    }
}

impl Drop for Timer {
    fn drop(&mut self) {
        let elapsed = self.start.elapsed();
        tracing::debug!(
            target: "quickstage::metrics",
            label = self.label,
            elapsed_us = elapsed.as_micros() as u64,
            "timing"
        );
    }
}
