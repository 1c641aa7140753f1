use std::sync::atomic::{AtomicU32, Ordering};

/// Tally of failures reported by the endpoint. Never reset; a restart
/// starts from zero.
#[derive(Debug, Default)]
pub struct ErrorCounter {
    failures: AtomicU32,
}

impl ErrorCounter {
    /// Returns the tally after recording.
    pub fn record_failure(&self) -> u32 {
        self.failures.fetch_add(1, Ordering::Relaxed).saturating_add(1)
    }

    pub fn count(&self) -> u32 {
        self.failures.load(Ordering::Relaxed)
    }

    pub fn has_reached(&self, threshold: u32) -> bool {
        self.count() >= threshold
    }
}
