//! Backoff Scheduler — linear delay between retry attempts.

use std::time::Duration;

/// Default wait unit between attempts.
pub const DEFAULT_BASE_DELAY: Duration = Duration::from_millis(1000);

/// Linear backoff: attempt `n` waits `n * base_delay` before the next try.
///
/// Deterministic, no jitter. Concurrent invocations from many users could
/// in principle herd; acceptable at current traffic.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BackoffSchedule {
    base_delay: Duration,
}

impl BackoffSchedule {
    /// `base_delay` is clamped to at least 1ms so the schedule can never
    /// produce a zero wait for attempt >= 1.
    pub fn new(base_delay: Duration) -> Self {
        Self {
            base_delay: base_delay.max(Duration::from_millis(1)),
        }
    }

    /// Delay before the retry that follows failed attempt `attempt` (1-based).
    pub fn delay_for(&self, attempt: u32) -> Duration {
        self.base_delay * attempt.max(1)
    }
}

impl Default for BackoffSchedule {
    fn default() -> Self {
        Self::new(DEFAULT_BASE_DELAY)
    }
}
