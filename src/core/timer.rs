//! Elapsed-time tracking for an active round.
//!
//! The timer measures active play time from the moment the round starts
//! (preview over) until completion. It is sampled from the engine's `tick`
//! pump rather than running its own thread:
//!
//! - running while `started && !completed`, frozen otherwise
//! - monotonically non-decreasing between resets
//! - reads are side-effect free; only `update` and `reset` mutate

use serde::{Deserialize, Serialize};

/// Recommended pump cadence for hosts driving [`update`](GameTimer::update)
/// via the engine's `tick`.
pub const POLL_INTERVAL_MS: u64 = 100;

/// Tracks elapsed active time for one round.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameTimer {
    started_at_ms: Option<u64>,
    elapsed_ms: u64,
}

impl GameTimer {
    /// Create a timer at zero.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sample the timer against the current wall-clock time.
    ///
    /// The first running sample pins the reference timestamp. While
    /// `started && !completed` the elapsed value follows `now_ms`; once
    /// `completed` turns true (or `started` is false) the value freezes.
    pub fn update(&mut self, started: bool, completed: bool, now_ms: u64) {
        if started && !completed {
            let start = *self.started_at_ms.get_or_insert(now_ms);
            // max() keeps the reading monotonic even if the wall clock steps back
            self.elapsed_ms = self.elapsed_ms.max(now_ms.saturating_sub(start));
        }
    }

    /// Last sampled elapsed time in milliseconds.
    #[must_use]
    pub fn elapsed_ms(&self) -> u64 {
        self.elapsed_ms
    }

    /// Zero the timer and drop the reference timestamp.
    pub fn reset(&mut self) {
        self.started_at_ms = None;
        self.elapsed_ms = 0;
    }
}
