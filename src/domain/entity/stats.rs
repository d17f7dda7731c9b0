use serde::{Deserialize, Serialize};

/// Cumulative usage counters. Only completed focus sessions are counted;
/// the counters never decrease and are not reset by normal operation.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Stats {
    pub sessions_completed: u64,
    pub total_focus_seconds: u64,
}

impl Stats {
    /// Account for one finished focus session lasting `duration_secs`.
    pub fn record_focus_session(&mut self, duration_secs: u64) {
        self.sessions_completed += 1;
        self.total_focus_seconds += duration_secs;
    }
}
