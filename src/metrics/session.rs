use std::time::{Duration, Instant};

use crate::game::TickOutcome;

/// In-memory statistics for the current run. Nothing here outlives the process.
pub struct SessionMetrics {
    pub start_time: Instant,
    pub elapsed_time: Duration,
    pub apples_eaten: u32,
    pub resets: u32,
    pub best_length: usize,
}

impl SessionMetrics {
    pub fn new() -> Self {
        Self {
            start_time: Instant::now(),
            elapsed_time: Duration::ZERO,
            apples_eaten: 0,
            resets: 0,
            best_length: 1,
        }
    }

    pub fn update(&mut self) {
        self.elapsed_time = self.start_time.elapsed();
    }

    /// Fold one tick into the totals
    pub fn record_tick(&mut self, outcome: TickOutcome) {
        if outcome.ate_apple {
            self.apples_eaten += 1;
        }
        if outcome.reset {
            self.resets += 1;
        }
        self.best_length = self.best_length.max(outcome.moved_length);
    }

    pub fn format_time(&self) -> String {
        let total_secs = self.elapsed_time.as_secs();
        let minutes = total_secs / 60;
        let seconds = total_secs % 60;
        format!("{:02}:{:02}", minutes, seconds)
    }
}

impl Default for SessionMetrics {
    fn default() -> Self {
        Self::new()
    }
}
