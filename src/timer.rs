//! Monotonic stopwatch for benchmark phase timing.

use std::time::{Duration, Instant};

/// Wall-clock stopwatch over the monotonic clock.
///
/// Starts running on construction; `reset` rewinds it for the next phase.
#[derive(Debug, Clone, Copy)]
pub struct SteadyTimer {
    start: Instant,
}

impl SteadyTimer {
    pub fn start() -> Self {
        Self {
            start: Instant::now(),
        }
    }

    pub fn reset(&mut self) {
        self.start = Instant::now();
    }

    pub fn elapsed(&self) -> Duration {
        self.start.elapsed()
    }

    pub fn elapsed_secs(&self) -> f64 {
        self.start.elapsed().as_secs_f64()
    }
}

impl Default for SteadyTimer {
    fn default() -> Self {
        Self::start()
    }
}

/// Format a duration as fractional milliseconds, matching the benchmark
/// console output style.
pub fn format_ms(d: Duration) -> String {
    format!("{:.3} ms", d.as_secs_f64() * 1e3)
}
