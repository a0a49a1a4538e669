//! Execution statistics for the worker pool.

use hdrhistogram::Histogram;
use parking_lot::RwLock;
use std::sync::atomic::{AtomicU64, Ordering};
use std::time::Instant;

/// Counters and a latency histogram shared by all workers of a pool.
#[derive(Debug)]
pub struct PoolStats {
    tasks_executed: AtomicU64,
    latency_histogram: RwLock<Histogram<u64>>,
    start_time: Instant,
}

impl PoolStats {
    pub fn new() -> Self {
        // 3 significant figures, values up to one hour in nanoseconds
        let histogram = Histogram::new_with_max(3_600_000_000_000, 3)
            .expect("histogram bounds are static");

        Self {
            tasks_executed: AtomicU64::new(0),
            latency_histogram: RwLock::new(histogram),
            start_time: Instant::now(),
        }
    }

    /// Record one completed task with its execution duration.
    pub fn record_task(&self, duration_ns: u64) {
        self.tasks_executed.fetch_add(1, Ordering::Relaxed);

        if let Some(mut hist) = self.latency_histogram.try_write() {
            let _ = hist.record(duration_ns);
        }
    }

    pub fn tasks_executed(&self) -> u64 {
        self.tasks_executed.load(Ordering::Relaxed)
    }

    pub fn snapshot(&self) -> StatsSnapshot {
        let hist = self.latency_histogram.read();
        StatsSnapshot {
            tasks_executed: self.tasks_executed(),
            latency_p50_ns: hist.value_at_quantile(0.5),
            latency_p99_ns: hist.value_at_quantile(0.99),
            latency_max_ns: hist.max(),
            uptime_secs: self.start_time.elapsed().as_secs_f64(),
        }
    }
}

impl Default for PoolStats {
    fn default() -> Self {
        Self::new()
    }
}

/// Point-in-time copy of pool statistics.
#[derive(Debug, Clone, Copy)]
pub struct StatsSnapshot {
    pub tasks_executed: u64,
    pub latency_p50_ns: u64,
    pub latency_p99_ns: u64,
    pub latency_max_ns: u64,
    pub uptime_secs: f64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_record_increments_count() {
        let stats = PoolStats::new();
        stats.record_task(1_000);
        stats.record_task(2_000);
        assert_eq!(stats.tasks_executed(), 2);
    }

    #[test]
    fn test_snapshot_reflects_latencies() {
        let stats = PoolStats::new();
        for _ in 0..100 {
            stats.record_task(1_000_000);
        }

        let snap = stats.snapshot();
        assert_eq!(snap.tasks_executed, 100);
        assert!(snap.latency_p50_ns > 0);
        assert!(snap.latency_max_ns >= snap.latency_p50_ns);
    }
}
