//! Mass task-spawning benchmark.
//!
//! Submits a large batch of tasks to a [`WorkerPool`], where each task takes
//! one ticket from a shared [`TicketCounter`] and sleeps briefly, then joins
//! every handle. Launch time and collection time are measured separately,
//! mirroring the create-then-wait split of the classic spawn benchmark.

use crate::config::Config;
use crate::error::Result;
use crate::pool::WorkerPool;
use crate::stats::StatsSnapshot;
use crate::ticket::TicketCounter;
use crate::timer::SteadyTimer;
use std::thread;
use std::time::Duration;

/// Outcome of one spawn-benchmark run.
#[derive(Debug)]
pub struct SpawnOutcome {
    pub task_count: usize,
    pub launch: Duration,
    pub collect: Duration,
    pub tickets: Vec<u64>,
    pub pool_stats: StatsSnapshot,
}

impl SpawnOutcome {
    /// True when the collected tickets are exactly {0, 1, …, N-1}:
    /// no duplicates, no gaps.
    pub fn tickets_complete(&self) -> bool {
        if self.tickets.len() != self.task_count {
            return false;
        }

        let mut sorted = self.tickets.clone();
        sorted.sort_unstable();
        sorted
            .iter()
            .enumerate()
            .all(|(expected, &ticket)| ticket == expected as u64)
    }
}

/// Run the benchmark described by `config`.
pub fn run(config: &Config) -> Result<SpawnOutcome> {
    let mut pool = WorkerPool::new(config)?;
    let counter = TicketCounter::new();
    let sleep = config.task_sleep;

    let mut timer = SteadyTimer::start();
    let mut handles = Vec::with_capacity(config.task_count);
    for _ in 0..config.task_count {
        let counter = counter.clone();
        handles.push(pool.submit(move || {
            let ticket = counter.take();
            if !sleep.is_zero() {
                thread::sleep(sleep);
            }
            ticket
        })?);
    }
    let launch = timer.elapsed();

    timer.reset();
    let mut tickets = Vec::with_capacity(handles.len());
    for handle in handles {
        tickets.push(handle.join()?);
    }
    let collect = timer.elapsed();

    // Drain workers so the stats snapshot covers every task.
    pool.shutdown();

    Ok(SpawnOutcome {
        task_count: config.task_count,
        launch,
        collect,
        tickets,
        pool_stats: pool.stats(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn quick_config(tasks: usize) -> Config {
        Config::builder()
            .num_threads(4)
            .task_count(tasks)
            .task_sleep(Duration::ZERO)
            .build()
            .unwrap()
    }

    #[test]
    fn test_all_tickets_collected_exactly_once() {
        let outcome = run(&quick_config(2000)).unwrap();

        assert_eq!(outcome.tickets.len(), 2000);
        assert!(outcome.tickets_complete());
    }

    #[test]
    fn test_pool_stats_match_task_count() {
        let outcome = run(&quick_config(500)).unwrap();
        assert_eq!(outcome.pool_stats.tasks_executed, 500);
    }

    #[test]
    fn test_rerun_preserves_invariants() {
        // Timings and interleavings vary between runs; the counted
        // invariants must not.
        for _ in 0..3 {
            let outcome = run(&quick_config(300)).unwrap();
            assert!(outcome.tickets_complete());
        }
    }

    #[test]
    fn test_incomplete_tickets_detected() {
        let mut outcome = run(&quick_config(100)).unwrap();
        outcome.tickets[0] = outcome.tickets[1];
        assert!(!outcome.tickets_complete());
    }
}
