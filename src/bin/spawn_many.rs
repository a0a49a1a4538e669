//! Benchmark D: spawn a very large number of tasks and time launch vs collect.
//!
//! Each task takes one ticket from a shared atomic counter and sleeps 10 ms.
//! Launch time (queueing all tasks) and collection time (joining all
//! handles) are reported separately.

use spindle::prelude::*;
use spindle::spawn_bench;

const TASKS_TO_SPAWN: usize = 1_000_000;

fn main() {
    println!("TASKS_TO_SPAWN={}", TASKS_TO_SPAWN);

    let config = Config::builder()
        .task_count(TASKS_TO_SPAWN)
        .build()
        .expect("default spawn config is valid");

    println!("workers: {}", config.worker_threads());

    let outcome = spawn_bench::run(&config).expect("benchmark run failed");

    println!("Time to launch tasks:  {:.6} s", outcome.launch.as_secs_f64());
    println!("Time to collect tasks: {:.6} s", outcome.collect.as_secs_f64());
    println!("tickets complete: {}", outcome.tickets_complete());

    let stats = outcome.pool_stats;
    println!(
        "task latency: p50 {:.3} ms, p99 {:.3} ms, max {:.3} ms ({} executed)",
        stats.latency_p50_ns as f64 / 1e6,
        stats.latency_p99_ns as f64 / 1e6,
        stats.latency_max_ns as f64 / 1e6,
        stats.tasks_executed
    );
    println!("Done.");
}
