//! Fixed worker pool with joinable task handles.
//!
//! A [`WorkerPool`] owns a set of named OS threads that drain a shared job
//! queue. [`WorkerPool::submit`] hands back a [`TaskHandle`] that delivers
//! the task's return value over a one-slot channel, so callers can launch a
//! batch of tasks first and collect the results separately.

use crate::config::Config;
use crate::error::{Error, Result};
use crate::stats::{PoolStats, StatsSnapshot};
use crossbeam_channel::{bounded, unbounded, Receiver, Sender};
use std::panic::{catch_unwind, AssertUnwindSafe};
use std::sync::Arc;
use std::thread::{self, JoinHandle};
use std::time::Instant;

type Job = Box<dyn FnOnce() + Send + 'static>;

/// Waits for one submitted task's result.
#[derive(Debug)]
pub struct TaskHandle<T> {
    rx: Receiver<T>,
}

impl<T> TaskHandle<T> {
    /// Block until the task finishes and take its result.
    ///
    /// Fails if the task panicked before sending a result.
    pub fn join(self) -> Result<T> {
        self.rx
            .recv()
            .map_err(|_| Error::task("task dropped its result channel"))
    }
}

#[derive(Debug)]
pub struct WorkerPool {
    job_tx: Option<Sender<Job>>,
    workers: Vec<WorkerHandle>,
    num_threads: usize,
    stats: Arc<PoolStats>,
}

#[derive(Debug)]
struct WorkerHandle {
    thread: Option<JoinHandle<()>>,
}

impl WorkerPool {
    pub fn new(config: &Config) -> Result<Self> {
        config.validate()?;
        let num_threads = config.worker_threads();

        let (job_tx, job_rx) = unbounded::<Job>();
        let stats = Arc::new(PoolStats::new());

        let mut workers = Vec::with_capacity(num_threads);
        for id in 0..num_threads {
            let rx = job_rx.clone();
            let stats = stats.clone();
            let name = format!("{}-{}", config.thread_name_prefix, id);

            let mut builder = thread::Builder::new().name(name);
            if let Some(stack_size) = config.stack_size {
                builder = builder.stack_size(stack_size);
            }

            let thread = builder
                .spawn(move || worker_loop(rx, stats))
                .map_err(|e| Error::pool(format!("spawn failed: {}", e)))?;

            workers.push(WorkerHandle {
                thread: Some(thread),
            });
        }

        Ok(Self {
            job_tx: Some(job_tx),
            workers,
            num_threads,
            stats,
        })
    }

    /// Queue a task and get a handle to its eventual result.
    pub fn submit<F, T>(&self, f: F) -> Result<TaskHandle<T>>
    where
        F: FnOnce() -> T + Send + 'static,
        T: Send + 'static,
    {
        let (result_tx, result_rx) = bounded(1);
        let job: Job = Box::new(move || {
            let _ = result_tx.send(f());
        });

        self.job_tx
            .as_ref()
            .ok_or(Error::PoolShutDown)?
            .send(job)
            .map_err(|_| Error::PoolShutDown)?;

        Ok(TaskHandle { rx: result_rx })
    }

    /// Queue a fire-and-forget task.
    pub fn execute<F>(&self, f: F) -> Result<()>
    where
        F: FnOnce() + Send + 'static,
    {
        self.submit(f).map(|_| ())
    }

    pub fn num_threads(&self) -> usize {
        self.num_threads
    }

    pub fn stats(&self) -> StatsSnapshot {
        self.stats.snapshot()
    }

    /// Close the queue and wait for workers to drain it.
    pub fn shutdown(&mut self) {
        self.job_tx.take();

        for worker in &mut self.workers {
            if let Some(thread) = worker.thread.take() {
                let _ = thread.join();
            }
        }
    }
}

impl Drop for WorkerPool {
    fn drop(&mut self) {
        self.shutdown();
    }
}

fn worker_loop(rx: Receiver<Job>, stats: Arc<PoolStats>) {
    // recv fails once every sender is gone, which is the shutdown signal
    while let Ok(job) = rx.recv() {
        let started = Instant::now();
        let outcome = catch_unwind(AssertUnwindSafe(job));
        stats.record_task(started.elapsed().as_nanos() as u64);

        if outcome.is_err() {
            eprintln!(
                "[spindle] task panicked on {}",
                thread::current().name().unwrap_or("unnamed worker")
            );
        }
    }
}
