//! SPINDLE - threading primers and micro-benchmarks
//!
//! A small library behind a set of standalone demo binaries: instrumented
//! primitives for observing how values cross thread boundaries, a fixed
//! worker pool with joinable task handles, and two benchmark harnesses
//! (mass task spawning, large-array sorting).
//!
//! # Quick Start
//!
//! ```no_run
//! use spindle::prelude::*;
//!
//! let config = Config::builder()
//!     .num_threads(4)
//!     .task_count(10_000)
//!     .build()
//!     .unwrap();
//!
//! let outcome = spindle::spawn_bench::run(&config).unwrap();
//! assert!(outcome.tickets_complete());
//! println!("launch: {:?}, collect: {:?}", outcome.launch, outcome.collect);
//! ```
//!
//! # Pieces
//!
//! - **Probe / CopyLedger**: copy-observable values for argument-passing demos
//! - **TicketCounter**: fetch-add ticket dispenser, unique under concurrency
//! - **WorkerPool**: named worker threads draining a shared job queue
//! - **SteadyTimer**: monotonic stopwatch for phase timing
//! - **spawn_bench / sort_bench**: the two benchmark harnesses

// Lint configuration
#![warn(missing_debug_implementations)]

pub mod config;
pub mod error;
pub mod pool;
pub mod prelude;
pub mod probe;
pub mod sort_bench;
pub mod spawn_bench;
pub mod stats;
pub mod ticket;
pub mod timer;

// Re-export key types at crate root
pub use config::{Config, ConfigBuilder};
pub use error::{Error, Result};
pub use pool::{TaskHandle, WorkerPool};
pub use timer::SteadyTimer;
