//! Common imports for demos and benches.

pub use crate::config::{Config, ConfigBuilder};
pub use crate::error::{Error, Result};
pub use crate::pool::{TaskHandle, WorkerPool};
pub use crate::probe::{CopyLedger, Probe};
pub use crate::ticket::TicketCounter;
pub use crate::timer::SteadyTimer;
