//! Atomic ticket dispenser.

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

/// Hands out unique, monotonically increasing tickets starting at 0.
///
/// Uniqueness comes from a single fetch-add; no ordering of which task
/// observes which ticket is guaranteed under concurrency.
#[derive(Debug, Default)]
pub struct TicketCounter {
    next: AtomicU64,
}

impl TicketCounter {
    pub fn new() -> Arc<Self> {
        Arc::new(Self::default())
    }

    /// Take the next ticket.
    pub fn take(&self) -> u64 {
        self.next.fetch_add(1, Ordering::Relaxed)
    }

    /// Number of tickets handed out so far.
    pub fn issued(&self) -> u64 {
        self.next.load(Ordering::Relaxed)
    }
}
