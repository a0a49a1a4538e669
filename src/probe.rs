//! Copy-observable values for demonstrating argument-passing semantics.
//!
//! A [`Probe`] records every construction and clone into a shared
//! [`CopyLedger`], so a demo can show exactly how many times a value was
//! duplicated on its way into another thread. Moving a `Probe` records
//! nothing; only `Clone` does.

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

/// Shared event counters for one family of probes.
#[derive(Debug, Default)]
pub struct CopyLedger {
    constructed: AtomicU64,
    cloned: AtomicU64,
}

impl CopyLedger {
    pub fn new() -> Arc<Self> {
        Arc::new(Self::default())
    }

    pub fn constructed(&self) -> u64 {
        self.constructed.load(Ordering::Relaxed)
    }

    pub fn cloned(&self) -> u64 {
        self.cloned.load(Ordering::Relaxed)
    }
}

/// A value whose duplication is observable through its ledger.
#[derive(Debug)]
pub struct Probe {
    label: &'static str,
    ledger: Arc<CopyLedger>,
}

impl Probe {
    pub fn new(label: &'static str, ledger: Arc<CopyLedger>) -> Self {
        ledger.constructed.fetch_add(1, Ordering::Relaxed);
        Self { label, ledger }
    }

    pub fn label(&self) -> &'static str {
        self.label
    }

    pub fn ledger(&self) -> &Arc<CopyLedger> {
        &self.ledger
    }
}

impl Clone for Probe {
    fn clone(&self) -> Self {
        self.ledger.cloned.fetch_add(1, Ordering::Relaxed);
        Self {
            label: self.label,
            ledger: self.ledger.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::thread;

    #[test]
    fn test_construction_is_counted() {
        let ledger = CopyLedger::new();
        let _a = Probe::new("a", ledger.clone());
        let _b = Probe::new("b", ledger.clone());
        assert_eq!(ledger.constructed(), 2);
        assert_eq!(ledger.cloned(), 0);
    }

    #[test]
    fn test_clone_is_counted() {
        let ledger = CopyLedger::new();
        let a = Probe::new("a", ledger.clone());
        let _copy = a.clone();
        assert_eq!(ledger.cloned(), 1);
    }

    #[test]
    fn test_move_into_thread_records_no_copy() {
        let ledger = CopyLedger::new();
        let probe = Probe::new("moved", ledger.clone());

        thread::spawn(move || {
            assert_eq!(probe.label(), "moved");
        })
        .join()
        .unwrap();

        assert_eq!(ledger.cloned(), 0);
    }

    #[test]
    fn test_by_value_clone_into_thread_copies_once() {
        let ledger = CopyLedger::new();
        let probe = Probe::new("cloned", ledger.clone());

        let by_value = probe.clone();
        thread::spawn(move || {
            assert_eq!(by_value.label(), "cloned");
        })
        .join()
        .unwrap();

        assert_eq!(ledger.cloned(), 1);
    }

    #[test]
    fn test_shared_reference_into_thread_copies_zero() {
        let ledger = CopyLedger::new();
        let shared = Arc::new(Probe::new("shared", ledger.clone()));

        let by_ref = shared.clone();
        thread::spawn(move || {
            assert_eq!(by_ref.label(), "shared");
        })
        .join()
        .unwrap();

        // The Arc was cloned, the Probe never was.
        assert_eq!(ledger.cloned(), 0);
    }
}
