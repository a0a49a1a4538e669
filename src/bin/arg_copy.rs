//! Demo B: observe argument-copy semantics across a thread boundary.
//!
//! One parameter crosses by value (an explicit clone, so its ledger counts
//! one copy) and one crosses by shared reference (an `Arc`, so the value
//! itself is never copied).

use spindle::prelude::*;
use std::sync::Arc;
use std::thread;

fn func(by_value: Probe, by_ref: &Probe) {
    println!("func({}, {})", by_value.label(), by_ref.label());
}

fn main() {
    let value_ledger = CopyLedger::new();
    let ref_ledger = CopyLedger::new();

    let a = Probe::new("a", value_ledger.clone());
    let b = Arc::new(Probe::new("b", ref_ledger.clone()));

    let a_for_thread = a.clone();
    let b_for_thread = b.clone();

    let handle = thread::spawn(move || func(a_for_thread, &b_for_thread));
    handle.join().expect("worker thread panicked");

    println!("by-value  copies: {}", value_ledger.cloned());
    println!("by-ref    copies: {}", ref_ledger.cloned());

    assert!(value_ledger.cloned() >= 1);
    assert_eq!(ref_ledger.cloned(), 0);
}
