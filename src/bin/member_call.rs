//! Demo A: invoke a member function in a new thread.
//!
//! A `Widget` is constructed on the main thread, then moved into a spawned
//! thread which calls one of its methods with a captured argument. The
//! ledger shows the value was moved, not copied, on the way in.

use spindle::prelude::*;
use std::thread;

#[derive(Debug)]
struct Widget {
    probe: Probe,
}

impl Widget {
    fn new(ledger: std::sync::Arc<CopyLedger>) -> Self {
        println!("Widget::new()");
        Self {
            probe: Probe::new("widget", ledger),
        }
    }

    fn process(&self, arg: i32) {
        println!(
            "Widget[{}]::process({}) on {:?}",
            self.probe.label(),
            arg,
            thread::current().id()
        );
    }
}

fn main() {
    let ledger = CopyLedger::new();
    let widget = Widget::new(ledger.clone());
    let arg = 123;

    let handle = thread::spawn(move || widget.process(arg));
    handle.join().expect("worker thread panicked");

    println!(
        "constructed: {}, copied: {}",
        ledger.constructed(),
        ledger.cloned()
    );
}
