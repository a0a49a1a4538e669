//! Demo C: print the spawning and spawned threads' identifiers.
//!
//! The parent keeps a `Thread` handle for the child and reads its id both
//! before and after the join; the two reads are identical because a
//! `ThreadId` never changes or gets reused while the handle is alive.

use std::thread;

fn hello() {
    println!("Child:  my id is {:?}", thread::current().id());
}

fn main() {
    let handle = thread::spawn(hello);
    let child = handle.thread().clone();

    println!("Parent: my id is {:?}", thread::current().id());
    println!("Parent: child id is {:?}", child.id());

    handle.join().expect("child thread panicked");

    println!("Parent: my id is {:?}", thread::current().id());
    println!("Parent: child id is {:?}", child.id());
}
