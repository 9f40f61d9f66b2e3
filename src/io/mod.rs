//! Stream plumbing between the adapter and container-owned byte streams.

pub mod guard;

pub use guard::{GuardedReader, GuardedWriter};
