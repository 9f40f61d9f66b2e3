//! Observability subsystem.
//!
//! The library itself only emits `tracing` events; installing a subscriber
//! stays an explicit, opt-in step for the embedding application.

pub mod logging;
