//! Structured logging.
//!
//! # Responsibilities
//! - Initialize the logging subsystem
//! - Configure the log level from the environment
//!
//! # Design Decisions
//! - Uses the tracing crate for structured logging
//! - Level configurable via `RUST_LOG`, defaulting to `info`
//! - Idempotent: a second call is a no-op instead of a panic

use tracing_subscriber::EnvFilter;

/// Install a formatting subscriber with an environment-driven filter.
///
/// Intended for binaries and tests embedding this library; the library
/// itself never installs one.
pub fn init() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let _ = tracing_subscriber::fmt().with_env_filter(filter).try_init();
}
