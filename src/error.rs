//! Error types for the call adapter and local dispatch.

use thiserror::Error;

/// Convenience alias used throughout the crate.
pub type Result<T> = std::result::Result<T, BridgeError>;

/// Errors surfaced by the call adapter and the local-resource connector.
///
/// Missing optional data (no body stream, no transport attributes, resource
/// not found) is never an error; those paths return `None`. This enum covers
/// the failures that remain.
#[derive(Debug, Error)]
pub enum BridgeError {
    /// Transport-level failure while committing a response. Fatal for the
    /// current transaction; the caller decides what happens to it.
    #[error("I/O failure during response transmission: {0}")]
    Io(#[from] std::io::Error),

    /// A local-resource request arrived under a scheme this connector does
    /// not serve. This is a caller or configuration bug, rejected before any
    /// resolution is attempted.
    #[error("scheme \"{scheme}\" is not supported by this connector, only \"war\" is")]
    UnsupportedScheme {
        /// The scheme token found on the request.
        scheme: String,
    },
}
