//! Stream guards for container-owned byte streams.
//!
//! # Responsibilities
//! - Delegate reads and writes transparently to the wrapped stream
//! - Turn shutdown into a no-op so the container-owned stream stays open
//!
//! # Design Decisions
//! - The host container owns the connection's stream lifecycle; terminating
//!   it from inside an adapted call would break the container's own
//!   response-completion bookkeeping
//! - Guards are thin: no buffering, no state beyond the wrapped stream

use std::io;
use std::pin::Pin;
use std::task::{Context, Poll};

use tokio::io::{AsyncRead, AsyncWrite, ReadBuf};

/// Read-side guard over a container-owned byte stream.
///
/// All reads delegate to the wrapped stream. Dropping the guard releases only
/// the guard itself, never the underlying stream.
#[derive(Debug)]
pub struct GuardedReader<S> {
    inner: S,
}

impl<S> GuardedReader<S> {
    /// Wrap a stream.
    pub fn new(inner: S) -> Self {
        Self { inner }
    }

    /// Shared access to the wrapped stream.
    pub fn get_ref(&self) -> &S {
        &self.inner
    }

    /// Mutable access to the wrapped stream.
    pub fn get_mut(&mut self) -> &mut S {
        &mut self.inner
    }

    /// Unwrap, returning the stream.
    pub fn into_inner(self) -> S {
        self.inner
    }
}

impl<S: AsyncRead + Unpin> AsyncRead for GuardedReader<S> {
    fn poll_read(
        self: Pin<&mut Self>,
        cx: &mut Context<'_>,
        buf: &mut ReadBuf<'_>,
    ) -> Poll<io::Result<()>> {
        Pin::new(&mut self.get_mut().inner).poll_read(cx, buf)
    }
}

/// Write-side guard over a container-owned byte stream.
///
/// Writes and flushes delegate to the wrapped stream; shutdown completes
/// immediately without touching it. The container remains responsible for
/// closing the connection once the transaction ends.
#[derive(Debug)]
pub struct GuardedWriter<S> {
    inner: S,
}

impl<S> GuardedWriter<S> {
    /// Wrap a stream.
    pub fn new(inner: S) -> Self {
        Self { inner }
    }

    /// Shared access to the wrapped stream.
    pub fn get_ref(&self) -> &S {
        &self.inner
    }

    /// Mutable access to the wrapped stream.
    pub fn get_mut(&mut self) -> &mut S {
        &mut self.inner
    }

    /// Unwrap, returning the stream.
    pub fn into_inner(self) -> S {
        self.inner
    }
}

impl<S: AsyncWrite + Unpin> AsyncWrite for GuardedWriter<S> {
    fn poll_write(
        self: Pin<&mut Self>,
        cx: &mut Context<'_>,
        buf: &[u8],
    ) -> Poll<io::Result<usize>> {
        Pin::new(&mut self.get_mut().inner).poll_write(cx, buf)
    }

    fn poll_flush(self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<io::Result<()>> {
        Pin::new(&mut self.get_mut().inner).poll_flush(cx)
    }

    fn poll_shutdown(self: Pin<&mut Self>, _cx: &mut Context<'_>) -> Poll<io::Result<()>> {
        // The wrapped stream stays open: its lifecycle belongs to the host.
        Poll::Ready(Ok(()))
    }
}
