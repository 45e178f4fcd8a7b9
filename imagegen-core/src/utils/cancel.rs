//! Cancellation utilities
//!
//! Provides a first-class cancellation handle that callers attach to a request and
//! transports observe while the request is in flight.

use crate::error::ImageError;
use std::future::Future;
use tokio_util::sync::CancellationToken;

/// A handle that can be used to request cancellation.
#[derive(Clone, Debug)]
pub struct CancelHandle {
    token: CancellationToken,
}

impl CancelHandle {
    fn new() -> Self {
        Self {
            token: CancellationToken::new(),
        }
    }

    /// Request cancellation. Any in-flight request observing this handle is
    /// aborted as soon as possible; dropping it closes the underlying connection.
    pub fn cancel(&self) {
        self.token.cancel();
    }

    /// Check if cancellation was requested.
    pub fn is_cancelled(&self) -> bool {
        self.token.is_cancelled()
    }

    /// A future that resolves when cancellation is requested.
    pub fn cancelled(&self) -> tokio_util::sync::WaitForCancellationFuture<'_> {
        self.token.cancelled()
    }
}

/// Create a standalone cancel handle that can be shared across tasks.
pub fn new_cancel_handle() -> CancelHandle {
    CancelHandle::new()
}

/// Drive `future` to completion unless `cancel` fires first.
///
/// Cancellation wins ties, and an already-cancelled handle never polls `future`.
pub async fn run_cancellable<F>(cancel: Option<&CancelHandle>, future: F) -> Result<F::Output, ImageError>
where
    F: Future,
{
    let Some(cancel) = cancel else {
        return Ok(future.await);
    };
    if cancel.is_cancelled() {
        return Err(ImageError::Cancelled);
    }
    tokio::select! {
        biased;
        _ = cancel.cancelled() => Err(ImageError::Cancelled),
        out = future => Ok(out),
    }
}
