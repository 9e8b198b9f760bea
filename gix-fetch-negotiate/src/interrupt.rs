//! Caller-driven cancellation of long-running negotiation steps.

use std::sync::atomic::{AtomicBool, Ordering};

/// A thread-safe cancellation flag that can be shared across threads.
///
/// Once cancelled, the flag stays cancelled.
#[derive(Debug, Default)]
pub struct CancellationFlag(AtomicBool);

impl CancellationFlag {
    /// Create a new cancellation flag in the non-cancelled state.
    pub const fn new() -> Self {
        Self(AtomicBool::new(false))
    }

    /// Signal cancellation.
    pub fn cancel(&self) {
        self.0.store(true, Ordering::Relaxed);
    }

    /// Check if cancellation has been requested.
    pub fn is_cancelled(&self) -> bool {
        self.0.load(Ordering::Relaxed)
    }

    /// Return [`Error::Cancelled`](crate::Error::Cancelled) if cancellation was requested.
    pub fn check(&self) -> Result<(), crate::Error> {
        if self.is_cancelled() {
            Err(crate::Error::Cancelled)
        } else {
            Ok(())
        }
    }
}

/// A flag that is never cancelled, used when the caller provides none.
pub(crate) static NEVER: CancellationFlag = CancellationFlag::new();
