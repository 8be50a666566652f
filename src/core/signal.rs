//! Cooperative, one-way cancellation.
//!
//! A [`CancellationSource`] owns the flag; [`CancellationSignal`] handles are
//! read-only views handed to operations. Cancellation is advisory: flipping the
//! flag stops nothing by itself, the operation has to look at it.
//!
//! ```
//! use race_timeout::core::CancellationSource;
//!
//! let source = CancellationSource::new();
//! let signal = source.signal();
//! assert!(!signal.is_cancelled());
//!
//! assert!(source.cancel());
//! assert!(!source.cancel()); // already aborted
//! assert!(signal.is_cancelled());
//! ```

use std::fmt;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use tokio::sync::Notify;

#[derive(Default)]
struct SignalState {
    aborted: AtomicBool,
    notify: Notify,
}

/// Owner side of a cancellation signal.
#[derive(Default)]
pub struct CancellationSource {
    state: Arc<SignalState>,
}

impl CancellationSource {
    /// Create a source that is not yet aborted.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Hand out a read-only signal tied to this source.
    #[must_use]
    pub fn signal(&self) -> CancellationSignal {
        CancellationSignal {
            state: Arc::clone(&self.state),
        }
    }

    /// Mark the signal as aborted and wake every waiter.
    ///
    /// Returns `true` only for the call that performed the transition.
    pub fn cancel(&self) -> bool {
        let first = !self.state.aborted.swap(true, Ordering::SeqCst);
        if first {
            self.state.notify.notify_waiters();
        }
        first
    }

    /// Whether [`cancel`](Self::cancel) has been called.
    #[must_use]
    pub fn is_cancelled(&self) -> bool {
        self.state.aborted.load(Ordering::SeqCst)
    }
}

impl fmt::Debug for CancellationSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CancellationSource")
            .field("aborted", &self.is_cancelled())
            .finish()
    }
}

/// Read-only view of a [`CancellationSource`].
#[derive(Clone)]
pub struct CancellationSignal {
    state: Arc<SignalState>,
}

impl CancellationSignal {
    /// Whether the owning source has been cancelled.
    #[must_use]
    pub fn is_cancelled(&self) -> bool {
        self.state.aborted.load(Ordering::SeqCst)
    }

    /// Alias of [`is_cancelled`](Self::is_cancelled).
    #[must_use]
    pub fn aborted(&self) -> bool {
        self.is_cancelled()
    }

    /// Wait until the signal is aborted. Resolves immediately if it already is.
    pub async fn cancelled(&self) {
        loop {
            // Register before checking so a concurrent cancel is not missed.
            let notified = self.state.notify.notified();
            if self.is_cancelled() {
                return;
            }
            notified.await;
        }
    }
}

impl fmt::Debug for CancellationSignal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CancellationSignal")
            .field("aborted", &self.is_cancelled())
            .finish()
    }
}
