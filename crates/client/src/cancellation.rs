//! Cancellation support for long-running poll loops.
//!
//! Responsibilities:
//! - Provide a lightweight, clonable cancellation token that the result
//!   poller checks between poll requests and races against its inter-poll
//!   sleep, so cancellation takes effect promptly instead of waiting out the
//!   remote service.
//!
//! Does NOT handle:
//! - Installing signal handlers; callers (e.g. the CLI) decide when to
//!   cancel.
//!
//! Invariants:
//! - Once cancelled, a token remains cancelled forever.

use std::sync::{
    Arc,
    atomic::{AtomicBool, Ordering},
};

use tokio::sync::Notify;

/// Cancellation token usable across async tasks.
///
/// Intentionally small and dependency-free (vs `tokio_util::sync::CancellationToken`).
#[derive(Clone, Debug, Default)]
pub struct CancellationToken {
    cancelled: Arc<AtomicBool>,
    notify: Arc<Notify>,
}

impl CancellationToken {
    /// Create a new, non-cancelled token.
    pub fn new() -> Self {
        Self::default()
    }

    /// Cancel the token (idempotent).
    pub fn cancel(&self) {
        let was_cancelled = self.cancelled.swap(true, Ordering::SeqCst);
        if !was_cancelled {
            self.notify.notify_waiters();
        }
    }

    /// True if cancellation has been requested.
    pub fn is_cancelled(&self) -> bool {
        self.cancelled.load(Ordering::SeqCst)
    }

    /// Await cancellation.
    ///
    /// Safe against missed notifications: the `notified()` future is created
    /// first, then the atomic state is checked.
    pub async fn cancelled(&self) {
        let notified = self.notify.notified();
        if self.is_cancelled() {
            return;
        }
        notified.await;
    }
}
