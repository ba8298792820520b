//! Shared cancellation flag.
//!
//! A [`CancelToken`] marks a unit of work as abandoned. Every clone observes
//! the same flag, so a token can be handed to a worker thread and to a
//! completion callback while the caller keeps its own copy to cancel.

use std::sync::{
    atomic::{AtomicBool, Ordering},
    Arc,
};

/// Cooperative cancellation flag shared by all of its clones.
///
/// Canceling never interrupts work that is already running; it only tells
/// the next checkpoint to drop the result.
#[derive(Clone, Debug, Default)]
pub struct CancelToken {
    canceled: Arc<AtomicBool>,
}

impl CancelToken {
    /// Creates a token that is not canceled.
    pub fn new() -> Self {
        Self::default()
    }

    /// Marks the token canceled. Calling this more than once is harmless.
    pub fn cancel(&self) {
        self.canceled.store(true, Ordering::Release);
    }

    pub fn is_canceled(&self) -> bool {
        self.canceled.load(Ordering::Acquire)
    }

    /// Returns true if both tokens share the same flag.
    pub fn same_token(&self, other: &CancelToken) -> bool {
        Arc::ptr_eq(&self.canceled, &other.canceled)
    }

    /// A token that starts out canceled.
    pub(crate) fn canceled() -> Self {
        let token = Self::new();
        token.cancel();
        token
    }
}
