use super::{Completion, CompletionContext};
use tokio::sync::mpsc;

/// A single-threaded completion loop.
///
/// Completions posted through any [`EventLoopHandle`] queue up in order and
/// run only when the owner drives the loop, on the owner's thread.
///
/// # Example
///
/// ```rust,ignore
/// use sysresolve::completion::EventLoop;
///
/// let mut event_loop = EventLoop::new();
/// let handle = event_loop.handle();
/// // ... hand `handle` to a resolver ...
/// while event_loop.blocking_run_one() {}
/// ```
#[derive(Debug)]
pub struct EventLoop {
    sender: mpsc::UnboundedSender<Completion>,
    receiver: mpsc::UnboundedReceiver<Completion>,
}

impl EventLoop {
    pub fn new() -> Self {
        let (sender, receiver) = mpsc::unbounded_channel();
        Self { sender, receiver }
    }

    /// Returns a handle that posts into this loop.
    pub fn handle(&self) -> EventLoopHandle {
        EventLoopHandle {
            sender: self.sender.clone(),
        }
    }

    /// Runs every completion that is already queued, without waiting.
    ///
    /// Returns the number of completions run.
    pub fn run_pending(&mut self) -> usize {
        let mut ran = 0;
        while let Ok(completion) = self.receiver.try_recv() {
            completion();
            ran += 1;
        }
        ran
    }

    /// Waits for the next completion and runs it.
    ///
    /// The loop holds a sender of its own, so this only returns once a
    /// completion has actually run.
    pub async fn run_one(&mut self) -> bool {
        match self.receiver.recv().await {
            Some(completion) => {
                completion();
                true
            }
            None => false,
        }
    }

    /// Blocking variant of [`run_one`](Self::run_one) for threads outside a
    /// tokio runtime.
    ///
    /// # Panics
    ///
    /// Panics if called from within an asynchronous execution context.
    pub fn blocking_run_one(&mut self) -> bool {
        match self.receiver.blocking_recv() {
            Some(completion) => {
                completion();
                true
            }
            None => false,
        }
    }

    /// Number of completions waiting to run.
    pub fn pending(&self) -> usize {
        self.receiver.len()
    }
}

impl Default for EventLoop {
    fn default() -> Self {
        Self::new()
    }
}

/// Cloneable posting side of an [`EventLoop`].
#[derive(Debug, Clone)]
pub struct EventLoopHandle {
    sender: mpsc::UnboundedSender<Completion>,
}

impl CompletionContext for EventLoopHandle {
    fn post(&self, completion: Completion) {
        if self.sender.send(completion).is_err() {
            tracing::trace!("event loop gone, dropping completion");
        }
    }
}
