//! Completion contexts.
//!
//! A completion context is the single-threaded scheduler the caller lives on.
//! Resolve handlers are never run on worker threads; instead the worker posts
//! a [`Completion`] here and the context runs it on its own thread.
//!
//! Two implementations are provided:
//! - [`EventLoop`]: a channel-fed loop driven explicitly by its owner
//! - `tokio::runtime::Handle`: spawns completions onto a (current-thread)
//!   tokio runtime

mod event_loop;

pub use event_loop::{EventLoop, EventLoopHandle};

use std::sync::Arc;

/// A callback posted to a completion context.
pub type Completion = Box<dyn FnOnce() + Send + 'static>;

/// Something that can run callbacks later on its own thread.
pub trait CompletionContext: Send + Sync {
    /// Enqueues `completion` to run on this context.
    ///
    /// Must not run the callback inline on the calling thread.
    fn post(&self, completion: Completion);
}

impl<C: CompletionContext + ?Sized> CompletionContext for Arc<C> {
    fn post(&self, completion: Completion) {
        (**self).post(completion)
    }
}

/// Posts onto a tokio runtime.
///
/// Handlers run wherever the runtime polls its tasks, so pair this with a
/// current-thread runtime to keep the single-threaded guarantee.
impl CompletionContext for tokio::runtime::Handle {
    fn post(&self, completion: Completion) {
        self.spawn(async move { completion() });
    }
}
