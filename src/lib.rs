//! # sysresolve
//!
//! Cancelable, callback-based domain name resolution on top of the operating
//! system's blocking resolver.
//!
//! `sysresolve` runs `getaddrinfo` on a dedicated pool of worker threads and
//! delivers each result back to the caller's single-threaded completion
//! context, so handlers can touch loop-owned state without locking.
//!
//! ## Features
//!
//! - **Worker Pool**: configurable number of threads for blocking lookups
//! - **Cancellation**: every request returns a [`CancelToken`](base::cancelable::CancelToken)
//! - **Safe Teardown**: dropping the resolver turns already-posted results into no-ops
//! - **Completion Contexts**: built-in [`EventLoop`](completion::EventLoop) or a tokio runtime
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use sysresolve::completion::EventLoop;
//! use sysresolve::dns::{AddressPreference, SystemResolver};
//! use std::sync::Arc;
//!
//! let mut event_loop = EventLoop::new();
//! let resolver = SystemResolver::new(Arc::new(event_loop.handle()), 4)?;
//!
//! resolver.resolve("example.com", AddressPreference::Any, |result| {
//!     println!("{:?}", result);
//! });
//! event_loop.blocking_run_one();
//! ```
//!
//! ## Modules
//!
//! - [`base`] - Cancellation tokens and error definitions
//! - [`completion`] - Completion contexts handlers are delivered on
//! - [`dns`] - The system resolver and its worker pool

pub mod base;
pub mod completion;
pub mod dns;
