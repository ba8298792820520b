//! DNS Resolution Module
//!
//! Provides cancelable, callback-based name resolution on top of the
//! operating system's blocking `getaddrinfo`:
//! - [`SystemResolver`]: worker pool + completion posting
//! - [`HostLookup`]: the blocking primitive, pluggable for tests
//! - [`Resolve`]: object-safe resolver interface
//!
//! # Architecture
//!
//! Requests are queued on a pool of worker threads where the blocking lookup
//! runs. The outcome is posted back to the caller's completion context and the
//! handler runs there, never on a worker. Cancellation is cooperative: a
//! canceled request is dropped at the next checkpoint and its handler is never
//! called.
//!
//! # Example
//!
//! ```rust,ignore
//! use sysresolve::completion::EventLoop;
//! use sysresolve::dns::{AddressPreference, SystemResolver};
//! use std::sync::Arc;
//!
//! let mut event_loop = EventLoop::new();
//! let resolver = SystemResolver::new(Arc::new(event_loop.handle()), 4)?;
//!
//! let token = resolver.resolve("example.com", AddressPreference::Any, |result| {
//!     match result {
//!         Ok(addrs) => println!("Resolved: {}", addrs),
//!         Err(e) => println!("Failed: {}", e),
//!     }
//! });
//! // token.cancel() would suppress the callback.
//! event_loop.blocking_run_one();
//! ```

mod config;
mod lookup;
mod pool;
mod resolve;
mod system;

pub use config::ResolverConfig;
pub use lookup::{HostLookup, SystemLookup};
pub use resolve::{AddressList, AddressPreference, Resolve, ResolveHandler, ResolveResult};
pub use system::SystemResolver;
