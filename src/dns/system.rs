//! System DNS resolver using getaddrinfo.
//!
//! Lookups run on a dedicated pool of worker threads; results are posted back
//! to the caller's [`CompletionContext`] and the handler runs there.
//!
//! Every request is guarded by two tokens: the per-request token returned by
//! [`SystemResolver::resolve`] and the resolver's own lifetime token, canceled
//! when the resolver is dropped. Both are checked before the lookup starts,
//! after it returns, and again on the completion context right before the
//! handler runs, so a completion that was already posted when the resolver
//! went away does nothing.

use super::config::ResolverConfig;
use super::lookup::{HostLookup, SystemLookup};
use super::pool::WorkerPool;
use super::resolve::{AddressList, AddressPreference, Resolve, ResolveHandler, ResolveResult};
use crate::base::cancelable::CancelToken;
use crate::base::context::IoResultExt;
use crate::base::neterror::NetError;
use crate::completion::CompletionContext;
use std::{
    fmt, io,
    panic::{self, AssertUnwindSafe},
    sync::Arc,
};

/// Cancelable resolver backed by a blocking lookup on a worker pool.
///
/// # Example
///
/// ```rust,ignore
/// use sysresolve::completion::EventLoop;
/// use sysresolve::dns::{AddressPreference, SystemResolver};
/// use std::sync::Arc;
///
/// let mut event_loop = EventLoop::new();
/// let resolver = SystemResolver::new(Arc::new(event_loop.handle()), 2)?;
///
/// let token = resolver.resolve("example.com", AddressPreference::Any, |result| {
///     println!("{:?}", result);
/// });
/// event_loop.blocking_run_one();
/// ```
pub struct SystemResolver {
    context: Arc<dyn CompletionContext>,
    config: ResolverConfig,
    lookup: Arc<dyn HostLookup>,
    pool: Option<WorkerPool>,
    lifetime: CancelToken,
}

impl SystemResolver {
    /// Creates a resolver with `thread_count` workers posting into `context`.
    pub fn new(context: Arc<dyn CompletionContext>, thread_count: usize) -> Result<Self, NetError> {
        Self::with_config(context, ResolverConfig::new().thread_count(thread_count))
    }

    pub fn with_config(
        context: Arc<dyn CompletionContext>,
        config: ResolverConfig,
    ) -> Result<Self, NetError> {
        Self::with_lookup(context, config, Arc::new(SystemLookup::new()))
    }

    /// Creates a resolver that uses `lookup` instead of `getaddrinfo`.
    pub fn with_lookup(
        context: Arc<dyn CompletionContext>,
        config: ResolverConfig,
        lookup: Arc<dyn HostLookup>,
    ) -> Result<Self, NetError> {
        config.validate()?;

        let mut resolver = Self {
            context,
            config,
            lookup,
            pool: None,
            lifetime: CancelToken::new(),
        };
        resolver.reset()?;
        Ok(resolver)
    }

    /// Starts resolving `domain` and returns immediately.
    ///
    /// `handler` runs at most once, on the completion context, unless the
    /// returned token or the resolver itself is canceled first. The
    /// preference is currently ignored; the OS decides the order.
    ///
    /// If the resolver is stopped, the returned token is already canceled and
    /// the handler is dropped without being called.
    pub fn resolve<F>(&self, domain: &str, _preference: AddressPreference, handler: F) -> CancelToken
    where
        F: FnOnce(ResolveResult) + Send + 'static,
    {
        let Some(pool) = &self.pool else {
            tracing::warn!(domain = %domain, "resolve called on a stopped resolver");
            return CancelToken::canceled();
        };

        tracing::trace!(domain = %domain, "start resolving");

        let token = CancelToken::new();
        let task = ResolveTask {
            domain: domain.to_string(),
            handler: Box::new(handler),
            token: token.clone(),
            lifetime: self.lifetime.clone(),
            lookup: Arc::clone(&self.lookup),
            context: Arc::clone(&self.context),
        };

        if pool.execute(Box::new(move || task.run())).is_err() {
            tracing::warn!(domain = %domain, "worker pool closed, dropping request");
            token.cancel();
        }

        token
    }

    /// Shuts the worker pool down.
    ///
    /// Blocks until every worker has exited. Requests already queued still
    /// run and deliver their results; new requests are refused until
    /// [`reset`](Self::reset).
    pub fn stop(&mut self) {
        if let Some(mut pool) = self.pool.take() {
            tracing::debug!("stopping system resolver");
            pool.shutdown();
        }
    }

    /// (Re)creates the worker pool, stopping the current one first.
    pub fn reset(&mut self) -> Result<(), NetError> {
        tracing::debug!("resetting system resolver");
        self.stop();
        self.pool = Some(WorkerPool::start(
            self.config.thread_count,
            &self.config.thread_name,
        )?);
        Ok(())
    }

    /// Whether the worker pool is up.
    pub fn is_running(&self) -> bool {
        self.pool.is_some()
    }

    pub fn thread_count(&self) -> usize {
        self.config.thread_count
    }

    pub fn config(&self) -> &ResolverConfig {
        &self.config
    }
}

impl Resolve for SystemResolver {
    fn resolve(
        &self,
        domain: &str,
        preference: AddressPreference,
        handler: ResolveHandler,
    ) -> CancelToken {
        SystemResolver::resolve(self, domain, preference, handler)
    }

    fn completion_context(&self) -> &Arc<dyn CompletionContext> {
        &self.context
    }
}

impl Drop for SystemResolver {
    fn drop(&mut self) {
        // Cancel first: queued requests are skipped and anything already
        // posted to the completion context turns into a no-op.
        self.lifetime.cancel();
        self.stop();
    }
}

impl fmt::Debug for SystemResolver {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SystemResolver")
            .field("config", &self.config)
            .field("running", &self.is_running())
            .field(
                "threads",
                &self.pool.as_ref().map_or(0, WorkerPool::thread_count),
            )
            .finish_non_exhaustive()
    }
}

/// One queued request, moved onto a worker thread.
struct ResolveTask {
    domain: String,
    handler: ResolveHandler,
    token: CancelToken,
    lifetime: CancelToken,
    lookup: Arc<dyn HostLookup>,
    context: Arc<dyn CompletionContext>,
}

impl ResolveTask {
    fn abandoned(token: &CancelToken, lifetime: &CancelToken) -> bool {
        token.is_canceled() || lifetime.is_canceled()
    }

    fn run(self) {
        if Self::abandoned(&self.token, &self.lifetime) {
            tracing::debug!(domain = %self.domain, "request canceled before lookup");
            return;
        }

        tracing::debug!(domain = %self.domain, "trying to resolve");

        // A panicking lookup must not take the worker down with it.
        let result = panic::catch_unwind(AssertUnwindSafe(|| self.lookup.lookup(&self.domain)))
            .unwrap_or_else(|_| {
                tracing::error!(domain = %self.domain, "lookup panicked");
                Err(io::Error::other("lookup panicked"))
            })
            .resolution_context(&self.domain)
            .map(AddressList::new);

        match &result {
            Ok(addrs) => {
                tracing::info!(domain = %self.domain, count = addrs.len(), "resolved")
            }
            Err(e) => tracing::error!(domain = %self.domain, error = %e, "failed to resolve"),
        }

        if Self::abandoned(&self.token, &self.lifetime) {
            tracing::debug!(domain = %self.domain, "request canceled during lookup");
            return;
        }

        let ResolveTask {
            domain,
            handler,
            token,
            lifetime,
            context,
            ..
        } = self;

        context.post(Box::new(move || {
            if Self::abandoned(&token, &lifetime) {
                tracing::debug!(domain = %domain, "request canceled before delivery");
                return;
            }
            handler(result);
        }));
    }
}
