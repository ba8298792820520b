//! Blocking lookup primitive.
//!
//! The system resolver delegates the actual name lookup to a [`HostLookup`].
//! The default, [`SystemLookup`], uses the operating system's `getaddrinfo`
//! and therefore respects /etc/hosts, /etc/resolv.conf, nsswitch and so on.
//! Lookups block the calling thread; they are only ever run on the resolver's
//! worker threads.

use std::{
    io,
    net::{IpAddr, ToSocketAddrs},
};

/// A synchronous "domain name → addresses" call.
pub trait HostLookup: Send + Sync {
    /// Resolves `domain`, blocking until the answer or an error is available.
    fn lookup(&self, domain: &str) -> io::Result<Vec<IpAddr>>;
}

/// `getaddrinfo` via the standard library.
#[derive(Clone, Debug, Default)]
pub struct SystemLookup;

impl SystemLookup {
    pub fn new() -> Self {
        Self
    }
}

impl HostLookup for SystemLookup {
    fn lookup(&self, domain: &str) -> io::Result<Vec<IpAddr>> {
        tracing::trace!(domain = %domain, "calling getaddrinfo");
        let addrs = (domain, 0u16).to_socket_addrs()?;
        Ok(addrs.map(|addr| addr.ip()).collect())
    }
}
