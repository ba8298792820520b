//! Ergonomic error context helpers.
//!
//! Converts IO errors coming out of the blocking lookup into
//! context-rich `NetError` values.

use crate::base::neterror::NetError;
use std::io;

/// Extension trait for adding context to IO Results.
pub trait IoResultExt<T> {
    /// Add DNS resolution context to an IO error.
    ///
    /// # Example
    /// ```ignore
    /// use sysresolve::base::context::IoResultExt;
    ///
    /// let addrs = lookup.lookup("example.com").resolution_context("example.com")?;
    /// // Error: "Failed to resolve example.com: no such host"
    /// ```
    fn resolution_context(self, domain: &str) -> Result<T, NetError>;
}

impl<T> IoResultExt<T> for Result<T, io::Error> {
    fn resolution_context(self, domain: &str) -> Result<T, NetError> {
        self.map_err(|e| NetError::resolution_failed(domain, e))
    }
}
