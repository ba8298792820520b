//! Core DNS resolution types and traits.
//!
//! This module defines the `Resolve` trait and supporting types that form
//! the foundation of the resolver abstraction.

use crate::base::cancelable::CancelToken;
use crate::base::neterror::NetError;
use crate::completion::CompletionContext;
use std::{fmt, net::IpAddr, sync::Arc};

/// Addresses returned by a lookup, in the order the system produced them.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct AddressList {
    addrs: Vec<IpAddr>,
}

impl AddressList {
    /// Creates a new `AddressList` from a vector.
    pub fn new(addrs: Vec<IpAddr>) -> Self {
        Self { addrs }
    }

    /// Returns true if no addresses are available.
    pub fn is_empty(&self) -> bool {
        self.addrs.is_empty()
    }

    /// Returns the number of addresses.
    pub fn len(&self) -> usize {
        self.addrs.len()
    }

    pub fn as_slice(&self) -> &[IpAddr] {
        &self.addrs
    }

    pub fn iter(&self) -> std::slice::Iter<'_, IpAddr> {
        self.addrs.iter()
    }

    pub fn into_vec(self) -> Vec<IpAddr> {
        self.addrs
    }
}

impl From<Vec<IpAddr>> for AddressList {
    fn from(addrs: Vec<IpAddr>) -> Self {
        Self::new(addrs)
    }
}

impl FromIterator<IpAddr> for AddressList {
    fn from_iter<I: IntoIterator<Item = IpAddr>>(iter: I) -> Self {
        Self {
            addrs: iter.into_iter().collect(),
        }
    }
}

impl IntoIterator for AddressList {
    type Item = IpAddr;
    type IntoIter = std::vec::IntoIter<IpAddr>;

    fn into_iter(self) -> Self::IntoIter {
        self.addrs.into_iter()
    }
}

impl<'a> IntoIterator for &'a AddressList {
    type Item = &'a IpAddr;
    type IntoIter = std::slice::Iter<'a, IpAddr>;

    fn into_iter(self) -> Self::IntoIter {
        self.addrs.iter()
    }
}

impl fmt::Display for AddressList {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("[")?;
        for (i, addr) in self.addrs.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            write!(f, "{}", addr)?;
        }
        f.write_str("]")
    }
}

/// Which address families the caller would like back.
///
/// Accepted for API compatibility; the system resolver leaves ordering and
/// family selection to the OS.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum AddressPreference {
    #[default]
    Any,
    Ipv4Only,
    Ipv6Only,
    Ipv4OrIpv6,
    Ipv6OrIpv4,
}

/// Result delivered to a resolve handler. `Ok` means no error.
pub type ResolveResult = Result<AddressList, NetError>;

/// Callback receiving the outcome of a single resolve request.
pub type ResolveHandler = Box<dyn FnOnce(ResolveResult) + Send + 'static>;

/// Trait for callback-based, cancelable DNS resolution.
///
/// # Design Notes
///
/// - The returned [`CancelToken`] suppresses the handler when canceled.
/// - The handler runs at most once, on the resolver's completion context.
/// - Takes `&self` so requests can be issued without exclusive access.
pub trait Resolve: Send + Sync {
    /// Starts resolving `domain` and returns a token that cancels the request.
    fn resolve(
        &self,
        domain: &str,
        preference: AddressPreference,
        handler: ResolveHandler,
    ) -> CancelToken;

    /// The context handlers are delivered on.
    fn completion_context(&self) -> &Arc<dyn CompletionContext>;
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::net::{Ipv4Addr, Ipv6Addr};

    #[test]
    fn test_address_list_preserves_order() {
        let list: AddressList = vec![
            IpAddr::V6(Ipv6Addr::LOCALHOST),
            IpAddr::V4(Ipv4Addr::new(1, 2, 3, 4)),
        ]
        .into();

        assert_eq!(list.len(), 2);
        assert!(list.as_slice()[0].is_ipv6());
        assert!(list.as_slice()[1].is_ipv4());
    }

    #[test]
    fn test_address_list_empty() {
        let list = AddressList::default();
        assert!(list.is_empty());
        assert_eq!(list.to_string(), "[]");
    }

    #[test]
    fn test_address_list_display() {
        let list: AddressList = [
            IpAddr::V4(Ipv4Addr::new(10, 0, 0, 1)),
            IpAddr::V4(Ipv4Addr::new(10, 0, 0, 2)),
        ]
        .into_iter()
        .collect();

        assert_eq!(list.to_string(), "[10.0.0.1, 10.0.0.2]");
    }

    #[test]
    fn test_default_preference() {
        assert_eq!(AddressPreference::default(), AddressPreference::Any);
    }
}
