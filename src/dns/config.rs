//! System resolver configuration.

use crate::base::neterror::NetError;
use serde::{Deserialize, Serialize};

/// Worker pool settings for [`SystemResolver`](super::SystemResolver).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ResolverConfig {
    /// Number of worker threads running blocking lookups
    pub thread_count: usize,
    /// Worker thread name prefix; threads are named `{prefix}-{index}`
    pub thread_name: String,
}

impl Default for ResolverConfig {
    fn default() -> Self {
        Self {
            thread_count: 4,
            thread_name: "sysresolve-worker".to_string(),
        }
    }
}

impl ResolverConfig {
    /// Create a new config with defaults.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set worker thread count.
    pub fn thread_count(mut self, count: usize) -> Self {
        self.thread_count = count;
        self
    }

    /// Set worker thread name prefix.
    pub fn thread_name(mut self, name: impl Into<String>) -> Self {
        self.thread_name = name.into();
        self
    }

    /// Parse a config from JSON. Missing fields take their defaults.
    pub fn from_json(json: &str) -> Result<Self, NetError> {
        let config: Self = serde_json::from_str(json).map_err(|e| {
            tracing::warn!(error = %e, "invalid resolver config");
            NetError::InvalidArgument
        })?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), NetError> {
        if self.thread_count == 0 {
            return Err(NetError::InvalidArgument);
        }
        Ok(())
    }
}
