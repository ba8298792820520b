use std::{io, sync::Arc};
use thiserror::Error;

/// `getaddrinfo` and friends report an aborted lookup as `ECANCELED`.
#[cfg(target_os = "linux")]
const ECANCELED: i32 = 125;
#[cfg(any(target_os = "macos", target_os = "ios", target_os = "freebsd"))]
const ECANCELED: i32 = 89;
#[cfg(windows)]
const ECANCELED: i32 = 995; // ERROR_OPERATION_ABORTED
#[cfg(not(any(
    target_os = "linux",
    target_os = "macos",
    target_os = "ios",
    target_os = "freebsd",
    windows
)))]
const ECANCELED: i32 = 125;

#[derive(Debug, Error, Clone)]
pub enum NetError {
    #[error("Operation canceled")]
    Canceled,
    #[error("Invalid argument")]
    InvalidArgument,
    #[error("Insufficient resources")]
    InsufficientResources,
    #[error("Failed to resolve {domain}: {source}")]
    NameResolutionFailed {
        domain: String,
        #[source]
        source: Arc<io::Error>,
    },
}

impl NetError {
    pub fn as_i32(&self) -> i32 {
        match self {
            NetError::Canceled => -3,
            NetError::InvalidArgument => -4,
            NetError::InsufficientResources => -12,
            NetError::NameResolutionFailed { .. } => -137,
        }
    }

    /// Builds the error for a failed lookup of `domain`.
    ///
    /// A native "operation aborted" is reported as [`NetError::Canceled`];
    /// everything else is carried through unchanged.
    pub fn resolution_failed(domain: &str, error: io::Error) -> Self {
        if is_aborted(&error) {
            return NetError::Canceled;
        }
        NetError::NameResolutionFailed {
            domain: domain.to_string(),
            source: Arc::new(error),
        }
    }

    /// OS error code of the underlying native failure, if any.
    pub fn raw_os_error(&self) -> Option<i32> {
        match self {
            NetError::NameResolutionFailed { source, .. } => source.raw_os_error(),
            _ => None,
        }
    }

    /// Kind of the underlying native failure, if any.
    pub fn io_kind(&self) -> Option<io::ErrorKind> {
        match self {
            NetError::NameResolutionFailed { source, .. } => Some(source.kind()),
            _ => None,
        }
    }

    pub fn is_canceled(&self) -> bool {
        matches!(self, NetError::Canceled)
    }
}

impl PartialEq for NetError {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (
                NetError::NameResolutionFailed { domain: a, source: sa },
                NetError::NameResolutionFailed { domain: b, source: sb },
            ) => a == b && sa.kind() == sb.kind() && sa.raw_os_error() == sb.raw_os_error(),
            _ => self.as_i32() == other.as_i32(),
        }
    }
}

impl Eq for NetError {}

/// Numeric code of a resolve outcome; `0` is success.
pub fn net_error_code<T>(result: &Result<T, NetError>) -> i32 {
    match result {
        Ok(_) => 0,
        Err(e) => e.as_i32(),
    }
}

fn is_aborted(error: &io::Error) -> bool {
    error.kind() == io::ErrorKind::Interrupted || error.raw_os_error() == Some(ECANCELED)
}
