//! Base types and error handling.
//!
//! - [`NetError`](neterror::NetError): unified error taxonomy delivered to resolve handlers
//! - [`CancelToken`](cancelable::CancelToken): shared cancellation flag

pub mod cancelable;
pub mod context;
pub mod neterror;
