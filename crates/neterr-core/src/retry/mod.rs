//! Request error taxonomy and retry eligibility.
//!
//! The transport reports a [`TransportFailure`]; [`classify`] turns it into a
//! [`ClassifiedError`] with a stable [`ErrorKind`], and
//! [`is_immediately_retryable`] tells a retry layer whether reissuing the
//! request right away is worthwhile. Everything here is pure and thread safe.

mod classify;
mod error;
mod failure;
mod kind;
pub mod net_error;
mod policy;

pub use classify::{
    classify, classify_io_error, is_immediately_retryable, is_immediately_retryable_code,
};
pub use error::{ClassificationReport, ClassifiedError, LISTENER_EXCEPTION_INTERNAL_CODE};
pub use failure::{Cause, NetworkFailure, TransportFailure};
pub use kind::{ErrorKind, UnknownErrorCode};
pub use policy::{ImmediateRetryPolicy, RetryAdvice};
