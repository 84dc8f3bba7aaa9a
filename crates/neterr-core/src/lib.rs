pub mod config;
pub mod logging;

pub mod retry;

pub use retry::{classify, is_immediately_retryable, ClassifiedError, ErrorKind, TransportFailure};
