//! Failure values handed to the classifier by the transport layer.

use super::classify::classify_io_error;
use super::kind::ErrorKind;
use std::error::Error as StdError;
use std::io;
use std::sync::Arc;

/// Shared handle to the error that caused a failure.
///
/// Reference-counted so a classified error can be cloned and passed across
/// threads without losing identity of the original cause.
pub type Cause = Arc<dyn StdError + Send + Sync + 'static>;

/// Network-level failure reported by the transport itself.
#[derive(Debug, Clone)]
pub struct NetworkFailure {
    pub kind: ErrorKind,
    /// Transport-internal code; see [`super::net_error`].
    pub internal_code: i32,
    pub message: String,
    pub cause: Option<Cause>,
    /// Only meaningful for [`ErrorKind::QuicProtocolFailed`].
    pub quic_detailed_error_code: Option<i32>,
}

impl NetworkFailure {
    /// Failure with no cause and no QUIC detail.
    pub fn new(kind: ErrorKind, internal_code: i32, message: impl Into<String>) -> Self {
        Self {
            kind,
            internal_code,
            message: message.into(),
            cause: None,
            quic_detailed_error_code: None,
        }
    }

    /// Attach the error that caused this failure.
    pub fn with_cause(mut self, cause: Cause) -> Self {
        self.cause = Some(cause);
        self
    }

    /// Attach the QUIC detailed error code.
    pub fn with_quic_detailed_error_code(mut self, code: i32) -> Self {
        self.quic_detailed_error_code = Some(code);
        self
    }
}

/// A failure surfaced while running a request.
///
/// Either the transport reports a network error with its own kind and code,
/// or something else failed (typically a user callback) and only the
/// message and cause are known.
#[derive(Debug, Clone)]
pub enum TransportFailure {
    Network(NetworkFailure),
    Callback {
        message: String,
        cause: Option<Cause>,
    },
}

impl TransportFailure {
    /// Wrap an error raised by caller-supplied callback code. The error
    /// becomes the cause and its text the message.
    pub fn callback<E>(err: E) -> Self
    where
        E: StdError + Send + Sync + 'static,
    {
        TransportFailure::Callback {
            message: err.to_string(),
            cause: Some(Arc::new(err)),
        }
    }

    /// Network failure from a socket-level I/O error. The error becomes the
    /// cause and its text the message.
    pub fn from_io_error(err: io::Error) -> Self {
        let (kind, internal_code) = classify_io_error(&err);
        let message = err.to_string();
        TransportFailure::Network(
            NetworkFailure::new(kind, internal_code, message).with_cause(Arc::new(err)),
        )
    }

    /// Callback failure that only has a message.
    pub fn callback_message(message: impl Into<String>) -> Self {
        TransportFailure::Callback {
            message: message.into(),
            cause: None,
        }
    }

    pub fn message(&self) -> &str {
        match self {
            TransportFailure::Network(n) => &n.message,
            TransportFailure::Callback { message, .. } => message,
        }
    }

    pub fn cause(&self) -> Option<&Cause> {
        match self {
            TransportFailure::Network(n) => n.cause.as_ref(),
            TransportFailure::Callback { cause, .. } => cause.as_ref(),
        }
    }
}

impl From<io::Error> for TransportFailure {
    fn from(err: io::Error) -> Self {
        TransportFailure::from_io_error(err)
    }
}

impl From<NetworkFailure> for TransportFailure {
    fn from(n: NetworkFailure) -> Self {
        TransportFailure::Network(n)
    }
}
