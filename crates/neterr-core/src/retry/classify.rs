//! Classify transport failures and decide immediate-retry eligibility.

use super::error::{ClassifiedError, LISTENER_EXCEPTION_INTERNAL_CODE};
use super::failure::TransportFailure;
use super::kind::ErrorKind;
use super::net_error;
use std::io;

/// Turn a transport failure into a [`ClassifiedError`].
///
/// Network failures keep their kind and internal code verbatim. Anything
/// else is attributed to caller code (`ListenerExceptionThrown`, internal
/// code 0). Message and cause are carried over in both cases.
pub fn classify(failure: &TransportFailure) -> ClassifiedError {
    match failure {
        TransportFailure::Network(n) => ClassifiedError {
            kind: n.kind,
            internal_code: n.internal_code,
            message: n.message.clone(),
            cause: n.cause.clone(),
            quic_detailed_error_code: n.quic_detailed_error_code,
        },
        TransportFailure::Callback { message, cause } => ClassifiedError {
            kind: ErrorKind::ListenerExceptionThrown,
            internal_code: LISTENER_EXCEPTION_INTERNAL_CODE,
            message: message.clone(),
            cause: cause.clone(),
            quic_detailed_error_code: None,
        },
    }
}

/// Whether the same request, issued again right away, might succeed.
///
/// True only for transient conditions: a new network path, timing jitter,
/// or a severed connection. Disconnection and DNS failures should wait for
/// connectivity to change instead; the remaining kinds are never retried
/// automatically.
pub fn is_immediately_retryable(kind: ErrorKind) -> bool {
    match kind {
        ErrorKind::NetworkChanged
        | ErrorKind::TimedOut
        | ErrorKind::ConnectionClosed
        | ErrorKind::ConnectionTimedOut
        | ErrorKind::ConnectionReset => true,
        ErrorKind::ListenerExceptionThrown
        | ErrorKind::HostnameNotResolved
        | ErrorKind::InternetDisconnected
        | ErrorKind::ConnectionRefused
        | ErrorKind::AddressUnreachable
        | ErrorKind::QuicProtocolFailed
        | ErrorKind::Other => false,
    }
}

/// Same decision for a raw public code. Unknown codes are never retryable.
pub fn is_immediately_retryable_code(code: i32) -> bool {
    match ErrorKind::from_code(code) {
        Some(kind) => is_immediately_retryable(kind),
        None => false,
    }
}

/// Map an I/O error from a socket into a kind and transport-internal code.
///
/// The io kind picks the internal code; the public kind then follows the
/// transport's own code table, so the pair is always one the transport
/// could report.
pub fn classify_io_error(e: &io::Error) -> (ErrorKind, i32) {
    let code = match e.kind() {
        io::ErrorKind::ConnectionRefused => net_error::ERR_CONNECTION_REFUSED,
        io::ErrorKind::ConnectionReset | io::ErrorKind::BrokenPipe => {
            net_error::ERR_CONNECTION_RESET
        }
        io::ErrorKind::ConnectionAborted => net_error::ERR_CONNECTION_ABORTED,
        io::ErrorKind::UnexpectedEof => net_error::ERR_EMPTY_RESPONSE,
        io::ErrorKind::NotConnected => net_error::ERR_CONNECTION_CLOSED,
        io::ErrorKind::TimedOut | io::ErrorKind::WouldBlock => net_error::ERR_TIMED_OUT,
        io::ErrorKind::NetworkUnreachable | io::ErrorKind::HostUnreachable => {
            net_error::ERR_ADDRESS_UNREACHABLE
        }
        io::ErrorKind::NetworkDown => net_error::ERR_INTERNET_DISCONNECTED,
        io::ErrorKind::AddrNotAvailable => net_error::ERR_ADDRESS_INVALID,
        _ => net_error::ERR_FAILED,
    };
    (net_error::error_kind(code), code)
}
