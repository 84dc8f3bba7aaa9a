//! Public error kinds reported for a failed network request.

use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

/// Semantic category of a failed request.
///
/// The discriminants are the stable public codes: callers persist, log and
/// compare them across versions, so variants must never be renumbered.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
#[repr(i32)]
pub enum ErrorKind {
    /// Failure raised by caller-supplied callback or upload code; the
    /// original error is kept as the cause.
    ListenerExceptionThrown = 0,
    /// The host could not be resolved to an IP address.
    HostnameNotResolved = 1,
    /// The device was not connected to any network.
    InternetDisconnected = 2,
    /// The network configuration changed while the request was in flight.
    NetworkChanged = 3,
    /// A timeout expired. Connect timeouts use `ConnectionTimedOut`.
    TimedOut = 4,
    /// The connection was closed unexpectedly.
    ConnectionClosed = 5,
    /// The connection attempt timed out.
    ConnectionTimedOut = 6,
    /// The connection attempt was refused.
    ConnectionRefused = 7,
    /// The connection was unexpectedly reset.
    ConnectionReset = 8,
    /// No route to the host or network.
    AddressUnreachable = 9,
    /// QUIC protocol error; may carry a QUIC detailed error code.
    QuicProtocolFailed = 10,
    /// Anything else. The internal code gives the specific cause.
    Other = 11,
}

/// A raw code outside the range of known kinds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("unknown network error code: {0}")]
pub struct UnknownErrorCode(pub i32);

impl ErrorKind {
    /// Every kind, in code order.
    pub const ALL: [ErrorKind; 12] = [
        ErrorKind::ListenerExceptionThrown,
        ErrorKind::HostnameNotResolved,
        ErrorKind::InternetDisconnected,
        ErrorKind::NetworkChanged,
        ErrorKind::TimedOut,
        ErrorKind::ConnectionClosed,
        ErrorKind::ConnectionTimedOut,
        ErrorKind::ConnectionRefused,
        ErrorKind::ConnectionReset,
        ErrorKind::AddressUnreachable,
        ErrorKind::QuicProtocolFailed,
        ErrorKind::Other,
    ];

    /// Stable public code of this kind.
    pub const fn code(self) -> i32 {
        self as i32
    }

    /// Look up a kind by its public code.
    pub fn from_code(code: i32) -> Option<ErrorKind> {
        usize::try_from(code)
            .ok()
            .and_then(|idx| Self::ALL.get(idx).copied())
    }

    /// Stable name, also used for serde and `Display`.
    pub const fn as_str(self) -> &'static str {
        match self {
            ErrorKind::ListenerExceptionThrown => "LISTENER_EXCEPTION_THROWN",
            ErrorKind::HostnameNotResolved => "HOSTNAME_NOT_RESOLVED",
            ErrorKind::InternetDisconnected => "INTERNET_DISCONNECTED",
            ErrorKind::NetworkChanged => "NETWORK_CHANGED",
            ErrorKind::TimedOut => "TIMED_OUT",
            ErrorKind::ConnectionClosed => "CONNECTION_CLOSED",
            ErrorKind::ConnectionTimedOut => "CONNECTION_TIMED_OUT",
            ErrorKind::ConnectionRefused => "CONNECTION_REFUSED",
            ErrorKind::ConnectionReset => "CONNECTION_RESET",
            ErrorKind::AddressUnreachable => "ADDRESS_UNREACHABLE",
            ErrorKind::QuicProtocolFailed => "QUIC_PROTOCOL_FAILED",
            ErrorKind::Other => "OTHER",
        }
    }

    /// Durable conditions: retrying before connectivity comes back hits the
    /// same failure again.
    pub const fn requires_connectivity_change(self) -> bool {
        matches!(
            self,
            ErrorKind::InternetDisconnected | ErrorKind::HostnameNotResolved
        )
    }
}

impl TryFrom<i32> for ErrorKind {
    type Error = UnknownErrorCode;

    fn try_from(code: i32) -> Result<Self, Self::Error> {
        ErrorKind::from_code(code).ok_or(UnknownErrorCode(code))
    }
}

impl From<ErrorKind> for i32 {
    fn from(kind: ErrorKind) -> i32 {
        kind.code()
    }
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn codes_are_stable() {
        assert_eq!(ErrorKind::ListenerExceptionThrown.code(), 0);
        assert_eq!(ErrorKind::HostnameNotResolved.code(), 1);
        assert_eq!(ErrorKind::InternetDisconnected.code(), 2);
        assert_eq!(ErrorKind::NetworkChanged.code(), 3);
        assert_eq!(ErrorKind::TimedOut.code(), 4);
        assert_eq!(ErrorKind::ConnectionClosed.code(), 5);
        assert_eq!(ErrorKind::ConnectionTimedOut.code(), 6);
        assert_eq!(ErrorKind::ConnectionRefused.code(), 7);
        assert_eq!(ErrorKind::ConnectionReset.code(), 8);
        assert_eq!(ErrorKind::AddressUnreachable.code(), 9);
        assert_eq!(ErrorKind::QuicProtocolFailed.code(), 10);
        assert_eq!(ErrorKind::Other.code(), 11);
    }

    #[test]
    fn all_is_in_code_order() {
        for (idx, kind) in ErrorKind::ALL.iter().enumerate() {
            assert_eq!(kind.code() as usize, idx);
            assert_eq!(ErrorKind::from_code(kind.code()), Some(*kind));
        }
    }

    #[test]
    fn out_of_range_codes_are_rejected() {
        assert_eq!(ErrorKind::from_code(-1), None);
        assert_eq!(ErrorKind::from_code(12), None);
        assert_eq!(ErrorKind::try_from(99), Err(UnknownErrorCode(99)));
        assert_eq!(
            UnknownErrorCode(99).to_string(),
            "unknown network error code: 99"
        );
    }

    #[test]
    fn display_uses_stable_name() {
        assert_eq!(ErrorKind::ConnectionReset.to_string(), "CONNECTION_RESET");
        assert_eq!(
            ErrorKind::ListenerExceptionThrown.to_string(),
            "LISTENER_EXCEPTION_THROWN"
        );
    }

    #[test]
    fn serde_name_matches_as_str() {
        for kind in ErrorKind::ALL {
            let json = serde_json::to_string(&kind).unwrap();
            assert_eq!(json, format!("\"{}\"", kind.as_str()));
            let back: ErrorKind = serde_json::from_str(&json).unwrap();
            assert_eq!(back, kind);
        }
    }

    #[test]
    fn only_disconnect_and_dns_wait_for_connectivity() {
        let waiting: Vec<ErrorKind> = ErrorKind::ALL
            .into_iter()
            .filter(|k| k.requires_connectivity_change())
            .collect();
        assert_eq!(
            waiting,
            vec![ErrorKind::HostnameNotResolved, ErrorKind::InternetDisconnected]
        );
    }
}
