//! Transport-internal error codes (net error list values).
//!
//! These are what adapters put into `internal_code`. They are diagnostic
//! only and may change between transport versions.

use super::kind::ErrorKind;

pub const ERR_FAILED: i32 = -2;
pub const ERR_TIMED_OUT: i32 = -7;
pub const ERR_NETWORK_CHANGED: i32 = -21;
pub const ERR_CONNECTION_CLOSED: i32 = -100;
pub const ERR_CONNECTION_RESET: i32 = -101;
pub const ERR_CONNECTION_REFUSED: i32 = -102;
pub const ERR_CONNECTION_ABORTED: i32 = -103;
pub const ERR_NAME_NOT_RESOLVED: i32 = -105;
pub const ERR_INTERNET_DISCONNECTED: i32 = -106;
pub const ERR_ADDRESS_INVALID: i32 = -108;
pub const ERR_ADDRESS_UNREACHABLE: i32 = -109;
pub const ERR_CONNECTION_TIMED_OUT: i32 = -118;
pub const ERR_EMPTY_RESPONSE: i32 = -324;
pub const ERR_QUIC_PROTOCOL_ERROR: i32 = -356;

/// Public kind the transport reports for an internal code.
///
/// Codes without a dedicated kind (aborted connections, empty responses,
/// invalid addresses, ...) are `Other`.
pub fn error_kind(code: i32) -> ErrorKind {
    match code {
        ERR_NAME_NOT_RESOLVED => ErrorKind::HostnameNotResolved,
        ERR_INTERNET_DISCONNECTED => ErrorKind::InternetDisconnected,
        ERR_NETWORK_CHANGED => ErrorKind::NetworkChanged,
        ERR_TIMED_OUT => ErrorKind::TimedOut,
        ERR_CONNECTION_CLOSED => ErrorKind::ConnectionClosed,
        ERR_CONNECTION_TIMED_OUT => ErrorKind::ConnectionTimedOut,
        ERR_CONNECTION_REFUSED => ErrorKind::ConnectionRefused,
        ERR_CONNECTION_RESET => ErrorKind::ConnectionReset,
        ERR_ADDRESS_UNREACHABLE => ErrorKind::AddressUnreachable,
        ERR_QUIC_PROTOCOL_ERROR => ErrorKind::QuicProtocolFailed,
        _ => ErrorKind::Other,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn dedicated_codes_map_to_their_kind() {
        let cases = [
            (ERR_NAME_NOT_RESOLVED, ErrorKind::HostnameNotResolved),
            (ERR_INTERNET_DISCONNECTED, ErrorKind::InternetDisconnected),
            (ERR_NETWORK_CHANGED, ErrorKind::NetworkChanged),
            (ERR_TIMED_OUT, ErrorKind::TimedOut),
            (ERR_CONNECTION_CLOSED, ErrorKind::ConnectionClosed),
            (ERR_CONNECTION_TIMED_OUT, ErrorKind::ConnectionTimedOut),
            (ERR_CONNECTION_REFUSED, ErrorKind::ConnectionRefused),
            (ERR_CONNECTION_RESET, ErrorKind::ConnectionReset),
            (ERR_ADDRESS_UNREACHABLE, ErrorKind::AddressUnreachable),
            (ERR_QUIC_PROTOCOL_ERROR, ErrorKind::QuicProtocolFailed),
        ];
        for (code, kind) in cases {
            assert_eq!(error_kind(code), kind, "code {code}");
        }
    }

    #[test]
    fn remaining_codes_are_other() {
        for code in [
            ERR_FAILED,
            ERR_CONNECTION_ABORTED,
            ERR_ADDRESS_INVALID,
            ERR_EMPTY_RESPONSE,
            0,
            -9999,
        ] {
            assert_eq!(error_kind(code), ErrorKind::Other, "code {code}");
        }
    }
}
