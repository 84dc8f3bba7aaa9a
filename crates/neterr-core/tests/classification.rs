//! End-to-end classification through the public API.

use neterr_core::retry::{
    classify, is_immediately_retryable, Cause, ErrorKind, ImmediateRetryPolicy, NetworkFailure,
    RetryAdvice, TransportFailure,
};
use std::error::Error as _;
use std::fmt;
use std::io;
use std::sync::Arc;

#[derive(Debug)]
struct CallbackPanicked;

impl fmt::Display for CallbackPanicked {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("callback threw")
    }
}

impl std::error::Error for CallbackPanicked {}

#[test]
fn connection_reset_is_preserved_and_retryable() {
    let failure = TransportFailure::Network(NetworkFailure::new(
        ErrorKind::ConnectionReset,
        42,
        "reset",
    ));

    let classified = classify(&failure);

    assert_eq!(classified.kind(), ErrorKind::ConnectionReset);
    assert_eq!(classified.internal_code(), 42);
    assert_eq!(classified.message(), "reset");
    assert!(is_immediately_retryable(classified.kind()));
    assert!(classified.is_immediately_retryable());
}

#[test]
fn callback_failure_falls_back_to_listener_kind() {
    let failure = TransportFailure::callback(CallbackPanicked);

    let classified = classify(&failure);

    assert_eq!(classified.kind(), ErrorKind::ListenerExceptionThrown);
    assert_eq!(classified.internal_code(), 0);
    assert_eq!(classified.message(), "callback threw");
    assert!(!is_immediately_retryable(classified.kind()));
    assert_eq!(
        classified.source().map(|e| e.to_string()).as_deref(),
        Some("callback threw")
    );
}

#[test]
fn every_network_kind_and_code_survives_classification() {
    for kind in ErrorKind::ALL {
        for internal_code in [i32::MIN, -101, 0, 1, i32::MAX] {
            let classified = classify(&NetworkFailure::new(kind, internal_code, "x").into());
            assert_eq!(classified.kind(), kind);
            assert_eq!(classified.internal_code(), internal_code);
        }
    }
}

#[test]
fn cause_identity_is_kept_in_both_branches() {
    let cause: Cause = Arc::new(io::Error::new(io::ErrorKind::TimedOut, "read timed out"));

    let network = classify(
        &NetworkFailure::new(ErrorKind::TimedOut, -7, "read timed out")
            .with_cause(cause.clone())
            .into(),
    );
    let callback = classify(&TransportFailure::Callback {
        message: "wrapped".to_string(),
        cause: Some(cause.clone()),
    });

    assert!(Arc::ptr_eq(network.cause().unwrap(), &cause));
    assert!(Arc::ptr_eq(callback.cause().unwrap(), &cause));
    assert_eq!(callback.message(), "wrapped");
}

#[test]
fn io_error_flows_into_retry_advice() {
    let failure: TransportFailure =
        io::Error::new(io::ErrorKind::ConnectionReset, "connection reset by peer").into();
    let classified = classify(&failure);
    let policy = ImmediateRetryPolicy::default();

    assert_eq!(classified.kind(), ErrorKind::ConnectionReset);
    assert_eq!(policy.decide(1, classified.kind()), RetryAdvice::RetryNow);

    let refused = classify(&io::Error::from(io::ErrorKind::ConnectionRefused).into());
    assert_eq!(policy.decide(1, refused.kind()), RetryAdvice::GiveUp);
}

fn retryable_table() -> Vec<bool> {
    ErrorKind::ALL
        .iter()
        .map(|k| is_immediately_retryable(*k))
        .collect()
}

#[test]
fn concurrent_callers_agree() {
    let expected = retryable_table();
    let shared = classify(
        &NetworkFailure::new(ErrorKind::NetworkChanged, -21, "network changed").into(),
    );

    std::thread::scope(|s| {
        for _ in 0..8 {
            let shared = shared.clone();
            let expected = &expected;
            s.spawn(move || {
                for _ in 0..1000 {
                    assert_eq!(&retryable_table(), expected);
                    assert!(shared.is_immediately_retryable());
                }
            });
        }
    });
}
