//! Classified request error: stable kind plus diagnostics.

use super::classify::is_immediately_retryable;
use super::failure::Cause;
use super::kind::ErrorKind;
use serde::Serialize;
use std::error::Error as StdError;
use std::fmt;

/// Internal code used for every failure that did not come from the network.
pub const LISTENER_EXCEPTION_INTERNAL_CODE: i32 = 0;

/// Error returned for a failed request, after classification.
///
/// Immutable once built. Clones share the same cause.
#[derive(Debug, Clone)]
pub struct ClassifiedError {
    pub(super) kind: ErrorKind,
    pub(super) internal_code: i32,
    pub(super) message: String,
    pub(super) cause: Option<Cause>,
    pub(super) quic_detailed_error_code: Option<i32>,
}

impl ClassifiedError {
    pub fn kind(&self) -> ErrorKind {
        self.kind
    }

    /// Transport-internal code. More specific than [`kind`](Self::kind) but
    /// not stable across versions; use it for diagnostics only.
    pub fn internal_code(&self) -> i32 {
        self.internal_code
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    pub fn cause(&self) -> Option<&Cause> {
        self.cause.as_ref()
    }

    pub fn quic_detailed_error_code(&self) -> Option<i32> {
        self.quic_detailed_error_code
    }

    /// Whether retrying the same request right away might succeed.
    pub fn is_immediately_retryable(&self) -> bool {
        is_immediately_retryable(self.kind)
    }

    /// Serializable snapshot, with the cause chain flattened to strings.
    pub fn report(&self) -> ClassificationReport {
        let mut cause_chain = Vec::new();
        let mut next: Option<&(dyn StdError + 'static)> = self.source();
        while let Some(err) = next {
            cause_chain.push(err.to_string());
            next = err.source();
        }
        ClassificationReport {
            kind: self.kind,
            code: self.kind.code(),
            internal_code: self.internal_code,
            message: self.message.clone(),
            quic_detailed_error_code: self.quic_detailed_error_code,
            cause_chain,
            immediately_retryable: self.is_immediately_retryable(),
        }
    }
}

impl fmt::Display for ClassifiedError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} (internal code {}): {}",
            self.kind, self.internal_code, self.message
        )
    }
}

impl StdError for ClassifiedError {
    fn source(&self) -> Option<&(dyn StdError + 'static)> {
        self.cause
            .as_deref()
            .map(|c| c as &(dyn StdError + 'static))
    }
}

/// Flat view of a [`ClassifiedError`] for logs and JSON output.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ClassificationReport {
    pub kind: ErrorKind,
    pub code: i32,
    pub internal_code: i32,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub quic_detailed_error_code: Option<i32>,
    pub cause_chain: Vec<String>,
    pub immediately_retryable: bool,
}
