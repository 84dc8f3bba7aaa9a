use super::classify::is_immediately_retryable;
use super::kind::ErrorKind;
use crate::config::RetryConfig;

/// What a retry layer should do after a classified failure.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RetryAdvice {
    /// Issue the same request again now.
    RetryNow,
    /// Hold the request until the device reports a connectivity change.
    AwaitConnectivity,
    /// Surface the failure to the caller.
    GiveUp,
}

/// Bounds immediate retries on top of the per-kind eligibility table.
///
/// Only advises; sleeping, timers and connectivity monitoring belong to the
/// caller.
#[derive(Debug, Clone, Copy)]
pub struct ImmediateRetryPolicy {
    /// Maximum number of attempts (including the first) while the failure
    /// stays immediately retryable.
    pub max_immediate_attempts: u32,
    /// Advise `AwaitConnectivity` for disconnection and DNS failures instead
    /// of giving up.
    pub await_connectivity: bool,
}

impl Default for ImmediateRetryPolicy {
    fn default() -> Self {
        Self {
            max_immediate_attempts: 3,
            await_connectivity: true,
        }
    }
}

impl From<&RetryConfig> for ImmediateRetryPolicy {
    fn from(cfg: &RetryConfig) -> Self {
        Self {
            max_immediate_attempts: cfg.max_immediate_attempts,
            await_connectivity: cfg.await_connectivity,
        }
    }
}

impl ImmediateRetryPolicy {
    /// Advice after `attempt` (1-based) failed with `kind`.
    pub fn decide(&self, attempt: u32, kind: ErrorKind) -> RetryAdvice {
        if is_immediately_retryable(kind) {
            if attempt < self.max_immediate_attempts {
                return RetryAdvice::RetryNow;
            }
            return RetryAdvice::GiveUp;
        }
        if self.await_connectivity && kind.requires_connectivity_change() {
            return RetryAdvice::AwaitConnectivity;
        }
        RetryAdvice::GiveUp
    }
}
