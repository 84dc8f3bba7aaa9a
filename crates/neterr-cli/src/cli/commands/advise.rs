//! `neterr advise` – retry advice under the configured policy.

use anyhow::{Context, Result};
use neterr_core::config::NeterrConfig;
use neterr_core::retry::{ErrorKind, ImmediateRetryPolicy, RetryAdvice};

pub(crate) fn advice_label(advice: RetryAdvice) -> &'static str {
    match advice {
        RetryAdvice::RetryNow => "retry-now",
        RetryAdvice::AwaitConnectivity => "await-connectivity",
        RetryAdvice::GiveUp => "give-up",
    }
}

pub fn run_advise(cfg: &NeterrConfig, code: i32, attempt: u32) -> Result<()> {
    let kind = ErrorKind::try_from(code).context("advise")?;
    let policy = ImmediateRetryPolicy::from(&cfg.retry_or_default());
    let advice = policy.decide(attempt, kind);
    tracing::debug!(%kind, attempt, ?advice, "retry advice");
    println!("{}", advice_label(advice));
    Ok(())
}
