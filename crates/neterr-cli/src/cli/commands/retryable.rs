//! `neterr retryable` – immediate-retry eligibility of a public code.

use anyhow::Result;
use neterr_core::retry::{is_immediately_retryable_code, ErrorKind};

pub fn run_retryable(code: i32) -> Result<()> {
    if ErrorKind::from_code(code).is_none() {
        tracing::warn!("unknown error code {}; treating as not retryable", code);
    }
    println!("{}", is_immediately_retryable_code(code));
    Ok(())
}
