//! `neterr classify` – classify a described failure.

use anyhow::{Context, Result};
use clap::Args;
use neterr_core::retry::{
    classify, net_error, ClassifiedError, ErrorKind, NetworkFailure, TransportFailure,
};
use std::fmt::Write as _;

#[derive(Debug, Clone, Args)]
pub struct ClassifyArgs {
    /// Failure message.
    pub message: String,

    /// Public error code (0-11) reported by the transport. Without it the
    /// failure is treated as coming from callback code.
    #[arg(long, allow_negative_numbers = true)]
    pub code: Option<i32>,

    /// Transport-internal code (defaults to ERR_FAILED).
    #[arg(long, requires = "code", allow_negative_numbers = true)]
    pub internal_code: Option<i32>,

    /// QUIC detailed error code, for QUIC protocol failures.
    #[arg(long, requires = "code", allow_negative_numbers = true)]
    pub quic_detailed_code: Option<i32>,

    /// Print the classification as JSON.
    #[arg(long)]
    pub json: bool,
}

pub(crate) fn build_failure(args: &ClassifyArgs) -> Result<TransportFailure> {
    let Some(code) = args.code else {
        return Ok(TransportFailure::callback_message(args.message.clone()));
    };
    let kind = ErrorKind::try_from(code).context("classify --code")?;
    let mut failure = NetworkFailure::new(
        kind,
        args.internal_code.unwrap_or(net_error::ERR_FAILED),
        args.message.clone(),
    );
    if let Some(detail) = args.quic_detailed_code {
        failure = failure.with_quic_detailed_error_code(detail);
    }
    Ok(failure.into())
}

pub(crate) fn render_text(err: &ClassifiedError) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "kind:          {} ({})", err.kind(), err.kind().code());
    let _ = writeln!(out, "internal code: {}", err.internal_code());
    if let Some(detail) = err.quic_detailed_error_code() {
        let _ = writeln!(out, "quic detail:   {}", detail);
    }
    let _ = writeln!(out, "message:       {}", err.message());
    let retry = if err.is_immediately_retryable() { "yes" } else { "no" };
    let _ = writeln!(out, "retry now:     {}", retry);
    out
}

pub fn run_classify(args: &ClassifyArgs) -> Result<()> {
    let failure = build_failure(args)?;
    let classified = classify(&failure);
    tracing::debug!(
        kind = %classified.kind(),
        internal_code = classified.internal_code(),
        "classified failure"
    );

    if args.json {
        let json = serde_json::to_string_pretty(&classified.report())
            .context("serialize classification")?;
        println!("{}", json);
    } else {
        print!("{}", render_text(&classified));
    }
    Ok(())
}
