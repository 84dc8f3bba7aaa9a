//! `neterr kinds` – list the error taxonomy.

use anyhow::Result;
use neterr_core::retry::{is_immediately_retryable, ErrorKind};
use std::fmt::Write as _;

pub(crate) fn render_kinds() -> String {
    let mut out = format!("{:<5} {:<26} {}\n", "CODE", "KIND", "RETRY NOW");
    for kind in ErrorKind::ALL {
        let retry = if is_immediately_retryable(kind) { "yes" } else { "no" };
        let _ = writeln!(out, "{:<5} {:<26} {}", kind.code(), kind.as_str(), retry);
    }
    out
}

pub fn run_kinds() -> Result<()> {
    print!("{}", render_kinds());
    Ok(())
}
