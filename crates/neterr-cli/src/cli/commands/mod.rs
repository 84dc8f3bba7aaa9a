//! CLI command handlers, one file per command.

mod advise;
mod classify;
mod completions;
mod kinds;
mod retryable;

pub use advise::run_advise;
pub use classify::{run_classify, ClassifyArgs};
pub use completions::run_completions;
pub use kinds::run_kinds;
pub use retryable::run_retryable;

#[cfg(test)]
pub(crate) use advise::advice_label;
#[cfg(test)]
pub(crate) use classify::{build_failure, render_text};
#[cfg(test)]
pub(crate) use kinds::render_kinds;
