//! CLI for inspecting the neterr error taxonomy.

mod commands;

use anyhow::Result;
use clap::{Parser, Subcommand};
use clap_complete::Shell;
use neterr_core::config;
use std::path::PathBuf;

use commands::{run_advise, run_classify, run_completions, run_kinds, run_retryable, ClassifyArgs};

/// Top-level CLI for neterr.
#[derive(Debug, Parser)]
#[command(name = "neterr")]
#[command(about = "neterr: classify network request failures and judge retry eligibility", long_about = None)]
pub struct Cli {
    /// Read configuration from this file instead of ~/.config/neterr/config.toml.
    #[arg(long, global = true, value_name = "PATH")]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: CliCommand,
}

#[derive(Debug, Subcommand)]
pub enum CliCommand {
    /// List every error kind with its code and immediate-retry eligibility.
    Kinds,

    /// Classify a failure and print the result.
    Classify(ClassifyArgs),

    /// Print whether a public error code is immediately retryable.
    Retryable {
        /// Public error code (0-11). Unknown codes are never retryable.
        #[arg(allow_negative_numbers = true)]
        code: i32,
    },

    /// Print retry advice for a public error code under the configured policy.
    Advise {
        /// Public error code (0-11).
        #[arg(allow_negative_numbers = true)]
        code: i32,
        /// Attempt that just failed (1 = first).
        #[arg(
            long,
            default_value = "1",
            value_name = "N",
            value_parser = clap::value_parser!(u32).range(1..)
        )]
        attempt: u32,
    },

    /// Generate shell completions.
    Completions {
        /// Target shell.
        shell: Shell,
    },
}

impl CliCommand {
    pub fn run_from_args() -> Result<()> {
        let cli = Cli::parse();

        match cli.command {
            CliCommand::Kinds => run_kinds()?,
            CliCommand::Classify(args) => run_classify(&args)?,
            CliCommand::Retryable { code } => run_retryable(code)?,
            CliCommand::Advise { code, attempt } => {
                let cfg = match &cli.config {
                    Some(path) => config::load_from(path)?,
                    None => config::load_or_init()?,
                };
                tracing::debug!("loaded config: {:?}", cfg);
                run_advise(&cfg, code, attempt)?;
            }
            CliCommand::Completions { shell } => run_completions(shell)?,
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests;
