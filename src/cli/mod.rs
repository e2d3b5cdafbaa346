//! cli
//!
//! Command-line interface layer for refguard.
//!
//! # Responsibilities
//!
//! - Parse command-line arguments and global flags
//! - Read the stdin payload for the pre-push hook
//! - Delegate to command handlers
//!
//! # Architecture
//!
//! The CLI layer is thin. It parses arguments via clap and dispatches to
//! the [`crate::hook`] layer for enforcement. Exit codes are returned to
//! `main.rs` rather than calling `std::process::exit` from handlers.

pub mod args;
pub mod commands;

pub use args::Cli;

use std::process::ExitCode;

use crate::hook;
use anyhow::Result;

/// Run the CLI application.
///
/// This is the main entry point called from `main.rs`. The returned exit
/// code is what git sees: zero accepts the push, non-zero rejects it.
pub fn run() -> Result<ExitCode> {
    let cli = Cli::parse_args();

    let ctx = hook::Context {
        cwd: cli.cwd.clone(),
        debug: cli.debug,
        quiet: cli.quiet,
    };

    commands::dispatch(cli.command, &ctx)
}
