//! cli::commands
//!
//! Command dispatch and handlers.
//!
//! # Architecture
//!
//! Each command handler:
//! 1. Gathers its input (stdin payload or argument list)
//! 2. Calls the hook layer to run enforcement
//! 3. Prints the outcome and returns the exit code
//!
//! Handlers never decide enforcement semantics themselves; that lives in
//! [`crate::core`] behind the hook layer.

mod check;
mod completion;
mod pre_push;

// Re-export command functions for testing and direct invocation
pub use check::check;
pub use completion::completion;
pub use pre_push::pre_push;

use std::process::ExitCode;

use crate::cli::args::Command;
use crate::hook::Context;
use anyhow::Result;

/// Dispatch a command to its handler.
pub fn dispatch(command: Command, ctx: &Context) -> Result<ExitCode> {
    match command {
        Command::PrePush { remote, url } => {
            pre_push(ctx, remote.as_deref(), url.as_deref())
        }
        Command::Check { names } => check(ctx, &names),
        Command::Completion { shell } => {
            completion(shell)?;
            Ok(ExitCode::SUCCESS)
        }
    }
}
