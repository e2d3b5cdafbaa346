//! pre-push command - The git pre-push hook entry point

use std::io::{self, BufRead};
use std::process::ExitCode;

use anyhow::{Context as _, Result};

use crate::hook::{self, Context};
use crate::ui::output;

/// Run as git's pre-push hook.
///
/// Reads the ref-update lines git supplies on stdin, enforces the
/// configured branch name pattern, and returns the exit code git should
/// see. The remote name and URL arguments git passes are accepted but do
/// not affect enforcement.
pub fn pre_push(ctx: &Context, remote: Option<&str>, url: Option<&str>) -> Result<ExitCode> {
    let verbosity = ctx.verbosity();
    if let (Some(remote), Some(url)) = (remote, url) {
        output::debug(format!("pushing to remote '{}' at {}", remote, url), verbosity);
    }

    let stdin = io::stdin();
    let lines: Vec<String> = stdin
        .lock()
        .lines()
        .collect::<Result<_, _>>()
        .context("Failed to read ref updates from stdin")?;

    let outcome = hook::pre_push::run(ctx, &lines)?;
    if let Some(message) = outcome.message() {
        output::reject(message);
    }

    Ok(outcome.exit_code())
}
