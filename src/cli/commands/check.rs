//! check command - Validate branch names without pushing

use std::collections::BTreeSet;
use std::process::ExitCode;

use anyhow::{bail, Result};

use crate::core::enforce::{EnforcementResult, SkipReason};
use crate::core::types::BranchName;
use crate::hook::{self, Context};
use crate::ui::output;

/// Check branch names against the configured pattern.
///
/// Runs the same enforcement as the pre-push hook over names given as
/// arguments, with the same messages and exit codes.
pub fn check(ctx: &Context, names: &[String]) -> Result<ExitCode> {
    let verbosity = ctx.verbosity();

    let mut branches = BTreeSet::new();
    for name in names {
        match BranchName::new(name.clone()) {
            Ok(branch) => {
                branches.insert(branch);
            }
            Err(e) => bail!("'{}' is not a checkable branch name: {}", name, e),
        }
    }

    let outcome = hook::pre_push::run_on_branches(ctx, &branches)?;
    match outcome.result() {
        EnforcementResult::Pass => {
            output::print("All branch names match the configured pattern.", verbosity);
        }
        EnforcementResult::Skip(SkipReason::NoPattern) => {
            output::print(
                "No branch name pattern configured; nothing to check.",
                verbosity,
            );
        }
        EnforcementResult::Skip(SkipReason::NoBranches) => {
            output::print("No branch names given; nothing to check.", verbosity);
        }
        EnforcementResult::Fail { .. } => {
            if let Some(message) = outcome.message() {
                output::reject(message);
            }
        }
    }

    Ok(outcome.exit_code())
}
