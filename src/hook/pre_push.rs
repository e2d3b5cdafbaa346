//! hook::pre_push
//!
//! The pre-push hook invocation: config -> parse -> enforce -> outcome.

use std::collections::BTreeSet;
use std::process::ExitCode;

use anyhow::{Context as _, Result};

use crate::core::config::Config;
use crate::core::enforce::{enforce, EnforcementResult, SkipReason};
use crate::core::refs::extract_branch_names;
use crate::core::types::BranchName;
use crate::git::Git;
use crate::hook::Context;
use crate::ui::output;

/// Outcome of one hook invocation.
///
/// Wraps the core's [`EnforcementResult`] and owns the translation into
/// user-facing messages and a process exit code.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HookOutcome {
    result: EnforcementResult,
}

impl HookOutcome {
    /// The underlying enforcement result.
    pub fn result(&self) -> &EnforcementResult {
        &self.result
    }

    /// Whether the push is rejected.
    pub fn is_rejected(&self) -> bool {
        !self.result.is_ok()
    }

    /// The exit code git should see: zero accepts the push, non-zero
    /// rejects it.
    pub fn exit_code(&self) -> ExitCode {
        if self.is_rejected() {
            ExitCode::FAILURE
        } else {
            ExitCode::SUCCESS
        }
    }

    /// Render the rejection message, if the push is rejected.
    ///
    /// All violations appear in one consolidated message so the user can
    /// fix every bad branch before retrying.
    pub fn message(&self) -> Option<String> {
        match &self.result {
            EnforcementResult::Fail {
                violations,
                pattern,
            } => {
                let (noun, verb) = if violations.len() == 1 {
                    ("branch", "does")
                } else {
                    ("branches", "do")
                };
                let joined = violations
                    .iter()
                    .map(BranchName::as_str)
                    .collect::<Vec<_>>()
                    .join(", ");
                Some(format!(
                    "The following {noun} {verb} not match the pattern enforced \
                     by the git hooks configuration file: `{joined}`.\n\
                     Branches must match the following pattern: `{pattern}`."
                ))
            }
            _ => None,
        }
    }
}

impl From<EnforcementResult> for HookOutcome {
    fn from(result: EnforcementResult) -> Self {
        Self { result }
    }
}

/// Run the pre-push hook over the stdin payload lines.
///
/// Loads configuration for the repository containing the working directory
/// (global config only when outside a repository), compiles the configured
/// pattern, extracts the pushed branch names, and enforces the pattern.
///
/// # Errors
///
/// Fails only on host faults: unreadable or invalid configuration. A
/// pattern violation is a [`HookOutcome`], not an error.
pub fn run<I, S>(ctx: &Context, lines: I) -> Result<HookOutcome>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let branches = extract_branch_names(lines);
    run_on_branches(ctx, &branches)
}

/// Enforce the configured pattern over an already-extracted branch set.
///
/// Shared by the `pre-push` and `check` commands.
pub fn run_on_branches(ctx: &Context, branches: &BTreeSet<BranchName>) -> Result<HookOutcome> {
    let verbosity = ctx.verbosity();
    let cwd = ctx.working_dir();

    // Outside a repository only global config applies; the hook itself is
    // repo-agnostic.
    let workdir = match Git::open(&cwd) {
        Ok(git) => git.workdir().map(|p| p.to_path_buf()),
        Err(_) => None,
    };

    let loaded = Config::load(workdir.as_deref()).context("Failed to load configuration")?;
    for warning in &loaded.warnings {
        output::warn(&warning.message, verbosity);
    }

    let pattern = loaded
        .config
        .compiled_pattern()
        .context("Failed to compile branch name pattern")?;

    if let Some(ref pattern) = pattern {
        for branch in branches {
            let decision = if pattern.is_match(branch) {
                "matches"
            } else {
                "does not match"
            };
            output::debug(
                format!("branch '{}' {} pattern '{}'", branch, decision, pattern.source_text()),
                verbosity,
            );
        }
    }

    let result = enforce(branches, pattern.as_ref());
    match &result {
        EnforcementResult::Pass => {
            output::debug("all pushed branches match the configured pattern", verbosity);
        }
        EnforcementResult::Skip(SkipReason::NoPattern) => {
            output::debug("no branch name pattern configured; skipping", verbosity);
        }
        EnforcementResult::Skip(SkipReason::NoBranches) => {
            output::debug("push updates no branches; skipping", verbosity);
        }
        EnforcementResult::Fail { violations, .. } => {
            output::debug(
                format!("{} branch(es) violate the pattern", violations.len()),
                verbosity,
            );
        }
    }

    Ok(result.into())
}
