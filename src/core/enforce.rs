//! core::enforce
//!
//! Branch name pattern enforcement.
//!
//! # Design
//!
//! Enforcement is a pure function from (branch set, optional pattern) to an
//! [`EnforcementResult`]. Failure is a data variant carrying every violating
//! name, not a raised error: the hook layer decides how to render it and
//! which exit code to map it to. No logging happens here.

use std::collections::BTreeSet;

use regex::Regex;
use thiserror::Error;

use crate::core::types::BranchName;

/// Errors from pattern compilation.
#[derive(Debug, Error)]
pub enum PatternError {
    #[error("invalid branch name pattern '{source_text}': {message}")]
    Invalid {
        /// The pattern source that failed to compile
        source_text: String,
        /// The regex engine's diagnostic
        message: String,
    },
}

/// A compiled branch name predicate.
///
/// Wraps a compiled regular expression together with its source text, which
/// is kept for error message rendering. The pattern is supplied by
/// configuration; enforcement only evaluates it.
///
/// # Example
///
/// ```
/// use refguard::core::enforce::MatchPattern;
///
/// let pattern = MatchPattern::compile("^[a-zA-Z0-9]+$").unwrap();
/// assert!(pattern.is_match("Test"));
/// assert!(!pattern.is_match("test_"));
/// assert_eq!(pattern.source_text(), "^[a-zA-Z0-9]+$");
/// ```
#[derive(Debug, Clone)]
pub struct MatchPattern {
    regex: Regex,
    source_text: String,
}

impl MatchPattern {
    /// Compile a pattern from its source text.
    ///
    /// # Errors
    ///
    /// Returns `PatternError::Invalid` if the source is not a valid regular
    /// expression. Callers in the config layer surface this as a
    /// configuration error; it never reaches enforcement.
    pub fn compile(source_text: &str) -> Result<Self, PatternError> {
        let regex = Regex::new(source_text).map_err(|e| PatternError::Invalid {
            source_text: source_text.to_string(),
            message: e.to_string(),
        })?;
        Ok(Self {
            regex,
            source_text: source_text.to_string(),
        })
    }

    /// Evaluate the predicate against a branch name.
    pub fn is_match(&self, name: impl AsRef<str>) -> bool {
        self.regex.is_match(name.as_ref())
    }

    /// Get the pattern source text for message rendering.
    pub fn source_text(&self) -> &str {
        &self.source_text
    }
}

/// Why enforcement was skipped.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SkipReason {
    /// No pattern configured; enforcement is opted out.
    NoPattern,
    /// The push updates no branches; nothing to validate.
    NoBranches,
}

/// Outcome of one enforcement run.
///
/// Constructed once per hook invocation and consumed immediately by the
/// host to decide exit behavior.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EnforcementResult {
    /// Every pushed branch matches the configured pattern.
    Pass,
    /// Nothing to enforce.
    Skip(SkipReason),
    /// One or more branches fail the pattern.
    Fail {
        /// All violating names, in sorted order. Never empty.
        violations: Vec<BranchName>,
        /// The pattern source, for inclusion in the error message.
        pattern: String,
    },
}

impl EnforcementResult {
    /// Whether this outcome allows the push to proceed.
    pub fn is_ok(&self) -> bool {
        !matches!(self, EnforcementResult::Fail { .. })
    }
}

/// Partition pushed branch names against the configured pattern.
///
/// With no pattern, or no branches, returns [`EnforcementResult::Skip`].
/// Otherwise every name is evaluated and a `Fail` carries the full list of
/// violations, never just the first offender, so the user can fix every bad
/// branch in one pass.
///
/// # Example
///
/// ```
/// use std::collections::BTreeSet;
/// use refguard::core::enforce::{enforce, EnforcementResult, MatchPattern};
/// use refguard::core::types::BranchName;
///
/// let pattern = MatchPattern::compile("^[a-zA-Z0-9]+$").unwrap();
/// let branches: BTreeSet<_> = [BranchName::new("Test").unwrap()].into();
/// assert_eq!(enforce(&branches, Some(&pattern)), EnforcementResult::Pass);
/// ```
pub fn enforce(
    branches: &BTreeSet<BranchName>,
    pattern: Option<&MatchPattern>,
) -> EnforcementResult {
    let Some(pattern) = pattern else {
        return EnforcementResult::Skip(SkipReason::NoPattern);
    };
    if branches.is_empty() {
        return EnforcementResult::Skip(SkipReason::NoBranches);
    }

    let violations: Vec<BranchName> = branches
        .iter()
        .filter(|name| !pattern.is_match(name))
        .cloned()
        .collect();

    if violations.is_empty() {
        EnforcementResult::Pass
    } else {
        EnforcementResult::Fail {
            violations,
            pattern: pattern.source_text().to_string(),
        }
    }
}
