//! core::refs
//!
//! Parsing of git's pre-push stdin protocol.
//!
//! # Protocol
//!
//! Before transmitting refs, git feeds the hook one line per updated
//! reference on standard input:
//!
//! ```text
//! <local ref> SP <local oid> SP <remote ref> SP <remote oid> LF
//! ```
//!
//! Only the local ref is interpreted. Branch pushes carry a local ref of the
//! form `refs/heads/<name>`; tag pushes (`refs/tags/...`) and deletions
//! (local ref `(delete)`) carry other shapes and are ignored.
//!
//! # Guarantees
//!
//! Parsing is total and pure: malformed lines are skipped, never an error,
//! and the same input always yields the same set. Duplicate branch names
//! collapse; iteration order is sorted so downstream messages are
//! reproducible.

use std::collections::BTreeSet;

use crate::core::types::BranchName;

/// Prefix identifying a local branch ref.
const BRANCH_REF_PREFIX: &str = "refs/heads/";

/// One parsed line of the pre-push stdin protocol.
///
/// # Example
///
/// ```
/// use refguard::core::refs::PushLine;
///
/// let line = PushLine::parse("refs/heads/main abc123 refs/heads/main def456").unwrap();
/// assert_eq!(line.local_ref, "refs/heads/main");
/// assert_eq!(line.branch_name().unwrap().as_str(), "main");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PushLine {
    /// The local ref being pushed (e.g. `refs/heads/main`).
    pub local_ref: String,
    /// The local object id, if present on the line.
    pub local_oid: Option<String>,
    /// The remote ref being updated, if present on the line.
    pub remote_ref: Option<String>,
    /// The remote object id, if present on the line.
    pub remote_oid: Option<String>,
}

impl PushLine {
    /// Parse a single protocol line.
    ///
    /// The line is split on ASCII whitespace after stripping the trailing
    /// line terminator. Returns `None` for blank lines. Lines with fewer
    /// than four fields still parse; the missing fields are `None`, since
    /// only the local ref is consumed downstream.
    pub fn parse(line: &str) -> Option<Self> {
        let mut fields = line.trim_end_matches(['\r', '\n']).split_whitespace();
        let local_ref = fields.next()?.to_string();
        Some(Self {
            local_ref,
            local_oid: fields.next().map(str::to_string),
            remote_ref: fields.next().map(str::to_string),
            remote_oid: fields.next().map(str::to_string),
        })
    }

    /// Extract the local branch name, if this line pushes a branch.
    ///
    /// Returns `None` when the local ref is not under `refs/heads/` or the
    /// remainder fails [`BranchName`] validation.
    pub fn branch_name(&self) -> Option<BranchName> {
        let name = self.local_ref.strip_prefix(BRANCH_REF_PREFIX)?;
        BranchName::new(name).ok()
    }
}

/// Extract the set of distinct local branch names from pre-push stdin lines.
///
/// Lines that do not push a branch (tags, deletions, malformed input)
/// contribute nothing. Empty input yields an empty set.
///
/// # Example
///
/// ```
/// use refguard::core::refs::extract_branch_names;
///
/// let branches = extract_branch_names([
///     "refs/heads/main abc123 refs/heads/main def456",
///     "refs/tags/v1.0 abc123 refs/tags/v1.0 def456",
/// ]);
/// assert_eq!(branches.len(), 1);
/// assert!(branches.iter().any(|b| b.as_str() == "main"));
/// ```
pub fn extract_branch_names<I, S>(lines: I) -> BTreeSet<BranchName>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    lines
        .into_iter()
        .filter_map(|line| PushLine::parse(line.as_ref()))
        .filter_map(|line| line.branch_name())
        .collect()
}
