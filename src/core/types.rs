//! core::types
//!
//! Strong types for core domain concepts.
//!
//! # Types
//!
//! - [`BranchName`] - A local branch name extracted from a pushed ref
//!
//! # Validation
//!
//! Types enforce validity at construction time. Branch names reach refguard
//! through git's own pre-push protocol, so they are already valid refnames;
//! validation here guards the structural invariants the parser relies on
//! (non-empty, printable) rather than re-implementing
//! `git check-ref-format`. Whether a name is *acceptable* is the pattern
//! enforcer's job, not a construction-time concern.
//!
//! # Examples
//!
//! ```
//! use refguard::core::types::BranchName;
//!
//! let branch = BranchName::new("feature/my-branch").unwrap();
//! assert_eq!(branch.as_str(), "feature/my-branch");
//!
//! assert!(BranchName::new("").is_err());
//! ```

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Errors from type validation.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum TypeError {
    #[error("invalid branch name: {0}")]
    InvalidBranchName(String),
}

/// A local branch name extracted from a pushed ref.
///
/// Invariants:
/// - Non-empty
/// - No ASCII control characters (line terminators can never be part of a
///   name read from the line-oriented protocol)
///
/// Names sort lexicographically, so sets of branch names iterate in a
/// deterministic order and error messages are reproducible.
///
/// # Example
///
/// ```
/// use refguard::core::types::BranchName;
///
/// let name = BranchName::new("feature/my-branch").unwrap();
/// assert_eq!(name.as_str(), "feature/my-branch");
///
/// assert!(BranchName::new("").is_err());
/// assert!(BranchName::new("has\ttab").is_err());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct BranchName(String);

impl BranchName {
    /// Create a new validated branch name.
    ///
    /// # Errors
    ///
    /// Returns `TypeError::InvalidBranchName` if the name is empty or
    /// contains control characters.
    pub fn new(name: impl Into<String>) -> Result<Self, TypeError> {
        let name = name.into();
        Self::validate(&name)?;
        Ok(Self(name))
    }

    /// Validate a candidate branch name.
    fn validate(name: &str) -> Result<(), TypeError> {
        if name.is_empty() {
            return Err(TypeError::InvalidBranchName(
                "branch name cannot be empty".into(),
            ));
        }

        if name.chars().any(|c| c.is_ascii_control()) {
            return Err(TypeError::InvalidBranchName(
                "branch name cannot contain control characters".into(),
            ));
        }

        Ok(())
    }

    /// Get the branch name as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl TryFrom<String> for BranchName {
    type Error = TypeError;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        Self::new(s)
    }
}

impl From<BranchName> for String {
    fn from(name: BranchName) -> Self {
        name.0
    }
}

impl AsRef<str> for BranchName {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for BranchName {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}
