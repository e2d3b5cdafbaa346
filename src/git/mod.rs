//! git
//!
//! Single interface for repository discovery.
//!
//! # Architecture
//!
//! This module is the **ONLY doorway** to Git. No other module should
//! import `git2`. Refguard interprets the pre-push stdin protocol rather
//! than the object database, so the surface is deliberately small:
//! discovery of the repository that is pushing, for config lookup.
//!
//! # Example
//!
//! ```ignore
//! use refguard::git::Git;
//! use std::path::Path;
//!
//! let git = Git::open(Path::new("."))?;
//! println!("worktree at {:?}", git.workdir());
//! ```

use std::path::{Path, PathBuf};

use thiserror::Error;

/// Errors from Git operations.
#[derive(Debug, Error)]
pub enum GitError {
    /// Not inside a Git repository.
    #[error("not a git repository: {path}")]
    NotARepo {
        /// The path that was searched
        path: PathBuf,
    },
}

/// Handle to a discovered Git repository.
///
/// Git runs hooks from the worktree top level, but refguard may also be
/// invoked from a subdirectory (e.g. `refguard check`), so discovery walks
/// upward the way git itself does.
pub struct Git {
    repo: git2::Repository,
}

impl Git {
    /// Discover and open the repository containing `path`.
    ///
    /// # Errors
    ///
    /// Returns `GitError::NotARepo` if no repository contains the path.
    pub fn open(path: &Path) -> Result<Self, GitError> {
        let repo = git2::Repository::discover(path).map_err(|_| GitError::NotARepo {
            path: path.to_path_buf(),
        })?;
        Ok(Self { repo })
    }

    /// The worktree root, if the repository has one.
    ///
    /// Bare repositories have no worktree; repo-scoped config is then
    /// unavailable and only global config applies.
    pub fn workdir(&self) -> Option<&Path> {
        self.repo.workdir()
    }

    /// The `.git` directory.
    pub fn git_dir(&self) -> &Path {
        self.repo.path()
    }
}

impl std::fmt::Debug for Git {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Git")
            .field("git_dir", &self.git_dir())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::process::Command;
    use tempfile::TempDir;

    fn init_repo(dir: &Path) {
        let status = Command::new("git")
            .args(["init", "-b", "main"])
            .current_dir(dir)
            .status()
            .expect("git init failed");
        assert!(status.success());
    }

    #[test]
    fn open_discovers_from_root() {
        let temp = TempDir::new().unwrap();
        init_repo(temp.path());

        let git = Git::open(temp.path()).unwrap();
        assert!(git.git_dir().ends_with(".git"));
        assert!(git.workdir().is_some());
    }

    #[test]
    fn open_discovers_from_subdirectory() {
        let temp = TempDir::new().unwrap();
        init_repo(temp.path());
        let sub = temp.path().join("a/b");
        std::fs::create_dir_all(&sub).unwrap();

        let git = Git::open(&sub).unwrap();
        let workdir = git.workdir().unwrap().canonicalize().unwrap();
        assert_eq!(workdir, temp.path().canonicalize().unwrap());
    }

    #[test]
    fn open_outside_repo_fails() {
        let temp = TempDir::new().unwrap();
        let err = Git::open(temp.path()).unwrap_err();
        assert!(matches!(err, GitError::NotARepo { .. }));
    }
}
