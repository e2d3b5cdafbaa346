//! core::config
//!
//! Configuration schema and loading.
//!
//! # Overview
//!
//! Refguard has two configuration scopes:
//! - **Global**: User-level settings
//! - **Repo**: Repository-level overrides (the administrator-configured
//!   policy usually lives here)
//!
//! # Precedence
//!
//! Configuration values are resolved in this order (later overrides earlier):
//! 1. Default values (no enforcement)
//! 2. Global config file
//! 3. Repo config file
//!
//! # Global Config Locations
//!
//! Searched in order:
//! 1. `$REFGUARD_CONFIG` if set
//! 2. `$XDG_CONFIG_HOME/refguard/config.toml`
//! 3. `~/.refguard/config.toml` (canonical write location)
//!
//! # Repo Config Locations
//!
//! Searched in order:
//! 1. `<git dir>/refguard/config.toml` (canonical)
//! 2. `.refguard.toml` at the worktree root (compatibility, warns)
//!
//! # Example
//!
//! ```no_run
//! use refguard::core::config::Config;
//! use std::path::Path;
//!
//! let result = Config::load(Some(Path::new("/path/to/repo"))).unwrap();
//! let config = result.config;
//!
//! if let Some(pattern) = config.branch_name_pattern() {
//!     println!("Enforcing pattern: {}", pattern);
//! }
//! ```

pub mod schema;

pub use schema::{GlobalConfig, PrePushConfig, RepoConfig};

use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

use crate::core::enforce::MatchPattern;

/// Errors from configuration operations.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config file '{path}': {source}")]
    ReadError {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("failed to parse config file '{path}': {message}")]
    ParseError { path: PathBuf, message: String },

    #[error("invalid config value: {0}")]
    InvalidValue(String),
}

/// Warnings generated during config loading.
#[derive(Debug, Clone)]
pub struct ConfigWarning {
    /// The warning message.
    pub message: String,
    /// The path that triggered the warning.
    pub path: PathBuf,
}

/// Result of loading configuration.
#[derive(Debug)]
pub struct ConfigLoadResult {
    /// The loaded configuration.
    pub config: Config,
    /// Any warnings generated during loading.
    pub warnings: Vec<ConfigWarning>,
}

/// Merged configuration from all sources.
///
/// This struct provides accessor methods that apply precedence rules
/// automatically. Repo config overrides global config.
#[derive(Debug, Clone, Default)]
pub struct Config {
    /// Global configuration
    pub global: GlobalConfig,
    /// Repository configuration (if in a repo)
    pub repo: Option<RepoConfig>,
    /// Path to the global config file (if loaded)
    global_path: Option<PathBuf>,
    /// Path to the repo config file (if loaded)
    repo_path: Option<PathBuf>,
}

impl Config {
    /// Load configuration from default locations.
    ///
    /// If `repo_path` is provided it must be the worktree root; repo config
    /// is searched under its `.git` directory and at the root itself.
    ///
    /// # Errors
    ///
    /// Returns an error if config files exist but cannot be parsed or fail
    /// validation. Missing config files are not an error (defaults are used).
    pub fn load(repo_path: Option<&Path>) -> Result<ConfigLoadResult, ConfigError> {
        let mut warnings = Vec::new();

        let (global, global_path) = Self::load_global()?;

        let (repo, repo_path_found) = if let Some(path) = repo_path {
            Self::load_repo(path, &mut warnings)?
        } else {
            (None, None)
        };

        global.validate()?;
        if let Some(ref r) = repo {
            r.validate()?;
        }

        Ok(ConfigLoadResult {
            config: Config {
                global,
                repo,
                global_path,
                repo_path: repo_path_found,
            },
            warnings,
        })
    }

    /// Load global configuration from standard locations.
    fn load_global() -> Result<(GlobalConfig, Option<PathBuf>), ConfigError> {
        // 1. Check $REFGUARD_CONFIG
        if let Ok(path) = std::env::var("REFGUARD_CONFIG") {
            let path = PathBuf::from(path);
            if path.exists() {
                let config = Self::read_config::<GlobalConfig>(&path)?;
                return Ok((config, Some(path)));
            }
        }

        // 2. Check $XDG_CONFIG_HOME/refguard/config.toml
        if let Ok(xdg_home) = std::env::var("XDG_CONFIG_HOME") {
            let path = PathBuf::from(xdg_home).join("refguard/config.toml");
            if path.exists() {
                let config = Self::read_config::<GlobalConfig>(&path)?;
                return Ok((config, Some(path)));
            }
        }

        // 3. Check ~/.refguard/config.toml
        if let Some(home) = dirs::home_dir() {
            let path = home.join(".refguard/config.toml");
            if path.exists() {
                let config = Self::read_config::<GlobalConfig>(&path)?;
                return Ok((config, Some(path)));
            }
        }

        // No config found, use defaults
        Ok((GlobalConfig::default(), None))
    }

    /// Load repository configuration from standard locations.
    fn load_repo(
        repo_path: &Path,
        warnings: &mut Vec<ConfigWarning>,
    ) -> Result<(Option<RepoConfig>, Option<PathBuf>), ConfigError> {
        let git_dir = repo_path.join(".git");
        if !git_dir.exists() {
            return Ok((None, None));
        }

        // 1. Check <git dir>/refguard/config.toml (canonical)
        let canonical = git_dir.join("refguard/config.toml");
        if canonical.exists() {
            let config = Self::read_config::<RepoConfig>(&canonical)?;
            return Ok((Some(config), Some(canonical)));
        }

        // 2. Check .refguard.toml at the worktree root (compatibility)
        let compat_root = repo_path.join(".refguard.toml");
        if compat_root.exists() {
            warnings.push(ConfigWarning {
                message: format!(
                    "Using deprecated config location. Please move to '{}'",
                    canonical.display()
                ),
                path: compat_root.clone(),
            });
            let config = Self::read_config::<RepoConfig>(&compat_root)?;
            return Ok((Some(config), Some(compat_root)));
        }

        Ok((None, None))
    }

    /// Read and parse a config file.
    fn read_config<T: serde::de::DeserializeOwned>(path: &Path) -> Result<T, ConfigError> {
        let contents = fs::read_to_string(path).map_err(|e| ConfigError::ReadError {
            path: path.to_path_buf(),
            source: e,
        })?;

        toml::from_str(&contents).map_err(|e| ConfigError::ParseError {
            path: path.to_path_buf(),
            message: e.to_string(),
        })
    }

    // =========================================================================
    // Accessor methods with precedence
    // =========================================================================

    /// Get the configured branch name pattern source, if any.
    ///
    /// Repo config overrides global config. Returns `None` when no pattern
    /// is configured anywhere, which means enforcement is skipped.
    pub fn branch_name_pattern(&self) -> Option<&str> {
        self.repo
            .as_ref()
            .and_then(|r| r.pre_push.as_ref())
            .and_then(|p| p.branch_name_pattern.as_deref())
            .or_else(|| {
                self.global
                    .pre_push
                    .as_ref()
                    .and_then(|p| p.branch_name_pattern.as_deref())
            })
    }

    /// Compile the configured pattern, if any.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::InvalidValue` if the pattern does not compile.
    /// Validation at load time already rejects such patterns, so this only
    /// fails for configs constructed without going through [`Config::load`].
    pub fn compiled_pattern(&self) -> Result<Option<MatchPattern>, ConfigError> {
        self.branch_name_pattern()
            .map(|source| {
                MatchPattern::compile(source)
                    .map_err(|e| ConfigError::InvalidValue(e.to_string()))
            })
            .transpose()
    }

    /// Get the path to the loaded global config file.
    pub fn global_config_loaded_from(&self) -> Option<&Path> {
        self.global_path.as_deref()
    }

    /// Get the path to the loaded repo config file.
    pub fn repo_config_loaded_from(&self) -> Option<&Path> {
        self.repo_path.as_deref()
    }
}
