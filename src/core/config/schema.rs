//! core::config::schema
//!
//! Configuration schema types.
//!
//! # Global Config
//!
//! Located at (in order of precedence):
//! 1. `$REFGUARD_CONFIG` if set
//! 2. `$XDG_CONFIG_HOME/refguard/config.toml`
//! 3. `~/.refguard/config.toml` (canonical write location)
//!
//! # Repo Config
//!
//! Located at `.git/refguard/config.toml` (canonical).
//!
//! # Validation
//!
//! Config values are validated after parsing. A configured
//! `branch_name_pattern` must compile as a regular expression; a pattern
//! that does not compile is a configuration error, reported at load time
//! and never reaching enforcement.

use serde::{Deserialize, Serialize};

use super::ConfigError;
use crate::core::enforce::MatchPattern;

/// Global configuration (user scope).
///
/// # Example
///
/// ```toml
/// [pre_push]
/// branch_name_pattern = "^[a-z0-9-]+$"
/// ```
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(default, deny_unknown_fields)]
pub struct GlobalConfig {
    /// Pre-push hook settings
    pub pre_push: Option<PrePushConfig>,
}

impl GlobalConfig {
    /// Validate the configuration values.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::InvalidValue` if any value is invalid.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if let Some(pre_push) = &self.pre_push {
            pre_push.validate()?;
        }
        Ok(())
    }
}

/// Repository configuration.
///
/// # Example
///
/// ```toml
/// [pre_push]
/// branch_name_pattern = "^DEV-\\d+_"
/// ```
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(default, deny_unknown_fields)]
pub struct RepoConfig {
    /// Pre-push hook settings
    pub pre_push: Option<PrePushConfig>,
}

impl RepoConfig {
    /// Validate the configuration values.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::InvalidValue` if any value is invalid.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if let Some(pre_push) = &self.pre_push {
            pre_push.validate()?;
        }
        Ok(())
    }
}

/// Pre-push hook settings.
///
/// Absence of `branch_name_pattern` means enforcement is skipped; it is a
/// configuration opt-out, not an error.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(default, deny_unknown_fields)]
pub struct PrePushConfig {
    /// Pattern every pushed branch name must match
    pub branch_name_pattern: Option<String>,
}

impl PrePushConfig {
    /// Validate the pre-push settings.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if let Some(pattern) = &self.branch_name_pattern {
            MatchPattern::compile(pattern)
                .map_err(|e| ConfigError::InvalidValue(e.to_string()))?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    mod global_config {
        use super::*;

        #[test]
        fn defaults() {
            let config = GlobalConfig::default();
            assert!(config.pre_push.is_none());
            assert!(config.validate().is_ok());
        }

        #[test]
        fn valid_pattern() {
            let config = GlobalConfig {
                pre_push: Some(PrePushConfig {
                    branch_name_pattern: Some("^[a-z0-9-]+$".to_string()),
                }),
            };
            assert!(config.validate().is_ok());
        }

        #[test]
        fn invalid_pattern_rejected() {
            let config = GlobalConfig {
                pre_push: Some(PrePushConfig {
                    branch_name_pattern: Some("(unclosed".to_string()),
                }),
            };
            assert!(config.validate().is_err());
        }

        #[test]
        fn roundtrip() {
            let config = GlobalConfig {
                pre_push: Some(PrePushConfig {
                    branch_name_pattern: Some("^[a-zA-Z0-9]+$".to_string()),
                }),
            };

            let toml = toml::to_string_pretty(&config).unwrap();
            let parsed: GlobalConfig = toml::from_str(&toml).unwrap();
            assert_eq!(config, parsed);
        }
    }

    mod repo_config {
        use super::*;

        #[test]
        fn defaults() {
            let config = RepoConfig::default();
            assert!(config.pre_push.is_none());
        }

        #[test]
        fn parses_pre_push_section() {
            let toml = r#"
                [pre_push]
                branch_name_pattern = "^DEV-\\d+_"
            "#;
            let config: RepoConfig = toml::from_str(toml).unwrap();
            assert_eq!(
                config
                    .pre_push
                    .unwrap()
                    .branch_name_pattern
                    .as_deref(),
                Some("^DEV-\\d+_")
            );
        }

        #[test]
        fn reject_unknown_fields() {
            let toml = r#"
                [pre_push]
                branch_name_pattern = "^main$"
                unknown_field = true
            "#;

            let result: Result<RepoConfig, _> = toml::from_str(toml);
            assert!(result.is_err());
        }

        #[test]
        fn reject_unknown_sections() {
            let toml = r#"
                [post_commit]
                anything = true
            "#;

            let result: Result<RepoConfig, _> = toml::from_str(toml);
            assert!(result.is_err());
        }

        #[test]
        fn roundtrip() {
            let config = RepoConfig {
                pre_push: Some(PrePushConfig {
                    branch_name_pattern: Some("^release/".to_string()),
                }),
            };

            let toml = toml::to_string_pretty(&config).unwrap();
            let parsed: RepoConfig = toml::from_str(&toml).unwrap();
            assert_eq!(config, parsed);
        }
    }
}
