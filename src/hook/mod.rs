//! hook
//!
//! Orchestrates one hook invocation.
//!
//! # Architecture
//!
//! The hook layer is the host collaborator around the pure core: it loads
//! configuration, compiles the pattern, runs the reference parser and the
//! pattern enforcer, and renders the outcome. Commands delegate here; the
//! core modules never see stdin, config files, or exit codes.
//!
//! # Invariants
//!
//! - All informational logging happens here (via [`crate::ui::output`]),
//!   never in core
//! - A validation failure is an ordinary outcome with a non-zero exit code,
//!   not an error: errors are reserved for host faults such as unreadable
//!   configuration

pub mod pre_push;

pub use pre_push::{run, HookOutcome};

use std::path::PathBuf;

use crate::ui::output::Verbosity;

/// Execution context for one invocation.
///
/// Carries the global CLI flags down to the hook layer.
#[derive(Debug, Clone, Default)]
pub struct Context {
    /// Run as if started in this directory.
    pub cwd: Option<PathBuf>,
    /// Enable debug logging.
    pub debug: bool,
    /// Minimal output.
    pub quiet: bool,
}

impl Context {
    /// The directory this invocation operates from.
    pub fn working_dir(&self) -> PathBuf {
        self.cwd
            .clone()
            .unwrap_or_else(|| std::env::current_dir().unwrap_or_else(|_| PathBuf::from(".")))
    }

    /// Output verbosity derived from the flags.
    pub fn verbosity(&self) -> Verbosity {
        Verbosity::from_flags(self.quiet, self.debug)
    }
}
