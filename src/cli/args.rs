//! cli::args
//!
//! Command-line argument definitions using clap derive.
//!
//! # Global Flags
//!
//! These flags are available on all commands:
//! - `--help` / `-h`: Show help
//! - `--version`: Show version
//! - `--cwd <path>`: Run as if in that directory
//! - `--debug`: Enable debug logging
//! - `--quiet` / `-q`: Minimal output

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Refguard - A git pre-push hook that enforces branch naming policy
#[derive(Parser, Debug)]
#[command(name = "refguard")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Run as if refguard was started in this directory
    #[arg(long, global = true)]
    pub cwd: Option<PathBuf>,

    /// Enable debug logging
    #[arg(long, global = true)]
    pub debug: bool,

    /// Minimal output
    #[arg(short, long, global = true)]
    pub quiet: bool,

    #[command(subcommand)]
    pub command: Command,
}

impl Cli {
    /// Parse command-line arguments.
    pub fn parse_args() -> Self {
        Parser::parse()
    }
}

/// Available commands.
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Run as git's pre-push hook (reads ref updates from stdin)
    #[command(
        name = "pre-push",
        long_about = "Run as git's pre-push hook.\n\n\
            Git invokes the pre-push hook with the remote name and URL as \
            arguments and one line per ref update on standard input. Refguard \
            extracts the local branch names being pushed and rejects the push \
            (non-zero exit) if any name fails the configured pattern.\n\n\
            With no pattern configured, or a push that updates no branches, \
            the hook accepts the push without validating anything.",
        after_help = "\
INSTALLATION:
    # .git/hooks/pre-push
    #!/bin/sh
    exec refguard pre-push \"$@\"

CONFIGURATION (.git/refguard/config.toml):
    [pre_push]
    branch_name_pattern = \"^[a-z0-9-]+$\"

STDIN PROTOCOL (supplied by git):
    <local ref> <local oid> <remote ref> <remote oid>"
    )]
    PrePush {
        /// Name of the destination remote (supplied by git)
        remote: Option<String>,

        /// URL of the destination remote (supplied by git)
        url: Option<String>,
    },

    /// Check branch names against the configured pattern
    #[command(
        name = "check",
        long_about = "Check branch names against the configured pattern \
            without pushing.\n\n\
            Validates each given name the same way the pre-push hook would, \
            with the same messages and exit codes. Useful for trying out a \
            pattern before enforcing it.",
        after_help = "\
WORKFLOW EXAMPLES:
    # Will this branch survive a push?
    refguard check my-feature

    # Check several names at once
    refguard check feature-a Feature_B hotfix/1.2"
    )]
    Check {
        /// Branch names to validate
        #[arg(required = true)]
        names: Vec<String>,
    },

    /// Generate shell completion scripts
    #[command(
        name = "completion",
        long_about = "Generate shell completion scripts for tab-completion.\n\n\
            Outputs a completion script for the specified shell. Add the output \
            to your shell's configuration to enable tab-completion for refguard \
            commands.",
        after_help = "\
WORKFLOW EXAMPLES:
    # Bash (add to ~/.bashrc)
    refguard completion bash >> ~/.bashrc

    # Zsh (add to ~/.zshrc)
    refguard completion zsh >> ~/.zshrc

    # Fish
    refguard completion fish > ~/.config/fish/completions/refguard.fish"
    )]
    Completion {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: clap_complete::Shell,
    },
}
