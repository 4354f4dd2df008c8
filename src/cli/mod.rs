//! CLI argument parsing for prepub.
//!
//! Uses clap derive macros for declarative argument definitions.
//! This module defines the command structure; actual implementations
//! are in the `commands` module.

use clap::{Parser, Subcommand};

/// Prepub: publish-gated script runner for npm package lifecycles.
///
/// Wire it into package.json as the `prepublish` script. On plain installs
/// and `npm pack` it exits silently with status zero; during a genuine
/// `npm publish` it runs the commands listed under
/// `publish.prepublish.scripts` in `npm-scripts.json`, in order, stopping
/// at the first failure.
#[derive(Parser, Debug)]
#[command(name = "prepub")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    // npm invokes lifecycle scripts with no arguments, so the subcommand
    // is optional and a bare invocation means `run`.
    #[command(subcommand)]
    pub command: Option<Command>,
}

/// Available commands for prepub.
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Run the configured prepublish scripts if this is a genuine publish.
    ///
    /// Exits zero without reading `npm-scripts.json` when the invocation
    /// is not a publish (and no override is set).
    Run,

    /// Report whether the current invocation counts as publish mode.
    ///
    /// Exits 0 when the gate is open and 1 when it is closed, so shell
    /// chains like `prepub check && ...` work.
    Check,

    /// List the configured prepublish scripts without executing them.
    List,

    /// Write a starter `npm-scripts.json` to the current directory.
    Init(InitArgs),
}

/// Arguments for the `init` command.
#[derive(Parser, Debug)]
pub struct InitArgs {
    /// Overwrite an existing `npm-scripts.json`.
    #[arg(long)]
    pub force: bool,
}

impl Cli {
    /// Parse command line arguments.
    pub fn parse_args() -> Self {
        Cli::parse()
    }
}
