//! Command implementations for prepub.
//!
//! This module provides the dispatcher that routes CLI commands to their
//! implementations. Commands return the process exit code on success:
//! `check` reports a closed gate through a non-zero code without that
//! being an error, so the dispatcher deals in codes rather than `()`.

mod init;
mod list;
mod run;

use crate::cli::Command;
use crate::error::Result;
use crate::exit_codes;
use crate::publish_mode::{ENV_PUBLISH_OVERRIDE, PublishEnv};

/// Dispatch a command to its implementation.
///
/// This is the main entry point for command execution. A missing
/// subcommand means `run`, because npm invokes lifecycle scripts with no
/// arguments.
pub fn dispatch(command: Option<Command>) -> Result<i32> {
    match command.unwrap_or(Command::Run) {
        Command::Run => run::cmd_run(),
        Command::Check => cmd_check(),
        Command::List => list::cmd_list(),
        Command::Init(args) => init::cmd_init(args),
    }
}

/// Execute the `check` command: report the gate state.
fn cmd_check() -> Result<i32> {
    Ok(check_env(&PublishEnv::from_process()))
}

/// Report the gate state for `env` and return the exit code.
fn check_env(env: &PublishEnv) -> i32 {
    if env.in_publish() {
        println!("publish mode: active");
        exit_codes::SUCCESS
    } else if env.override_active() {
        println!("publish mode: active (override: {})", ENV_PUBLISH_OVERRIDE);
        exit_codes::SUCCESS
    } else {
        println!("publish mode: inactive");
        exit_codes::FAILURE
    }
}
