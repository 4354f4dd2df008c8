//! Prepub: publish-gated script runner for npm package lifecycles.
//!
//! This is the main entry point for the `prepub` CLI. It parses arguments,
//! dispatches to the appropriate command handler, and handles errors with
//! proper exit codes.

mod cli;
mod commands;
pub mod config;
pub mod context;
pub mod error;
pub mod exit_codes;
pub mod publish_mode;
pub mod runner;

#[cfg(test)]
mod test_support;

use cli::Cli;
use std::process::ExitCode;

fn main() -> ExitCode {
    let cli = Cli::parse_args();

    match commands::dispatch(cli.command) {
        Ok(code) => ExitCode::from(code as u8),
        Err(err) => {
            // Fixed tag so failures stay attributable inside npm's
            // interleaved lifecycle output.
            eprintln!("prepub error: {}", err);

            ExitCode::from(err.exit_code() as u8)
        }
    }
}
