//! Implementation of the `list` command.
//!
//! Loads and validates `npm-scripts.json`, then prints the configured
//! scripts in execution order without running anything. This is the quick
//! way to review what a publish would do.

use crate::config::PrepublishConfig;
use crate::context::RunContext;
use crate::error::Result;
use crate::exit_codes;

/// Execute the `list` command.
pub fn cmd_list() -> Result<i32> {
    list_in(&RunContext::resolve()?)
}

/// Print the scripts configured under `ctx`.
fn list_in(ctx: &RunContext) -> Result<i32> {
    let config = PrepublishConfig::load(ctx.config_path())?;

    if config.scripts.is_empty() {
        println!("No prepublish scripts configured.");
        return Ok(exit_codes::SUCCESS);
    }

    println!("Prepublish scripts ({}):", config.scripts.len());
    for (index, script) in config.scripts.iter().enumerate() {
        println!("  {}. {}", index + 1, script);
    }

    Ok(exit_codes::SUCCESS)
}
