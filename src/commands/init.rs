//! Implementation of the `init` command.
//!
//! Scaffolds a starter `npm-scripts.json` in the working directory. The
//! template carries comments on purpose: the config format accepts them,
//! and the scaffold is where users find that out.

use crate::cli::InitArgs;
use crate::context::{CONFIG_FILE_NAME, RunContext};
use crate::error::{PrepubError, Result};
use crate::exit_codes;

/// Starter configuration written by `init`.
const CONFIG_TEMPLATE: &str = r#"{
  // Commands run in order during a genuine `npm publish`.
  // Plain installs and `npm pack` never trigger them.
  "publish": {
    "prepublish": {
      "scripts": [
        "npm test"
      ]
    }
  }
}
"#;

/// Execute the `init` command.
pub fn cmd_init(args: InitArgs) -> Result<i32> {
    init_in(&RunContext::resolve()?, args.force)
}

/// Write the starter config under `ctx`.
///
/// Refuses to overwrite an existing file unless `force` is set.
fn init_in(ctx: &RunContext, force: bool) -> Result<i32> {
    let path = ctx.config_path();

    if path.exists() && !force {
        return Err(PrepubError::UserError(format!(
            "'{}' already exists. Pass --force to overwrite it.",
            CONFIG_FILE_NAME
        )));
    }

    std::fs::write(&path, CONFIG_TEMPLATE).map_err(|e| {
        PrepubError::UserError(format!("failed to write '{}': {}", path.display(), e))
    })?;

    println!("Created {}.", CONFIG_FILE_NAME);
    println!();
    println!("Wire it up in package.json:");
    println!("  \"scripts\": {{");
    println!("    \"prepublish\": \"prepub\"");
    println!("  }}");
    println!();
    println!("Edit the scripts list, then review it with `prepub list`.");

    Ok(exit_codes::SUCCESS)
}
