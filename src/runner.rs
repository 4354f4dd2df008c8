//! Sequential script execution.
//!
//! Runs the configured prepublish scripts one at a time through the
//! platform shell, in the order they appear in `npm-scripts.json`. Child
//! stdio is inherited so build and test output streams straight through to
//! npm's output. Execution stops at the first script that fails.

use crate::error::{PrepubError, Result};
use std::path::Path;
use std::process::Command;

/// Run `scripts` in order with `root` as the working directory.
///
/// Before each script a progress line is printed to stdout:
///
/// ```text
/// Prepublish executing: <script>
/// ```
///
/// Stdout is line-buffered, so the progress line always lands before any
/// output of the script it announces.
///
/// # Returns
///
/// * `Ok(())` - Every script exited with status zero
/// * `Err(PrepubError::CommandFailed)` - A script could not be spawned,
///   exited non-zero, or died on a signal; later scripts do not run
pub fn run_scripts(scripts: &[String], root: &Path) -> Result<()> {
    for script in scripts {
        println!("Prepublish executing: {}", script);

        let status = shell_command(script)
            .current_dir(root)
            .status()
            .map_err(|e| {
                PrepubError::CommandFailed(format!(
                    "failed to spawn shell for script '{}': {}",
                    script, e
                ))
            })?;

        if !status.success() {
            return Err(match status.code() {
                Some(code) => PrepubError::CommandFailed(format!(
                    "script '{}' failed with exit code {}",
                    script, code
                )),
                None => PrepubError::CommandFailed(format!(
                    "script '{}' was terminated by a signal",
                    script
                )),
            });
        }
    }

    Ok(())
}

/// Build a shell invocation for one script line.
///
/// Scripts are whole shell command lines, not argv vectors: pipes,
/// redirects, and `&&` chains all work, matching how npm itself runs
/// package scripts.
#[cfg(not(windows))]
fn shell_command(script: &str) -> Command {
    let mut cmd = Command::new("sh");
    cmd.arg("-c").arg(script);
    cmd
}

#[cfg(windows)]
fn shell_command(script: &str) -> Command {
    let mut cmd = Command::new("cmd");
    cmd.arg("/C").arg(script);
    cmd
}
