//! Implementation of the `run` command, the prepublish lifecycle hook.
//!
//! The flow is strictly linear: gate check, config load and validation,
//! then sequential script execution. The gate check comes first and
//! short-circuits without touching the filesystem, so a plain install in a
//! package without `npm-scripts.json` stays a silent success.

use crate::config::PrepublishConfig;
use crate::context::RunContext;
use crate::error::Result;
use crate::exit_codes;
use crate::publish_mode::PublishEnv;
use crate::runner;

/// Execute the `run` command.
pub fn cmd_run() -> Result<i32> {
    run_gated(&PublishEnv::from_process())
}

/// Gate on publish mode, then resolve the working directory and run.
fn run_gated(env: &PublishEnv) -> Result<i32> {
    if !env.should_run() {
        return Ok(exit_codes::SUCCESS);
    }

    let ctx = RunContext::resolve()?;
    run_in(&ctx)
}

/// Load the config under `ctx` and execute its scripts in order.
fn run_in(ctx: &RunContext) -> Result<i32> {
    let config = PrepublishConfig::load(ctx.config_path())?;
    runner::run_scripts(&config.scripts, &ctx.root)?;
    Ok(exit_codes::SUCCESS)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::PrepubError;
    use crate::test_support::write_config;
    use tempfile::TempDir;

    #[test]
    fn closed_gate_succeeds_without_reading_anything() {
        // No working directory setup at all: the gated path must return
        // before any filesystem access.
        let result = run_gated(&PublishEnv::default());
        assert_eq!(result.unwrap(), exit_codes::SUCCESS);
    }

    #[test]
    fn closed_gate_covers_install_invocations() {
        let env = PublishEnv {
            npm_command: Some("install".to_string()),
            ..Default::default()
        };
        assert_eq!(run_gated(&env).unwrap(), exit_codes::SUCCESS);
    }

    #[test]
    fn open_gate_requires_the_config_file() {
        let temp_dir = TempDir::new().unwrap();
        let ctx = RunContext::resolve_from(temp_dir.path());

        let err = run_in(&ctx).unwrap_err();

        assert!(matches!(err, PrepubError::ConfigNotFound(_)));
    }

    #[test]
    fn run_in_executes_configured_scripts() {
        let temp_dir = TempDir::new().unwrap();
        write_config(
            temp_dir.path(),
            r#"{ "publish": { "prepublish": { "scripts": ["echo ok"] } } }"#,
        );
        let ctx = RunContext::resolve_from(temp_dir.path());

        assert_eq!(run_in(&ctx).unwrap(), exit_codes::SUCCESS);
    }

    #[cfg(unix)]
    #[test]
    fn run_in_propagates_script_failure() {
        let temp_dir = TempDir::new().unwrap();
        write_config(
            temp_dir.path(),
            r#"{ "publish": { "prepublish": { "scripts": ["exit 9"] } } }"#,
        );
        let ctx = RunContext::resolve_from(temp_dir.path());

        let err = run_in(&ctx).unwrap_err();

        assert!(matches!(err, PrepubError::CommandFailed(_)));
        assert!(err.to_string().contains("exit code 9"));
    }

    #[test]
    fn run_in_rejects_invalid_config_before_executing() {
        let temp_dir = TempDir::new().unwrap();
        write_config(
            temp_dir.path(),
            r#"{ "publish": { "prepublish": { "scripts": ["echo ran > marker.txt", 42] } } }"#,
        );
        let ctx = RunContext::resolve_from(temp_dir.path());

        let err = run_in(&ctx).unwrap_err();

        assert!(matches!(err, PrepubError::ConfigValidation(_)));
        assert!(!temp_dir.path().join("marker.txt").exists());
    }
}
