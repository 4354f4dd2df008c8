//! Publish-mode detection.
//!
//! npm has historically fired the `prepublish` lifecycle hook on plain
//! installs and `npm pack` as well as on genuine publishes. This module
//! answers "is this invocation a real publish?" from the environment npm
//! hands to lifecycle scripts:
//!
//! - npm 7 and later set `npm_command` to the top-level command name;
//!   publish mode is exactly `npm_command == "publish"`.
//! - Older npm exposes its parsed invocation as `npm_config_argv`, a JSON
//!   object with a `cooked` array; publish mode means the first non-flag
//!   cooked argument is `publish`.
//! - `NPM_IN_PUBLISH_TEST` set to any non-empty value forces the gate
//!   open, for exercising publish pipelines without publishing.
//!
//! Detection is best-effort by contract: a missing or malformed variable
//! means "not publishing", never an error, so an odd environment cannot
//! break somebody's install.

use serde::Deserialize;

/// Variable npm 7+ sets to the top-level command name.
pub const ENV_NPM_COMMAND: &str = "npm_command";

/// Variable older npm sets to its parsed argv, serialized as JSON.
pub const ENV_NPM_CONFIG_ARGV: &str = "npm_config_argv";

/// Override variable: any non-empty value forces the gate open.
pub const ENV_PUBLISH_OVERRIDE: &str = "NPM_IN_PUBLISH_TEST";

/// Snapshot of the environment variables publish detection reads.
///
/// Taken once at startup via [`PublishEnv::from_process`]. Tests construct
/// values directly instead of mutating the process environment.
#[derive(Debug, Clone, Default)]
pub struct PublishEnv {
    pub npm_command: Option<String>,
    pub npm_config_argv: Option<String>,
    pub publish_override: Option<String>,
}

/// Payload shape of `npm_config_argv`.
///
/// npm serializes more fields (`original`, `remain`), but detection only
/// reads the cooked form.
#[derive(Debug, Deserialize)]
struct NpmArgv {
    #[serde(default)]
    cooked: Vec<String>,
}

impl PublishEnv {
    /// Snapshot the relevant variables from the process environment.
    pub fn from_process() -> Self {
        Self {
            npm_command: std::env::var(ENV_NPM_COMMAND).ok(),
            npm_config_argv: std::env::var(ENV_NPM_CONFIG_ARGV).ok(),
            publish_override: std::env::var(ENV_PUBLISH_OVERRIDE).ok(),
        }
    }

    /// True when the current invocation is a genuine `npm publish`.
    pub fn in_publish(&self) -> bool {
        if let Some(command) = &self.npm_command {
            // npm 7+: the explicit command name is authoritative. No argv
            // fallback, even if npm_config_argv is also present.
            return command == "publish";
        }

        self.cooked_command().is_some_and(|cmd| cmd == "publish")
    }

    /// True when the override variable is set to a non-empty value.
    pub fn override_active(&self) -> bool {
        self.publish_override
            .as_deref()
            .is_some_and(|value| !value.is_empty())
    }

    /// The gate: genuine publish, or explicit override.
    pub fn should_run(&self) -> bool {
        self.in_publish() || self.override_active()
    }

    /// First non-flag entry of the legacy `npm_config_argv` cooked array.
    ///
    /// Returns `None` when the variable is absent, is not the expected JSON
    /// shape, or contains only flags.
    fn cooked_command(&self) -> Option<String> {
        let raw = self.npm_config_argv.as_deref()?;
        let argv: NpmArgv = serde_json::from_str(raw).ok()?;
        argv.cooked.into_iter().find(|arg| !arg.starts_with('-'))
    }
}
