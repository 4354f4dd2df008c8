// Shared test helpers for integration tests.
//
// Runs the real binary in a scratch directory with the npm detection
// variables under explicit control: they are cleared from every child
// first, so the suite behaves the same whether or not it was itself
// launched from an npm script.
#![allow(dead_code)]

use std::path::{Path, PathBuf};
use std::process::Command;

/// Detection variables cleared from every child before test-specific
/// values are applied.
const NPM_VARS: &[&str] = &["npm_command", "npm_config_argv", "NPM_IN_PUBLISH_TEST"];

pub fn binary_path() -> PathBuf {
    let path = PathBuf::from(env!("CARGO_BIN_EXE_prepub"));
    assert!(path.exists(), "binary not found at {}", path.display());
    path
}

/// Runs `prepub` with `args` in `dir`, with exactly `envs` of the npm
/// detection variables set.
/// Returns (stdout, stderr, exit_code).
pub fn run_prepub(dir: &Path, args: &[&str], envs: &[(&str, &str)]) -> (String, String, i32) {
    let mut cmd = Command::new(binary_path());
    cmd.args(args).current_dir(dir);
    for var in NPM_VARS {
        cmd.env_remove(var);
    }
    for (key, value) in envs {
        cmd.env(key, value);
    }

    let output = cmd.output().expect("failed to execute prepub binary");

    let stdout = String::from_utf8(output.stdout).expect("stdout not valid UTF-8");
    let stderr = String::from_utf8(output.stderr).expect("stderr not valid UTF-8");
    let exit_code = output.status.code().unwrap_or(-1);
    (stdout, stderr, exit_code)
}

pub fn write_config(dir: &Path, contents: &str) {
    std::fs::write(dir.join("npm-scripts.json"), contents).expect("failed to write config");
}

/// Builds a well-formed config document around the given script lines.
pub fn scripts_config(scripts: &[&str]) -> String {
    serde_json::json!({
        "publish": { "prepublish": { "scripts": scripts } }
    })
    .to_string()
}
