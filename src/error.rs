//! Error types for the prepub CLI.
//!
//! Uses thiserror for derive macros and provides user-actionable error messages.

use crate::exit_codes;
use thiserror::Error;

/// Main error type for prepub operations.
///
/// The config variants mirror the stages of loading `npm-scripts.json`, so
/// a failure always names the stage it happened in. Every variant carries a
/// complete, ready-to-print message.
#[derive(Error, Debug)]
pub enum PrepubError {
    /// `npm-scripts.json` is missing, not a regular file, or unreadable.
    #[error("{0}")]
    ConfigNotFound(String),

    /// `npm-scripts.json` is not valid JSON once comments are stripped.
    #[error("{0}")]
    ConfigParse(String),

    /// The document parses but violates the `publish.prepublish.scripts` shape.
    #[error("{0}")]
    ConfigValidation(String),

    /// A prepublish script could not be spawned or exited unsuccessfully.
    #[error("{0}")]
    CommandFailed(String),

    /// CLI-level misuse: unresolvable working directory, refused overwrite.
    #[error("{0}")]
    UserError(String),
}

impl PrepubError {
    /// Returns the appropriate exit code for this error type.
    ///
    /// All failures share exit code 1. The missing-vs-mistyped distinction
    /// lives in the message text, not in the code.
    pub fn exit_code(&self) -> i32 {
        match self {
            PrepubError::ConfigNotFound(_)
            | PrepubError::ConfigParse(_)
            | PrepubError::ConfigValidation(_)
            | PrepubError::CommandFailed(_)
            | PrepubError::UserError(_) => exit_codes::FAILURE,
        }
    }
}

/// Result type alias for prepub operations.
pub type Result<T> = std::result::Result<T, PrepubError>;
