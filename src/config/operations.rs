//! Config loading, parsing, and validation operations.

use super::comments::strip_json_comments;
use super::model::PrepublishConfig;
use crate::context::CONFIG_FILE_NAME;
use crate::error::{PrepubError, Result};
use serde_json::Value;
use std::path::Path;

impl PrepublishConfig {
    /// Load and validate the config file at `path`.
    ///
    /// # Arguments
    ///
    /// * `path` - Path to the npm-scripts.json file
    ///
    /// # Returns
    ///
    /// * `Ok(PrepublishConfig)` - Successfully loaded and validated config
    /// * `Err(PrepubError::ConfigNotFound)` - Missing, not a regular file, or unreadable
    /// * `Err(PrepubError::ConfigParse)` - Malformed JSON after comment stripping
    /// * `Err(PrepubError::ConfigValidation)` - Shape violation
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();

        match path.metadata() {
            Ok(meta) if meta.is_file() => {}
            Ok(_) => {
                return Err(PrepubError::ConfigNotFound(format!(
                    "'{}' is not a regular file",
                    CONFIG_FILE_NAME
                )));
            }
            Err(_) => {
                return Err(PrepubError::ConfigNotFound(format!(
                    "'{}' not found in root path",
                    CONFIG_FILE_NAME
                )));
            }
        }

        let source = std::fs::read_to_string(path).map_err(|e| {
            PrepubError::ConfigNotFound(format!("failed to read '{}': {}", CONFIG_FILE_NAME, e))
        })?;

        Self::from_json(&source)
    }

    /// Parse and validate a config document from its raw text.
    ///
    /// C-style comments are stripped before parsing, so the text may be
    /// annotated JSON rather than strict JSON.
    pub fn from_json(source: &str) -> Result<Self> {
        let stripped = strip_json_comments(source);

        let document: Value = serde_json::from_str(&stripped).map_err(|e| {
            PrepubError::ConfigParse(format!("failed to parse '{}': {}", CONFIG_FILE_NAME, e))
        })?;

        validate_document(&document)
    }
}

/// Walk the document top-down, failing at the first shape violation.
///
/// The check order is part of the contract: `publish` must be an object,
/// then `publish.prepublish` must be an object, then `scripts` must be
/// present, then an array, then all strings. "Missing" and "wrong type"
/// produce distinct messages at the levels where both can happen.
fn validate_document(document: &Value) -> Result<PrepublishConfig> {
    let publish = match document.get("publish") {
        Some(Value::Object(entry)) => entry,
        _ => {
            return Err(validation_error(
                "'publish' entry is not an object or is missing",
            ));
        }
    };

    let prepublish = match publish.get("prepublish") {
        Some(Value::Object(entry)) => entry,
        _ => {
            return Err(validation_error(
                "'publish.prepublish' entry is not an object or is missing",
            ));
        }
    };

    let scripts = match prepublish.get("scripts") {
        None => {
            return Err(validation_error(
                "'publish.prepublish.scripts' entry is missing",
            ));
        }
        Some(Value::Array(values)) => values,
        Some(_) => {
            return Err(validation_error(
                "'publish.prepublish.scripts' entry is not an array",
            ));
        }
    };

    let mut collected = Vec::with_capacity(scripts.len());
    for (index, value) in scripts.iter().enumerate() {
        match value.as_str() {
            Some(script) => collected.push(script.to_string()),
            None => {
                return Err(validation_error(&format!(
                    "'publish.prepublish.scripts' entry at index {} is not a string",
                    index
                )));
            }
        }
    }

    Ok(PrepublishConfig { scripts: collected })
}

fn validation_error(message: &str) -> PrepubError {
    PrepubError::ConfigValidation(format!("{} in '{}'", message, CONFIG_FILE_NAME))
}
