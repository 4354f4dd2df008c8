//! Working-directory resolution for prepub.
//!
//! npm runs lifecycle scripts with the package root as the working
//! directory, and `npm-scripts.json` lives at a fixed name directly under
//! that root. Commands resolve a context once and pass it down, so the
//! whole pipeline can be pointed at a scratch directory in tests.

use crate::error::{PrepubError, Result};
use std::env;
use std::path::{Path, PathBuf};

/// Configuration file name, resolved against the package root.
pub const CONFIG_FILE_NAME: &str = "npm-scripts.json";

/// Resolved paths for a prepub invocation.
#[derive(Debug, Clone)]
pub struct RunContext {
    /// Directory the lifecycle script runs from (the package root).
    pub root: PathBuf,
}

impl RunContext {
    /// Resolve the context from the current working directory.
    ///
    /// # Returns
    ///
    /// * `Ok(RunContext)` - Successfully resolved context
    /// * `Err(PrepubError::UserError)` - If the working directory is unreadable
    pub fn resolve() -> Result<Self> {
        let root = env::current_dir().map_err(|e| {
            PrepubError::UserError(format!("failed to get current working directory: {}", e))
        })?;

        Ok(Self::resolve_from(root))
    }

    /// Build a context rooted at a specific directory.
    ///
    /// This is useful for testing or when the working directory is known.
    pub fn resolve_from<P: AsRef<Path>>(root: P) -> Self {
        Self {
            root: root.as_ref().to_path_buf(),
        }
    }

    /// Get the path to the config file.
    pub fn config_path(&self) -> PathBuf {
        self.root.join(CONFIG_FILE_NAME)
    }
}
