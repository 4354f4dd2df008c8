//! Config struct definition.

/// Validated `publish.prepublish` section of `npm-scripts.json`.
///
/// Only what the runner consumes is kept. Sibling entries elsewhere in the
/// document are ignored for forward compatibility, so the same file can
/// carry configuration for other lifecycle tooling.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PrepublishConfig {
    /// Shell commands to execute in order during a genuine publish.
    pub scripts: Vec<String>,
}
