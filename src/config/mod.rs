//! Configuration model for prepub.
//!
//! This module defines loading and validation of `npm-scripts.json`:
//! C-style comments are blanked out, the remaining JSON is parsed, and the
//! `publish.prepublish.scripts` chain is checked top-down in a fixed order
//! so every failure names the exact entry that is missing or mistyped.

mod comments;
mod model;
mod operations;


// Re-export public API
pub use comments::strip_json_comments;
pub use model::PrepublishConfig;
