//! Error types for loading policy exports.

use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur while loading a policy document.
#[derive(Debug, Error)]
pub enum RenderError {
    /// The export file could not be opened or read.
    #[error("failed to read {}: {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The content is not valid JSON or lacks a required key.
    #[error("failed to parse policy document: {0}")]
    Parse(#[from] serde_json::Error),
}
