//! Configuration loading errors.

use std::path::PathBuf;

/// Config load error
#[derive(Debug, Clone, thiserror::Error)]
pub enum ConfigLoadError {
    /// Config file could not be read
    #[error("IO error reading {}: {message}", path.display())]
    Io {
        /// File that failed to load
        path: PathBuf,
        /// Underlying error message
        message: String,
    },
    /// YAML did not describe a valid configuration
    #[error("Parse error: {0}")]
    Parse(String),
}
