//! Configuration loading errors.

use std::path::PathBuf;

/// Error returned when a [`PaintConfig`](super::PaintConfig) cannot be loaded.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// The configuration file could not be read.
    #[error("failed to read paint config '{}': {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    /// The YAML document did not describe a valid configuration.
    #[error("invalid YAML paint config: {0}")]
    Yaml(#[from] serde_yaml::Error),
    /// The JSON document did not describe a valid configuration.
    #[error("invalid JSON paint config: {0}")]
    Json(#[from] serde_json::Error),
    /// The file extension is not one of `.yaml`, `.yml` or `.json`.
    #[error("unsupported paint config format '{}' (expected .yaml, .yml or .json)", .path.display())]
    UnsupportedFormat { path: PathBuf },
}
