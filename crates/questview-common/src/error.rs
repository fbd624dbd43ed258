//! Error types for questview.
//!
//! Deriving a display model never fails; these errors only cover reading
//! inputs and configuration from disk.

use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur while loading a quest definition or progress snapshot.
#[derive(Debug, Error)]
pub enum LoadError {
    /// Failed to read file.
    #[error("Failed to read {path}: {source}")]
    Io {
        /// File that was being read
        path: PathBuf,
        /// Underlying I/O error
        source: std::io::Error,
    },

    /// Failed to parse JSON.
    #[error("Failed to parse JSON: {0}")]
    Json(#[from] serde_json::Error),

    /// Failed to parse RON.
    #[error("Failed to parse RON: {0}")]
    Ron(#[from] ron::error::SpannedError),

    /// File extension is neither `.json` nor `.ron`.
    #[error("Unsupported file format: {0}")]
    UnsupportedFormat(PathBuf),
}

/// Result type for loading operations.
pub type LoadResult<T> = Result<T, LoadError>;

/// Errors that can occur while reading or writing panel configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// IO errors
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Failed to parse TOML.
    #[error("Failed to parse config TOML: {0}")]
    Parse(#[from] toml::de::Error),

    /// Failed to serialize TOML.
    #[error("Failed to serialize config TOML: {0}")]
    Serialize(#[from] toml::ser::Error),
}

/// Result type for configuration operations.
pub type ConfigResult<T> = Result<T, ConfigError>;
