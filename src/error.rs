//! Error types for roadmark.
//!
//! Rendering itself never fails; errors only come from reading input and
//! configuration files.

use std::path::PathBuf;
use thiserror::Error;

/// Result type for roadmark operations.
pub type Result<T> = std::result::Result<T, Error>;

#[derive(Error, Debug)]
pub enum Error {
    /// Error occurred while reading input or writing output.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to read config file at {path}: {source}")]
    ConfigRead {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Failed to parse config file at {path}: {source}")]
    ConfigParse {
        path: PathBuf,
        source: toml::de::Error,
    },
}
