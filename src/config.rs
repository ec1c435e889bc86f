//! Render options loaded from a TOML file.

use crate::error::Error;
use crate::{RenderOptions, Result};
use std::path::Path;

/// Parses options from TOML text. Missing keys keep their defaults.
pub fn from_toml_str(content: &str) -> std::result::Result<RenderOptions, toml::de::Error> {
    toml::from_str(content)
}

/// Loads options from a TOML file.
pub fn load_from_path<P: AsRef<Path>>(path: P) -> Result<RenderOptions> {
    let path = path.as_ref();
    let content = std::fs::read_to_string(path).map_err(|source| Error::ConfigRead {
        path: path.to_path_buf(),
        source,
    })?;
    let options = from_toml_str(&content).map_err(|source| Error::ConfigParse {
        path: path.to_path_buf(),
        source,
    })?;
    log::debug!("loaded render options from {}", path.display());
    Ok(options)
}
