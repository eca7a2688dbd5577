//! Configuration loading from disk.

use std::fs;
use std::path::Path;

use thiserror::Error;

use crate::config::schema::Options;

/// Error type for configuration loading.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Parse error: {0}")]
    Parse(#[from] toml::de::Error),
}

/// Parse options from TOML text.
pub fn parse_options(content: &str) -> Result<Options, ConfigError> {
    Ok(toml::from_str(content)?)
}

/// Load options from a TOML file.
pub fn load_options(path: &Path) -> Result<Options, ConfigError> {
    let content = fs::read_to_string(path)?;
    let options = parse_options(&content)?;

    tracing::debug!(
        path = ?path,
        enabled = options.enabled,
        log_level = %options.log_level,
        "Logger options loaded"
    );
    Ok(options)
}
