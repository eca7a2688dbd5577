//! Configuration schema definitions.

use serde::{Deserialize, Serialize};

use crate::record::level::Level;

/// Logger options.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default)]
pub struct Options {
    /// Write records to stdout; when false they are discarded (useful for
    /// test environments).
    pub enabled: bool,

    /// Version of the application, attached to every record as `v`.
    #[serde(alias = "appVersion")]
    pub app_version: String,

    /// Minimum severity: "Debug", "Info" or "Error".
    #[serde(alias = "logLevel")]
    pub log_level: String,
}

impl Options {
    /// Minimum severity named by `log_level`.
    ///
    /// Matching ignores case and an optional `Level` suffix, so `"Debug"`,
    /// `"debug"` and `"DebugLevel"` all select debug. Anything else selects
    /// info.
    pub fn level(&self) -> Level {
        let name = self.log_level.trim();
        let name = name
            .strip_suffix("Level")
            .or_else(|| name.strip_suffix("level"))
            .unwrap_or(name);
        name.parse().unwrap_or(Level::Info)
    }
}

impl Default for Options {
    fn default() -> Self {
        Self {
            enabled: true,
            app_version: String::new(),
            log_level: "Info".to_string(),
        }
    }
}
