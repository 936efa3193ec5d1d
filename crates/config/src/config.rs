use std::{
    fs,
    path::{Path, PathBuf},
};

use hubwatch_primitives::DomainId;
use serde::{Deserialize, Serialize};

use crate::{ConfigError, ConfigResult};

/// Default value for `log_file_prefix` in [`LoggingConfig`].
const DEFAULT_LOG_FILE_PREFIX: &str = "hubwatch";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VerifierConfig {
    /// Domain whose logs this instance observes. Checkpoints from any other
    /// origin are rejected.
    pub local_domain: DomainId,
}

/// Logging configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Service label to append to the service name (e.g., "prod", "dev").
    #[serde(skip_serializing_if = "Option::is_none")]
    pub service_label: Option<String>,

    /// Directory path for file-based logging.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub log_dir: Option<PathBuf>,

    /// Prefix for log file names.
    #[serde(default = "default_log_file_prefix")]
    pub log_file_prefix: String,

    /// Use JSON format for logs instead of compact format.
    #[serde(default)]
    pub json_format: bool,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            service_label: None,
            log_dir: None,
            log_file_prefix: default_log_file_prefix(),
            json_format: false,
        }
    }
}

fn default_log_file_prefix() -> String {
    DEFAULT_LOG_FILE_PREFIX.to_owned()
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    pub verifier: VerifierConfig,

    /// Logging configuration (optional section in TOML).
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl Config {
    pub fn from_toml_str(s: &str) -> ConfigResult<Self> {
        Ok(toml::from_str(s)?)
    }

    pub fn load(path: &Path) -> ConfigResult<Self> {
        let raw = fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_owned(),
            source,
        })?;
        Self::from_toml_str(&raw)
    }
}
