//! TOML configuration for hubwatch binaries.

mod config;
mod errors;

pub use config::{Config, LoggingConfig, VerifierConfig};
pub use errors::{ConfigError, ConfigResult};
