//! Logging initialization.

use std::io;

use tracing::*;
use tracing_appender::rolling::RollingFileAppender;
use tracing_subscriber::{
    EnvFilter, Layer, Registry, fmt::layer, layer::SubscriberExt, util::SubscriberInitExt,
};

use super::types::LoggerConfig;

pub(super) type BoxedLayer = Box<dyn Layer<Registry> + Send + Sync>;

/// Initializes the global subscriber with the provided config.
///
/// # Panics
///
/// If a global subscriber was already installed.
pub fn init(config: LoggerConfig) {
    tracing_subscriber::registry()
        .with(build_layers(&config))
        .init();

    info!(
        service_name = %config.service_name,
        file_logging = config.file_logging_config.is_some(),
        "logging initialized"
    );
}

/// Defaults to INFO, still overridable through `RUST_LOG`.
fn env_filter() -> EnvFilter {
    EnvFilter::builder()
        .with_default_directive(Level::INFO.into())
        .from_env_lossy()
}

/// Console layer plus the optional file layer.
pub(super) fn build_layers(config: &LoggerConfig) -> Vec<BoxedLayer> {
    let console = &config.console_config;

    // Console output goes to stderr so stdout stays free for command output.
    let console_layer = if console.json_format {
        layer()
            .json()
            .with_writer(io::stderr)
            .with_filter(env_filter())
            .boxed()
    } else {
        layer()
            .compact()
            .with_writer(io::stderr)
            .with_ansi(console.ansi)
            .with_filter(env_filter())
            .boxed()
    };

    let mut layers = vec![console_layer];

    if let Some(file_config) = &config.file_logging_config {
        let file_appender = RollingFileAppender::new(
            file_config.rotation.clone(),
            &file_config.directory,
            &file_config.file_name_prefix,
        );

        let file_layer = if file_config.json_format {
            layer()
                .json()
                .with_writer(file_appender)
                .with_ansi(false) // No color codes in files
                .with_filter(env_filter())
                .boxed()
        } else {
            layer()
                .compact()
                .with_writer(file_appender)
                .with_ansi(false) // No color codes in files
                .with_filter(env_filter())
                .boxed()
        };
        layers.push(file_layer);
    }

    layers
}
