//! Telemetry setup

use tracing_appender::rolling::{RollingFileAppender, Rotation};
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::error::AppError;

/// Initializes the global subscriber.
///
/// `RUST_LOG` drives the filter (default `info`), `LOG_FORMAT=json` switches
/// stdout to JSON, and `LOG_DIR` adds a daily rolling file layer.
pub fn init_telemetry() -> Result<(), AppError> {
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let log_format = std::env::var("LOG_FORMAT").unwrap_or_else(|_| "pretty".to_string());

    let file_layer = match std::env::var("LOG_DIR") {
        Ok(dir) => {
            let appender = RollingFileAppender::builder()
                .rotation(Rotation::DAILY)
                .filename_prefix("seed-installer")
                .filename_suffix("log")
                .build(dir)
                .map_err(|e| AppError::TelemetryError(e.to_string()))?;
            Some(fmt::layer().with_writer(appender).with_ansi(false).with_target(true))
        }
        Err(_) => None,
    };

    let registry = tracing_subscriber::registry().with(env_filter).with(file_layer);

    let result = match log_format.as_str() {
        "json" => registry
            .with(fmt::layer().json().with_writer(std::io::stdout).with_target(true))
            .try_init(),
        _ => registry
            .with(fmt::layer().with_writer(std::io::stdout).with_target(true))
            .try_init(),
    };

    result.map_err(|e| AppError::TelemetryError(e.to_string()))
}
