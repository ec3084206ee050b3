//! Logging and observability
//!
//! This module provides structured logging setup with:
//! - Configurable log levels
//! - Optional JSON formatting for production
//!
//! The crate is a library, so this only installs a console subscriber;
//! file sinks and rotation belong to embedding binaries.
//!
//! # Example
//!
//! ```no_run
//! use veil::logging::init_logging;
//!
//! init_logging("info", false).expect("Failed to initialize logging");
//!
//! tracing::info!("Run started");
//! ```

use crate::domain::{Result, VeilError};
use tracing::Level;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{EnvFilter, Layer};

/// Initialize the logging system
///
/// # Arguments
///
/// * `log_level_str` - Log level as a string (trace, debug, info, warn, error)
/// * `json` - Emit JSON-formatted events instead of human-readable ones
///
/// # Errors
///
/// Returns an error for an unrecognized log level. Calling this twice in
/// one process fails inside `tracing-subscriber`; initialize once.
pub fn init_logging(log_level_str: &str, json: bool) -> Result<()> {
    let log_level = parse_log_level(log_level_str)?;

    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format!("veil={}", log_level)));

    if json {
        let layer = tracing_subscriber::fmt::layer()
            .json()
            .with_target(true)
            .with_filter(env_filter);
        tracing_subscriber::registry().with(layer).init();
    } else {
        let layer = tracing_subscriber::fmt::layer()
            .with_target(true)
            .with_filter(env_filter);
        tracing_subscriber::registry().with(layer).init();
    }

    Ok(())
}

/// Parse log level from string
fn parse_log_level(level_str: &str) -> Result<Level> {
    match level_str.to_lowercase().as_str() {
        "trace" => Ok(Level::TRACE),
        "debug" => Ok(Level::DEBUG),
        "info" => Ok(Level::INFO),
        "warn" => Ok(Level::WARN),
        "error" => Ok(Level::ERROR),
        _ => Err(VeilError::Configuration(format!(
            "Invalid log level: {}. Must be one of: trace, debug, info, warn, error",
            level_str
        ))),
    }
}
