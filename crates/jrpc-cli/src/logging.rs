// Rust guideline compliant 2026-10-19

//! Tracing setup for the jrpc CLI.

use anyhow::{bail, Result};
use tracing::Level;
use tracing_subscriber::fmt;

/// Installs a JSON subscriber writing to stderr, filtered at `level`.
///
/// Installing twice is not an error; the first subscriber stays in place.
///
/// # Errors
///
/// Returns an error if `level` is not a known log level.
pub fn init_tracing(level: &str) -> Result<()> {
    let level = parse_log_level(level)?;

    let subscriber = fmt()
        .with_max_level(level)
        .with_target(false)
        .json()
        .with_writer(std::io::stderr)
        .finish();
    let _ = tracing::subscriber::set_global_default(subscriber);
    Ok(())
}

/// Parses a case-insensitive log level name.
///
/// # Errors
///
/// Returns an error for names other than error, warn, info, debug and trace.
pub fn parse_log_level(level: &str) -> Result<Level> {
    match level.to_lowercase().as_str() {
        "error" => Ok(Level::ERROR),
        "warn" => Ok(Level::WARN),
        "info" => Ok(Level::INFO),
        "debug" => Ok(Level::DEBUG),
        "trace" => Ok(Level::TRACE),
        _ => bail!("Invalid log level: {}", level),
    }
}
