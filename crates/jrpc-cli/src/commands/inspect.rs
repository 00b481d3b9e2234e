// Rust guideline compliant 2026-10-19

//! Implementation of the `jrpc inspect` command.
//!
//! Parses raw response text into an envelope and shows its fields together
//! with the HTTP status derived from the error.

use crate::OutputFormatter;
use anyhow::{Context, Result};
use jrpc_core::ResponseEnvelope;

/// Parses `raw` and formats the resulting envelope.
///
/// # Errors
///
/// Returns an error if `raw` is not a JSON object.
pub fn render(raw: &str, formatter: &dyn OutputFormatter) -> Result<String> {
    let envelope = ResponseEnvelope::parse(raw).context("Failed to parse response")?;
    tracing::info!(
        status_code = envelope.status_code(),
        envelope = %envelope,
        "inspected response"
    );
    Ok(formatter.format_envelope(&envelope))
}

/// Reads a response from `input` (file or stdin) and prints it.
///
/// # Errors
///
/// Returns an error if the input cannot be read or parsed.
pub fn execute(input: Option<&str>, formatter: &dyn OutputFormatter) -> Result<()> {
    let raw = super::read_input(input)?;
    println!("{}", render(&raw, formatter)?);
    Ok(())
}
