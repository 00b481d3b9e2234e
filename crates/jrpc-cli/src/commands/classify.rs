// Rust guideline compliant 2026-10-19

//! Implementation of the `jrpc classify` command.

use crate::OutputFormatter;
use anyhow::Result;
use jrpc_core::RpcCallError;

/// Classifies the error object in `raw` and formats its descriptor.
///
/// # Errors
///
/// Returns an error if `raw` does not follow the structured error schema.
pub fn render(raw: &str, formatter: &dyn OutputFormatter) -> Result<String> {
    let error = RpcCallError::from_json(raw.trim())?;
    tracing::info!(category = %error.category, "classified error");
    Ok(formatter.format_rpc_error(&error))
}

/// Reads an error object from `input` (file or stdin) and prints its
/// classification.
///
/// # Errors
///
/// Returns an error if the input cannot be read or classified.
pub fn execute(input: Option<&str>, formatter: &dyn OutputFormatter) -> Result<()> {
    let raw = super::read_input(input)?;
    println!("{}", render(&raw, formatter)?);
    Ok(())
}
