// Rust guideline compliant 2026-10-19

//! Implementation of the `jrpc init` command.

use anyhow::{bail, Context, Result};
use jrpc_core::Config;
use std::path::Path;

/// Writes a configuration file holding the default values.
///
/// # Errors
///
/// Returns an error if:
/// - The file already exists and `force` is not set
/// - The file cannot be written
pub fn execute(path: &Path, force: bool) -> Result<()> {
    if path.exists() && !force {
        bail!(
            "Config file {} already exists. Use --force to overwrite.",
            path.display()
        );
    }

    Config::default()
        .save(path)
        .with_context(|| format!("Failed to write config to {}", path.display()))?;
    tracing::info!(path = %path.display(), "wrote default config");
    println!("Wrote default config to {}", path.display());
    Ok(())
}
