// Rust guideline compliant 2026-10-19

//! Command implementations for the jrpc CLI.

pub mod classify;
pub mod init;
pub mod inspect;

use anyhow::{Context, Result};
use std::io::Read;

/// Reads command input from `path`, or from stdin when `path` is `None` or `-`.
///
/// # Errors
///
/// Returns an error if the file or stdin cannot be read.
pub fn read_input(path: Option<&str>) -> Result<String> {
    match path {
        None | Some("-") => {
            let mut buf = String::new();
            std::io::stdin()
                .read_to_string(&mut buf)
                .context("Failed to read stdin")?;
            Ok(buf)
        }
        Some(path) => {
            std::fs::read_to_string(path).with_context(|| format!("Failed to read {}", path))
        }
    }
}
