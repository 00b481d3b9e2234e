// Rust guideline compliant 2026-10-19

//! Output formatting module for the jrpc CLI.
//!
//! This module provides functionality for formatting envelopes and error
//! descriptors in various output formats (JSON, table, plain text).

use jrpc_core::{OutputFormat, ResponseEnvelope, RpcCallError};
use serde_json::{json, Value};
use tabled::{builder::Builder, settings::Style};

/// Output formatter trait.
///
/// Defines the interface for formatting jrpc data in different output formats.
pub trait OutputFormatter {
    /// Formats a parsed response envelope, including its derived status.
    fn format_envelope(&self, envelope: &ResponseEnvelope) -> String;

    /// Formats a classified error descriptor.
    fn format_rpc_error(&self, error: &RpcCallError) -> String;

    /// Formats an error message for display.
    fn format_error(&self, error: &str) -> String;
}

/// JSON output formatter.
///
/// Formats values as valid JSON for machine consumption.
pub struct JsonFormatter {
    pretty: bool,
}

impl JsonFormatter {
    /// Creates a new JSON formatter.
    pub fn new(pretty: bool) -> Self {
        Self { pretty }
    }

    fn render(&self, value: &Value) -> String {
        let rendered = if self.pretty {
            serde_json::to_string_pretty(value)
        } else {
            serde_json::to_string(value)
        };
        rendered.unwrap_or_else(|_| json!({ "error": "Failed to serialize output" }).to_string())
    }
}

impl OutputFormatter for JsonFormatter {
    fn format_envelope(&self, envelope: &ResponseEnvelope) -> String {
        self.render(&json!({
            "status_code": envelope.status_code(),
            "response": envelope.to_json(),
        }))
    }

    fn format_rpc_error(&self, error: &RpcCallError) -> String {
        self.render(&json!({
            "category": error.category.to_string(),
            "http_status": error.http_status(),
            "retriable": error.retriable,
            "error": error.to_json(),
        }))
    }

    fn format_error(&self, error: &str) -> String {
        json!({ "error": error }).to_string()
    }
}

/// Table output formatter.
///
/// Formats values as human-readable field/value tables.
pub struct TableFormatter;

impl TableFormatter {
    fn table(rows: Vec<(&str, String)>) -> String {
        let mut builder = Builder::default();
        builder.push_record(vec!["Field", "Value"]);
        for (field, value) in rows {
            builder.push_record(vec![field.to_string(), value]);
        }

        let mut table = builder.build();
        table.with(Style::modern());
        table.to_string()
    }
}

impl OutputFormatter for TableFormatter {
    fn format_envelope(&self, envelope: &ResponseEnvelope) -> String {
        Self::table(vec![
            ("Status", envelope.status_code().to_string()),
            ("ID", envelope.id().to_string()),
            ("Result", envelope.result().to_string()),
            ("Error", envelope.error().to_string()),
        ])
    }

    fn format_rpc_error(&self, error: &RpcCallError) -> String {
        Self::table(vec![
            ("Category", error.category.to_string()),
            ("HTTP Status", error.http_status().to_string()),
            ("Retriable", error.retriable.to_string()),
            ("Code", error.code.clone()),
            ("Message", error.message.clone()),
            ("Source", error.source.clone()),
            ("Data", error.data.clone()),
        ])
    }

    fn format_error(&self, error: &str) -> String {
        format!("Error: {}", error)
    }
}

/// Plain text output formatter.
///
/// Formats values as simple plain text, one value per line.
pub struct PlainFormatter;

impl OutputFormatter for PlainFormatter {
    fn format_envelope(&self, envelope: &ResponseEnvelope) -> String {
        format!(
            "{}\n{}\n{}\n{}",
            envelope.status_code(),
            envelope.id(),
            envelope.result(),
            envelope.error()
        )
    }

    fn format_rpc_error(&self, error: &RpcCallError) -> String {
        format!(
            "{} {} {}\n{}",
            error.http_status(),
            error.category,
            error.retriable,
            error.message
        )
    }

    fn format_error(&self, error: &str) -> String {
        format!("Error: {}", error)
    }
}

/// Factory function to create an appropriate formatter.
///
/// # Arguments
/// * `format` - The desired output format
/// * `pretty` - Whether JSON output is pretty-printed (ignored for other formats)
pub fn create_formatter(format: OutputFormat, pretty: bool) -> Box<dyn OutputFormatter> {
    match format {
        OutputFormat::Json => Box::new(JsonFormatter::new(pretty)),
        OutputFormat::Table => Box::new(TableFormatter),
        OutputFormat::Plain => Box::new(PlainFormatter),
    }
}
