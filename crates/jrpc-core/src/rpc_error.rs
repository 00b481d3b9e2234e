// Rust guideline compliant 2026-10-19

//! Structured RPC failure descriptor.
//!
//! An [`RpcCallError`] is what a service writes into the `error` field of a
//! response when a call fails in a known way. Its category determines the
//! HTTP status the response is routed with.

use crate::category::Category;
use crate::classifier::Unrecognized;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::fmt;

/// Structured description of a failed RPC call.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "RpcCallErrorWire")]
pub struct RpcCallError {
    /// Failure category, written as its HTTP status.
    pub category: Category,
    /// Service-specific error code.
    pub code: String,
    /// Human-readable message.
    pub message: String,
    /// Name of the service that raised the error.
    pub source: String,
    /// Free-form extra data.
    pub data: String,
    /// Whether the caller may retry the call.
    pub retriable: bool,
}

#[derive(Deserialize)]
struct RpcCallErrorWire {
    category: Category,
    message: String,
    #[serde(default)]
    code: String,
    #[serde(default)]
    source: String,
    #[serde(default)]
    data: String,
    #[serde(default)]
    retriable: Option<bool>,
}

impl From<RpcCallErrorWire> for RpcCallError {
    fn from(wire: RpcCallErrorWire) -> Self {
        Self {
            retriable: wire.retriable.unwrap_or_else(|| wire.category.is_retriable()),
            category: wire.category,
            code: wire.code,
            message: wire.message,
            source: wire.source,
            data: wire.data,
        }
    }
}

impl RpcCallError {
    /// Creates a descriptor with empty code, source and data.
    ///
    /// Retriability starts at the category default.
    #[must_use]
    pub fn new(category: Category, message: impl Into<String>) -> Self {
        Self {
            category,
            code: String::new(),
            message: message.into(),
            source: String::new(),
            data: String::new(),
            retriable: category.is_retriable(),
        }
    }

    /// Sets the service-specific error code.
    #[must_use]
    pub fn with_code(mut self, code: impl Into<String>) -> Self {
        self.code = code.into();
        self
    }

    /// Sets the originating service name.
    #[must_use]
    pub fn with_source(mut self, source: impl Into<String>) -> Self {
        self.source = source.into();
        self
    }

    /// Sets the extra data.
    #[must_use]
    pub fn with_data(mut self, data: impl Into<String>) -> Self {
        self.data = data.into();
        self
    }

    /// Overrides the category's default retriability.
    #[must_use]
    pub fn with_retriable(mut self, retriable: bool) -> Self {
        self.retriable = retriable;
        self
    }

    /// Returns the HTTP status of the descriptor's category.
    #[must_use]
    pub fn http_status(&self) -> u16 {
        self.category.http_status()
    }

    /// Converts the descriptor to its JSON object form.
    #[must_use]
    pub fn to_json(&self) -> Value {
        serde_json::json!({
            "category": self.category.http_status(),
            "code": self.code,
            "message": self.message,
            "source": self.source,
            "data": self.data,
            "retriable": self.retriable,
        })
    }

    /// Parses a descriptor from the text form of a JSON object.
    ///
    /// # Errors
    ///
    /// Returns [`Unrecognized`] if:
    /// - The text is not a JSON object
    /// - `category` is missing or not a known HTTP status
    /// - `message` is missing or not a string
    /// - An optional field has the wrong type
    pub fn from_json(text: &str) -> Result<Self, Unrecognized> {
        let value: Value = serde_json::from_str(text)
            .map_err(|e| Unrecognized::new(format!("not valid JSON: {}", e)))?;
        if !value.is_object() {
            return Err(Unrecognized::new("not a JSON object"));
        }
        serde_json::from_value(value).map_err(|e| Unrecognized::new(e.to_string()))
    }
}

impl fmt::Display for RpcCallError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.category, self.message)
    }
}

impl std::error::Error for RpcCallError {}
