// Rust guideline compliant 2026-10-19

//! JSON-RPC response envelope.
//!
//! A [`ResponseEnvelope`] carries the `id`, `result` and `error` of a
//! response together with an HTTP status derived from the error. The status
//! never appears on the wire; it exists for routing and logging.

use crate::category::Category;
use crate::classifier::{ErrorClassifier, RpcErrorClassifier};
use crate::error::{Error, Result};
use crate::rpc_error::RpcCallError;
use serde::ser::{Serialize, SerializeStruct, Serializer};
use serde_json::{Map, Value};
use std::fmt;
use std::str::FromStr;

/// Name of the request identifier field.
pub const ID_FIELD: &str = "id";
/// Name of the error field.
pub const ERROR_FIELD: &str = "error";
/// Name of the result field.
pub const RESULT_FIELD: &str = "result";

/// Status of a response without a recognized error.
pub const STATUS_OK: u16 = 200;
/// Status of a response carrying an error that has no category.
pub const STATUS_INTERNAL_SERVER_ERROR: u16 = 500;

/// Immutable JSON-RPC response.
#[derive(Debug, Clone, PartialEq)]
pub struct ResponseEnvelope {
    id: Value,
    result: Value,
    error: Value,
    status_code: u16,
}

impl ResponseEnvelope {
    /// Creates an envelope from its four parts, stored as given.
    #[must_use]
    pub fn new(id: Value, result: Value, error: Value, status_code: u16) -> Self {
        Self {
            id,
            result,
            error,
            status_code,
        }
    }

    /// Creates a successful envelope with a null error and status 200.
    #[must_use]
    pub fn success(id: Value, result: Value) -> Self {
        Self::new(id, result, Value::Null, STATUS_OK)
    }

    /// Creates a failed envelope from a structured error.
    ///
    /// The result is null and the status is the error category's HTTP status.
    #[must_use]
    pub fn failure(id: Value, error: &RpcCallError) -> Self {
        Self::new(id, Value::Null, error.to_json(), error.http_status())
    }

    /// Returns the request identifier.
    #[must_use]
    pub fn id(&self) -> &Value {
        &self.id
    }

    /// Returns the result payload, JSON null when there is none.
    #[must_use]
    pub fn result(&self) -> &Value {
        &self.result
    }

    /// Returns the error payload, JSON null when there is none.
    #[must_use]
    pub fn error(&self) -> &Value {
        &self.error
    }

    /// Returns the HTTP status derived from the error.
    #[must_use]
    pub fn status_code(&self) -> u16 {
        self.status_code
    }

    /// Returns true if the error payload is not null.
    #[must_use]
    pub fn has_error(&self) -> bool {
        !self.error.is_null()
    }

    /// Splits the envelope into `(id, result, error, status_code)`.
    #[must_use]
    pub fn into_parts(self) -> (Value, Value, Value, u16) {
        (self.id, self.result, self.error, self.status_code)
    }

    /// Converts the envelope to its wire form.
    ///
    /// The object holds `id`, `error` and `result` in that order. The status
    /// code is not included.
    #[must_use]
    pub fn to_json(&self) -> Value {
        let mut map = Map::with_capacity(3);
        map.insert(ID_FIELD.to_string(), self.id.clone());
        map.insert(ERROR_FIELD.to_string(), self.error.clone());
        map.insert(RESULT_FIELD.to_string(), self.result.clone());
        Value::Object(map)
    }

    /// Renders the wire form as compact JSON text.
    #[must_use]
    pub fn to_json_string(&self) -> String {
        self.to_json().to_string()
    }

    /// Parses raw response text using [`RpcErrorClassifier`].
    ///
    /// # Errors
    ///
    /// See [`ResponseEnvelope::parse_with`].
    pub fn parse(raw: &str) -> Result<Self> {
        Self::parse_with(raw, &RpcErrorClassifier)
    }

    /// Parses raw response text, asking `classifier` to categorize
    /// structured errors.
    ///
    /// Absent `id`, `result` and `error` fields become JSON null. The status
    /// code is:
    /// - the category's HTTP status when the error is an object the
    ///   classifier recognizes
    /// - 200 for a blank string, or a one-element array holding one
    /// - 500 for any other non-null error
    /// - 200 when there is no error
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - `raw` is not valid JSON
    /// - `raw` is valid JSON but not an object
    pub fn parse_with<C>(raw: &str, classifier: &C) -> Result<Self>
    where
        C: ErrorClassifier + ?Sized,
    {
        tracing::trace!(len = raw.len(), "parsing response envelope");

        let value: Value = serde_json::from_str(raw)?;
        let mut response = match value {
            Value::Object(map) => map,
            other => return Err(Error::NotAnObject(json_kind(&other))),
        };

        let id = response.remove(ID_FIELD).unwrap_or(Value::Null);
        let error = response.remove(ERROR_FIELD).unwrap_or(Value::Null);
        let result = response.remove(RESULT_FIELD).unwrap_or(Value::Null);
        let status_code = error_status(&error, classifier);

        Ok(Self::new(id, result, error, status_code))
    }
}

/// Derives the HTTP status carried by an error payload.
fn error_status<C>(error: &Value, classifier: &C) -> u16
where
    C: ErrorClassifier + ?Sized,
{
    match error {
        Value::Null => STATUS_OK,
        Value::Object(_) => match classifier.classify(&error.to_string()) {
            Ok(category) => classified_status(category),
            Err(unrecognized) => unclassified_status(unrecognized.reason()),
        },
        other => match blank_message(other) {
            Some(true) => STATUS_OK,
            Some(false) => {
                tracing::debug!(
                    status_code = STATUS_INTERNAL_SERVER_ERROR,
                    "error message without category"
                );
                STATUS_INTERNAL_SERVER_ERROR
            }
            None => unclassified_status("error has no text form"),
        },
    }
}

/// Reads an unstructured error as text and reports whether it is blank.
///
/// A one-element array reads as its element. Returns `None` for values
/// without a text form (null elements, objects, other arrays).
fn blank_message(error: &Value) -> Option<bool> {
    match error {
        Value::String(message) => Some(is_blank(message)),
        Value::Number(_) | Value::Bool(_) => Some(false),
        Value::Array(items) if items.len() == 1 => blank_message(&items[0]),
        _ => None,
    }
}

/// True when every char is whitespace in the JVM sense: Unicode space,
/// line and paragraph separators other than the no-break spaces, plus
/// the ASCII controls U+0009..U+000D and U+001C..U+001F.
fn is_blank(text: &str) -> bool {
    text.chars().all(|c| match c {
        '\u{00A0}' | '\u{2007}' | '\u{202F}' => false,
        '\u{0009}'..='\u{000D}' | '\u{001C}'..='\u{001F}' => true,
        ' ' | '\u{1680}' | '\u{2000}'..='\u{200A}' => true,
        '\u{2028}' | '\u{2029}' | '\u{205F}' | '\u{3000}' => true,
        _ => false,
    })
}

fn unclassified_status(reason: &str) -> u16 {
    tracing::warn!(
        reason,
        status_code = STATUS_INTERNAL_SERVER_ERROR,
        "unclassified structured error"
    );
    STATUS_INTERNAL_SERVER_ERROR
}

fn classified_status(category: Category) -> u16 {
    let status_code = category.http_status();
    tracing::debug!(%category, status_code, "classified structured error");
    status_code
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

impl Serialize for ResponseEnvelope {
    fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let mut state = serializer.serialize_struct("ResponseEnvelope", 3)?;
        state.serialize_field(ID_FIELD, &self.id)?;
        state.serialize_field(ERROR_FIELD, &self.error)?;
        state.serialize_field(RESULT_FIELD, &self.result)?;
        state.end()
    }
}

impl FromStr for ResponseEnvelope {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse(s)
    }
}

impl fmt::Display for ResponseEnvelope {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "ResponseEnvelope[{}={},{}={},{}={}]",
            ID_FIELD, self.id, RESULT_FIELD, self.result, ERROR_FIELD, self.error
        )
    }
}
