// Rust guideline compliant 2026-10-19

//! Classification of structured errors into categories.

use crate::category::Category;
use crate::rpc_error::RpcCallError;
use thiserror::Error;

/// Outcome of a classifier that could not map an error to a category.
///
/// This is not a hard failure: callers fall back to treating the error as
/// unstructured.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("Unrecognized error: {reason}")]
pub struct Unrecognized {
    reason: String,
}

impl Unrecognized {
    /// Creates an outcome with the reason classification failed.
    pub fn new(reason: impl Into<String>) -> Self {
        Self {
            reason: reason.into(),
        }
    }

    /// Returns why the error was not recognized.
    #[must_use]
    pub fn reason(&self) -> &str {
        &self.reason
    }
}

/// Maps the text form of a JSON error object to a [`Category`].
pub trait ErrorClassifier {
    /// Classifies a JSON error object given as text.
    ///
    /// # Errors
    ///
    /// Returns [`Unrecognized`] if the text does not follow the schema the
    /// classifier understands.
    fn classify(&self, text: &str) -> Result<Category, Unrecognized>;
}

impl<F> ErrorClassifier for F
where
    F: Fn(&str) -> Result<Category, Unrecognized>,
{
    fn classify(&self, text: &str) -> Result<Category, Unrecognized> {
        self(text)
    }
}

/// Classifier for errors following the [`RpcCallError`] schema.
#[derive(Debug, Clone, Copy, Default)]
pub struct RpcErrorClassifier;

impl ErrorClassifier for RpcErrorClassifier {
    fn classify(&self, text: &str) -> Result<Category, Unrecognized> {
        RpcCallError::from_json(text).map(|error| error.category)
    }
}
