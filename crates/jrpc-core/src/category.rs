// Rust guideline compliant 2026-10-19

//! Error categories and their HTTP status mapping.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Category of an RPC failure.
///
/// Each category maps to a fixed HTTP status. On the wire a category is
/// written as that status code, not as its name.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "u16", into = "u16")]
pub enum Category {
    /// The request was malformed.
    BadRequest,
    /// The caller is not authenticated.
    Unauthorized,
    /// The caller is authenticated but not allowed to do this.
    InsufficientPermissions,
    /// The requested resource does not exist.
    ResourceNotFound,
    /// The request conflicts with the current state of the resource.
    Conflict,
    /// The service failed while handling the request.
    InternalServerError,
    /// A dependency of the service failed.
    BackendError,
    /// The request did not complete in time.
    RequestTimedOut,
}

const ALL: [Category; 8] = [
    Category::BadRequest,
    Category::Unauthorized,
    Category::InsufficientPermissions,
    Category::ResourceNotFound,
    Category::Conflict,
    Category::InternalServerError,
    Category::BackendError,
    Category::RequestTimedOut,
];

impl Category {
    /// Returns every category in ascending HTTP status order.
    #[must_use]
    pub fn all() -> &'static [Category] {
        &ALL
    }

    /// Returns the HTTP status associated with the category.
    #[must_use]
    pub fn http_status(self) -> u16 {
        match self {
            Category::BadRequest => 400,
            Category::Unauthorized => 401,
            Category::InsufficientPermissions => 403,
            Category::ResourceNotFound => 404,
            Category::Conflict => 409,
            Category::InternalServerError => 500,
            Category::BackendError => 501,
            Category::RequestTimedOut => 504,
        }
    }

    /// Returns whether failures of this category are worth retrying by default.
    #[must_use]
    pub fn is_retriable(self) -> bool {
        matches!(self, Category::BackendError | Category::RequestTimedOut)
    }

    /// Looks up the category for an HTTP status.
    ///
    /// # Returns
    ///
    /// `None` if no category uses the status.
    #[must_use]
    pub fn from_http_status(status: u16) -> Option<Category> {
        ALL.iter().copied().find(|c| c.http_status() == status)
    }

    fn name(self) -> &'static str {
        match self {
            Category::BadRequest => "BadRequest",
            Category::Unauthorized => "Unauthorized",
            Category::InsufficientPermissions => "InsufficientPermissions",
            Category::ResourceNotFound => "ResourceNotFound",
            Category::Conflict => "Conflict",
            Category::InternalServerError => "InternalServerError",
            Category::BackendError => "BackendError",
            Category::RequestTimedOut => "RequestTimedOut",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl From<Category> for u16 {
    fn from(category: Category) -> Self {
        category.http_status()
    }
}

impl TryFrom<u16> for Category {
    type Error = String;

    fn try_from(status: u16) -> Result<Self, Self::Error> {
        Category::from_http_status(status)
            .ok_or_else(|| format!("no error category for HTTP status {}", status))
    }
}
