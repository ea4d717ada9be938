//! Error types for the library layer.

use std::fmt;

use crate::schemas::FieldErrors;

/// Errors produced by the library layer, wrapping upstream API errors
/// and adding form validation, input and configuration failures.
#[derive(Debug)]
pub enum BlogAdminError {
    /// An error from the underlying API client.
    Api(blog_api::Error),
    /// A form failed its schema. Carries every failing field.
    Validation(FieldErrors),
    /// A page number, id or slug argument was rejected before any request.
    InvalidInput(String),
    /// Required configuration is missing or malformed.
    Config(String),
}

impl fmt::Display for BlogAdminError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Api(e) => write!(f, "API error: {}", e),
            Self::Validation(errors) => write!(f, "Validation failed: {}", errors),
            Self::InvalidInput(msg) => write!(f, "Invalid input: {}", msg),
            Self::Config(msg) => write!(f, "Configuration error: {}", msg),
        }
    }
}

impl std::error::Error for BlogAdminError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Api(e) => Some(e),
            _ => None,
        }
    }
}

impl From<blog_api::Error> for BlogAdminError {
    fn from(e: blog_api::Error) -> Self {
        Self::Api(e)
    }
}

impl From<FieldErrors> for BlogAdminError {
    fn from(errors: FieldErrors) -> Self {
        Self::Validation(errors)
    }
}
