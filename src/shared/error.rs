//! Shared Error Types
//!
//! This module defines the input errors reported back to API clients.
//!
//! # Error Categories
//!
//! - `ValidationError` - One or more fields failed their constraints
//! - `SerializationError` - The request body or query string could not be decoded
//!
//! # Usage
//!
//! ```rust
//! use books_api::shared::error::{FieldErrors, SharedError};
//!
//! let mut errors = FieldErrors::new();
//! errors.push("price", "price must not be less than 0");
//! let result: Result<(), SharedError> = errors.into_result(());
//! assert!(result.is_err());
//! ```
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// A single constraint violation on a named input field
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "ssr", derive(utoipa::ToSchema))]
pub struct FieldError {
    /// Wire name of the offending field (e.g. `publishedDate`)
    pub field: String,
    /// Human-readable error message
    pub message: String,
}

/// Shared error types surfaced to API clients
#[derive(Debug, Error, Clone, PartialEq)]
pub enum SharedError {
    /// One or more fields failed validation
    #[error("Validation failed: {}", describe(errors))]
    ValidationError {
        /// Every violated constraint, in field order
        errors: Vec<FieldError>,
    },

    /// Request body or query string could not be decoded
    #[error("Serialization error: {message}")]
    SerializationError {
        /// Human-readable error message
        message: String,
    },
}

fn describe(errors: &[FieldError]) -> String {
    errors
        .iter()
        .map(|e| format!("{}: {}", e.field, e.message))
        .collect::<Vec<_>>()
        .join("; ")
}

impl SharedError {
    /// Create a validation error for a single field
    pub fn validation(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self::ValidationError {
            errors: vec![FieldError {
                field: field.into(),
                message: message.into(),
            }],
        }
    }

    /// Create a new serialization error
    pub fn serialization(message: impl Into<String>) -> Self {
        Self::SerializationError {
            message: message.into(),
        }
    }

    /// Field-level detail, if this is a validation error
    pub fn field_errors(&self) -> Option<&[FieldError]> {
        match self {
            Self::ValidationError { errors } => Some(errors),
            Self::SerializationError { .. } => None,
        }
    }
}

impl From<serde_json::Error> for SharedError {
    fn from(err: serde_json::Error) -> Self {
        Self::serialization(format!("JSON error: {}", err))
    }
}

/// Collector used by the validation functions
///
/// Every check pushes its violation here so a client sees all problems
/// with a payload at once instead of one per round trip.
#[derive(Debug, Default)]
pub struct FieldErrors(Vec<FieldError>);

impl FieldErrors {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a violation on `field`
    pub fn push(&mut self, field: impl Into<String>, message: impl Into<String>) {
        self.0.push(FieldError {
            field: field.into(),
            message: message.into(),
        });
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// `Ok(value)` when nothing was recorded, otherwise a `ValidationError`
    pub fn into_result<T>(self, value: T) -> Result<T, SharedError> {
        if self.0.is_empty() {
            Ok(value)
        } else {
            Err(SharedError::ValidationError { errors: self.0 })
        }
    }
}
