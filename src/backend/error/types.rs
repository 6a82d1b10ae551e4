/**
 * Backend Error Types
 *
 * This module defines the errors raised by services and handlers, plus the
 * error type shared by every store implementation.
 *
 * # Error Categories
 *
 * ## Client Errors
 *
 * - Validation failures carry field-level detail (400)
 * - Missing, malformed or expired tokens and bad credentials (401)
 * - Unknown or malformed book ids (404)
 * - Duplicate signup email (409)
 *
 * ## Server Errors
 *
 * Store failures and hashing/signing failures are reported as 500. Their
 * details are logged, never sent to the client.
 */

use axum::http::StatusCode;
use thiserror::Error;

use crate::shared::{FieldError, SharedError};

/// Errors raised by `BookStore` and `UserStore` implementations
#[derive(Debug, Error)]
pub enum StoreError {
    /// A uniqueness constraint rejected the write
    #[error("Duplicate record: {message}")]
    Duplicate {
        /// Which constraint was violated
        message: String,
    },

    /// The database driver reported a failure
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),
}

impl StoreError {
    pub fn duplicate(message: impl Into<String>) -> Self {
        Self::Duplicate {
            message: message.into(),
        }
    }
}

/// Backend-specific error types
///
/// Each variant maps to one HTTP status code; see [`BackendError::status_code`].
///
/// # Usage
///
/// ```rust
/// use books_api::backend::error::BackendError;
///
/// let err = BackendError::not_found("Book with ID 42 not found");
/// assert_eq!(err.status_code().as_u16(), 404);
/// ```
#[derive(Debug, Error)]
pub enum BackendError {
    /// Input validation or decoding error
    #[error(transparent)]
    SharedError(#[from] SharedError),

    /// Missing/invalid/expired token or bad login credentials
    #[error("Unauthorized: {message}")]
    Unauthorized {
        /// Human-readable error message
        message: String,
    },

    /// Duplicate email at signup
    #[error("Conflict: {message}")]
    Conflict {
        /// Human-readable error message
        message: String,
    },

    /// Unknown or malformed book id
    #[error("Not found: {message}")]
    NotFound {
        /// Human-readable error message
        message: String,
    },

    /// Persistence failure
    #[error(transparent)]
    StoreError(#[from] StoreError),

    /// Password hashing or token signing failure
    #[error("Internal error: {message}")]
    Internal {
        /// Detail for the logs; clients only see a generic message
        message: String,
    },
}

impl BackendError {
    pub fn unauthorized(message: impl Into<String>) -> Self {
        Self::Unauthorized {
            message: message.into(),
        }
    }

    pub fn conflict(message: impl Into<String>) -> Self {
        Self::Conflict {
            message: message.into(),
        }
    }

    pub fn not_found(message: impl Into<String>) -> Self {
        Self::NotFound {
            message: message.into(),
        }
    }

    pub fn internal(message: impl Into<String>) -> Self {
        Self::Internal {
            message: message.into(),
        }
    }

    /// Get the HTTP status code for this error
    ///
    /// # Status Code Mapping
    ///
    /// - `SharedError` - 400 Bad Request
    /// - `Unauthorized` - 401 Unauthorized
    /// - `NotFound` - 404 Not Found
    /// - `Conflict` - 409 Conflict
    /// - `StoreError::Duplicate` - 409 Conflict
    /// - `StoreError::Database`, `Internal` - 500 Internal Server Error
    pub fn status_code(&self) -> StatusCode {
        match self {
            Self::SharedError(_) => StatusCode::BAD_REQUEST,
            Self::Unauthorized { .. } => StatusCode::UNAUTHORIZED,
            Self::Conflict { .. } => StatusCode::CONFLICT,
            Self::NotFound { .. } => StatusCode::NOT_FOUND,
            Self::StoreError(StoreError::Duplicate { .. }) => StatusCode::CONFLICT,
            Self::StoreError(StoreError::Database(_)) => StatusCode::INTERNAL_SERVER_ERROR,
            Self::Internal { .. } => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Message safe to send to the client
    pub fn message(&self) -> String {
        match self {
            Self::SharedError(SharedError::ValidationError { .. }) => {
                "Validation failed".to_string()
            }
            Self::SharedError(err) => err.to_string(),
            Self::Unauthorized { message }
            | Self::Conflict { message }
            | Self::NotFound { message } => message.clone(),
            Self::StoreError(StoreError::Duplicate { message }) => message.clone(),
            Self::StoreError(StoreError::Database(_)) | Self::Internal { .. } => {
                "Internal server error".to_string()
            }
        }
    }

    /// Field-level detail for validation failures
    pub fn details(&self) -> Option<&[FieldError]> {
        match self {
            Self::SharedError(err) => err.field_errors(),
            _ => None,
        }
    }
}
