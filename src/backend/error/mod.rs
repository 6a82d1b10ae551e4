//! Backend Error Module
//!
//! This module defines the error taxonomy of the backend server. These
//! errors are returned from services and handlers and converted to HTTP
//! responses.
//!
//! # Module Structure
//!
//! ```text
//! error/
//! ├── mod.rs        - Module exports and documentation
//! ├── types.rs      - Error type definitions
//! └── conversion.rs - ErrorBody, IntoResponse and extractor rejection conversions
//! ```
//!
//! # Error Types
//!
//! - `BackendError::SharedError` - Validation/decoding failures (400)
//! - `BackendError::Unauthorized` - Missing/invalid token, bad credentials (401)
//! - `BackendError::NotFound` - Unknown or malformed book id (404)
//! - `BackendError::Conflict` - Duplicate email at signup (409)
//! - `BackendError::StoreError` - Persistence failures (500)
//! - `BackendError::Internal` - Hashing or signing failures (500)

/// Error type definitions
pub mod types;

/// Error conversion implementations
pub mod conversion;

// Re-export commonly used types
pub use conversion::ErrorBody;
pub use types::{BackendError, StoreError};
