//! Shared Module
//!
//! This module contains the types exchanged over the HTTP API. They carry
//! no server dependencies so a Rust client can reuse them without enabling
//! the `ssr` feature.

/// Book records and request payloads
pub mod book;

/// Request body shape checks
pub mod body;

/// Shared error types
pub mod error;

/// Re-export commonly used types for convenience
pub use body::{decode_body, BodyField, FieldKind};
pub use book::{Book, BookPage, CreateBookRequest, UpdateBookRequest};
pub use error::{FieldError, FieldErrors, SharedError};
