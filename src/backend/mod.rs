//! Backend Module
//!
//! This module contains all server-side code for the books catalog. It
//! provides an Axum HTTP server with JWT authentication, the book service and
//! its query component, and pluggable stores.
//!
//! This module is only compiled when the `ssr` feature is enabled.
//!
//! # Architecture
//!
//! The backend is organized into focused submodules:
//!
//! - **`server`** - Configuration, application state, initialization
//! - **`routes`** - HTTP route configuration and router assembly
//! - **`books`** - Book service, validation, query component, stores, handlers
//! - **`auth`** - Credential store, JWT tokens, signup/login handlers
//! - **`middleware`** - Bearer token enforcement
//! - **`error`** - Backend error taxonomy and HTTP conversion
//!
//! # Module Structure
//!
//! ```text
//! backend/
//! ├── mod.rs          - Module exports and documentation
//! ├── server/         - Config, state, initialization
//! ├── routes/         - Route configuration
//! ├── books/          - Book catalog
//! ├── auth/           - Authentication
//! ├── middleware/     - Request middleware
//! └── error/          - Error types
//! ```
//!
//! # State Management
//!
//! `AppState` holds the book and auth services. Each service owns its
//! collaborators behind `Arc<dyn ...>` trait objects, so the same router runs
//! against the in-memory stores (tests, no `DATABASE_URL`) or PostgreSQL.
//! Requests are otherwise stateless.
//!
//! # Error Handling
//!
//! Handlers return `Result<_, BackendError>`; `BackendError` implements
//! `IntoResponse` and renders a JSON body with the status code.

/// Server setup and configuration
pub mod server;

/// Route configuration
pub mod routes;

/// Book catalog: service, query component, stores and handlers
pub mod books;

/// Authentication and user management
pub mod auth;

/// Middleware for request processing
pub mod middleware;

/// Backend error types
pub mod error;

/// Re-export commonly used types
pub use error::{BackendError, StoreError};
pub use server::{create_app, AppState};
