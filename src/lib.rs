//! Books API - Main Library
//!
//! Books API is a small catalog backend built with Rust. It exposes CRUD
//! endpoints for book records, a filtered and paginated listing, and JWT
//! authentication obtained through signup and login.
//!
//! # Module Structure
//!
//! The library is organized into two main modules:
//!
//! - **`shared`** - Wire types shared by the server and any Rust client
//!   - Book records, create/update payloads, paginated listings
//!   - Field-level validation errors
//!
//! - **`backend`** - Server-side code (only compiled with `ssr` feature)
//!   - Axum HTTP server, routes and auth middleware
//!   - Book service, query component and stores (memory, PostgreSQL)
//!   - Authentication service, JWT signing and credential store
//!
//! # Feature Flags
//!
//! - **`ssr`** (default) - Enables the backend modules and the server binary.
//!   Without it only the `shared` wire types are compiled.
//!
//! # Usage
//!
//! ```rust,no_run
//! use books_api::backend::server::{config::ServerConfig, init::create_app};
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let config = ServerConfig::from_env()?;
//! let app = create_app(&config).await?;
//! // Serve `app` with axum::serve
//! # Ok(())
//! # }
//! ```
//!
//! # Error Handling
//!
//! - `shared::error::SharedError` for input validation failures
//! - `backend::error::BackendError` for the HTTP error taxonomy
//! - `backend::error::StoreError` for persistence failures

/// Shared types and data structures
pub mod shared;

/// Backend server-side code
#[cfg(feature = "ssr")]
pub mod backend;
