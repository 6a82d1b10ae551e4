//! Middleware Module
//!
//! HTTP middleware for the backend server.
//!
//! - **`auth`** - Bearer token enforcement for the `/books` routes
//!
//! # Example
//!
//! ```rust,no_run
//! use axum::{middleware, routing::get, Router};
//! use books_api::backend::middleware::auth_middleware;
//! use books_api::backend::AppState;
//!
//! # fn example(state: AppState) -> Router {
//! Router::new()
//!     .route("/books", get(|| async { "ok" }))
//!     .route_layer(middleware::from_fn_with_state(state.clone(), auth_middleware))
//!     .with_state(state)
//! # }
//! ```

pub mod auth;

pub use auth::{auth_middleware, AuthUser, AuthenticatedUser};
