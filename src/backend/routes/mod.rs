//! Route Configuration Module
//!
//! # Module Structure
//!
//! ```text
//! routes/
//! ├── mod.rs          - Module exports and documentation
//! ├── router.rs       - Main router creation
//! ├── api_routes.rs   - Auth and book endpoints
//! └── docs.rs         - OpenAPI document
//! ```
//!
//! # Routes
//!
//! ## Public
//!
//! - `GET /health` - Liveness check
//! - `POST /auth/signup` - User registration
//! - `POST /auth/login` - User login
//! - `GET /api-docs/openapi.json` - OpenAPI document
//! - `GET /docs` - Swagger UI
//!
//! ## Protected (`Authorization: Bearer <token>`)
//!
//! - `POST /books`, `GET /books`
//! - `GET /books/{id}`, `PATCH /books/{id}`, `DELETE /books/{id}`
//!
//! Any other path gets a `404` JSON error body.

/// Main router creation
pub mod router;

/// API endpoint handlers
pub mod api_routes;

/// OpenAPI document
pub mod docs;

pub use docs::ApiDoc;
pub use router::create_router;
