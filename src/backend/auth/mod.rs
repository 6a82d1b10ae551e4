//! Authentication Module
//!
//! This module handles user registration, credential checks and session
//! tokens.
//!
//! # Architecture
//!
//! - **`users`** - User model and the `UserStore` implementations
//! - **`sessions`** - JWT claims and the `TokenSigner` implementation
//! - **`service`** - `AuthService` (signup, login, validate, verify_token)
//! - **`handlers`** - HTTP handlers for the auth endpoints
//!
//! # Module Structure
//!
//! ```text
//! auth/
//! ├── mod.rs          - Module exports and documentation
//! ├── users.rs        - User model and credential stores
//! ├── sessions.rs     - JWT token management
//! ├── service.rs      - Authentication service
//! └── handlers/       - HTTP handlers
//!     ├── mod.rs
//!     ├── types.rs
//!     ├── signup.rs
//!     └── login.rs
//! ```
//!
//! # Authentication Flow
//!
//! 1. **Signup**: email and password → user created → JWT returned
//! 2. **Login**: email and password → credentials verified → JWT returned
//! 3. **Protected request**: `Authorization: Bearer <token>` → verified by
//!    `middleware::auth_middleware`
//!
//! # Security
//!
//! - Passwords are hashed using bcrypt before storage
//! - Tokens are stateless; expiry comes from `JWT_EXPIRES_IN_SECS`
//! - Invalid credentials return 401 without saying which part was wrong

/// User model and credential stores
pub mod users;

/// JWT token generation and validation
pub mod sessions;

/// Authentication service
pub mod service;

/// HTTP handlers for authentication endpoints
pub mod handlers;

pub use handlers::types::{AuthResponse, LoginRequest, SignupRequest};
pub use handlers::{login, signup};
pub use service::AuthService;
pub use sessions::{Claims, JwtSigner, TokenSigner};
pub use users::{MemoryUserStore, NewUser, PgUserStore, User, UserStore};
